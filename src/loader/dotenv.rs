// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.env` line parser.
//!
//! ```text
//! # comment            skipped
//! <blank>              skipped
//! KEY=VALUE            key trimmed, value trimmed
//! KEY="VALUE"          one pair of matching quotes stripped
//! KEY='VALUE'
//! KEY                  empty value
//!  =VALUE              empty key, skipped
//! ```

/// One `KEY=VALUE` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotenvEntry {
    pub key: String,
    /// Cleaned raw value, before casting.
    pub value: String,
    /// 1-based line number.
    pub line: usize,
}

/// Trims `value` and strips one pair of matching surrounding quotes.
#[must_use]
pub fn clean_value(value: &str) -> &str {
    let value = value.trim();
    let bytes = value.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(b'"'), Some(b'"')) | (Some(b'\''), Some(b'\'')) if value.len() >= 2 => {
            &value[1..value.len() - 1]
        }
        _ => value,
    }
}

/// Parses `.env` text into entries, in file order.
#[must_use]
pub fn parse_str(text: &str) -> Vec<DotenvEntry> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }

            let (key, value) = line.split_once('=').unwrap_or((line, ""));
            let key = key.trim();
            if key.is_empty() {
                return None;
            }

            Some(DotenvEntry {
                key: key.to_owned(),
                value: clean_value(value).to_owned(),
                line: index + 1,
            })
        })
        .collect()
}
