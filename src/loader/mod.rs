// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! File loaders.
//!
//! # Loader Pipeline
//!
//! ```text
//! read_file(format, path) --> text
//!        |
//!        +-- dotenv::parse_str  --> [(key, raw string)] --> cast_str
//!        +-- yaml decoder       --> [(key, EnvValue)]   --> cast_value
//!        +-- json::parse_str    --> [(key, EnvValue)]   --> cast_value
//!                                          |
//!                                          v
//!                                 EnvStore::set (+ LoadReport)
//! ```
//!
//! Parsers here are pure; the store owns file access and table writes.

pub mod dotenv;
pub mod json;
pub mod yaml;


use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{EnvError, EnvResult, Format};

/// Outcome of one or more load calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Files read, in order.
    pub files: Vec<PathBuf>,
    /// Keys written, in order (a key appears once per write).
    pub applied: Vec<String>,
    /// Keys removed by a `null` value.
    pub removed: Vec<String>,
    /// Keys that already existed when a loader wrote them.
    pub overwritten: Vec<String>,
    /// Keys the table cannot hold (`=` or NUL), left out of the load.
    pub skipped: Vec<String>,
}

impl LoadReport {
    /// Appends another report.
    pub fn merge(&mut self, other: Self) {
        self.files.extend(other.files);
        self.applied.extend(other.applied);
        self.removed.extend(other.removed);
        self.overwritten.extend(other.overwritten);
        self.skipped.extend(other.skipped);
    }

    /// Every key written or removed, deduplicated.
    #[must_use]
    pub fn touched_keys(&self) -> BTreeSet<&str> {
        self.applied
            .iter()
            .chain(&self.removed)
            .map(String::as_str)
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.removed.is_empty()
    }
}

/// Reads a whole file as UTF-8.
///
/// # Errors
///
/// Returns [`EnvError::FileAccess`] if the file is missing, is not a regular
/// readable file, or is not valid UTF-8.
pub fn read_file(format: Format, path: &Path) -> EnvResult<String> {
    let text =
        std::fs::read_to_string(path).map_err(|e| EnvError::file_access(format, path, e))?;
    debug!(path = %path.display(), format = %format, bytes = text.len(), "read file");
    Ok(text)
}
