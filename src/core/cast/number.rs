// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Numeric string detection.
//!
//! ```text
//! [ws] [+|-] ( digits [. [digits]] | . digits ) [ (e|E) [+|-] digits ] [ws]
//!
//! has '.'                       -> Float
//! fits i64                      -> Int
//! exponent, integral, in range  -> Int   ("1e3" -> 1000)
//! anything else numeric         -> Float ("99999999999999999999")
//! ```

use crate::core::value::EnvValue;

/// Whitespace accepted around a numeric string.
const fn is_number_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    i
}

/// Parses `raw` as a number, or returns `None` if it is not numeric.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::float_cmp
)]
pub(crate) fn parse_number(raw: &str) -> Option<EnvValue> {
    let text = raw.trim_matches(is_number_space);
    let bytes = text.as_bytes();

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_end = skip_digits(bytes, i);
    let mut digits = int_end - i;
    i = int_end;

    let has_dot = bytes.get(i) == Some(&b'.');
    if has_dot {
        let frac_end = skip_digits(bytes, i + 1);
        digits += frac_end - (i + 1);
        i = frac_end;
    }
    if digits == 0 {
        return None;
    }

    let mut has_exponent = false;
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = skip_digits(bytes, j);
        if exp_end == j {
            return None;
        }
        i = exp_end;
        has_exponent = true;
    }

    if i != bytes.len() {
        return None;
    }

    if has_dot {
        return text.parse::<f64>().ok().map(EnvValue::Float);
    }
    if !has_exponent && let Ok(n) = text.parse::<i64>() {
        return Some(EnvValue::Int(n));
    }

    let f = text.parse::<f64>().ok()?;
    if has_exponent && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(EnvValue::Int(f as i64))
    } else {
        Some(EnvValue::Float(f))
    }
}
