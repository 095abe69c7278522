// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Value caster: best-effort typed interpretation of raw strings.
//!
//! # Cast Chain
//!
//! ```text
//! cast_value(EnvValue)
//!   non-string --> unchanged
//!   String(s)  --> cast_str(s)
//!
//! cast_str(s): first matching step wins
//!   1. null        "null" (any case)          -> Null
//!   2. bool        "true" / "false" (any case) -> Bool
//!   3. number      numeric string             -> Int | Float
//!   4. json        non-empty [..] or {..}     -> List | Map
//!   5. serialized  O:<len>:"<Class>":<n>:{..} -> Object
//!   otherwise                                 -> String(s)
//! ```
//!
//! A string result is always the input itself, so casting is idempotent.

pub mod number;
pub mod serialized;

#[cfg(test)]
mod tests;

use tracing::trace;

use crate::core::value::EnvValue;
use serialized::SerializedObject;

/// One step of the cast chain: returns the typed value if the step matches.
type CastStep = fn(&str) -> Option<EnvValue>;

const CAST_CHAIN: [(&str, CastStep); 5] = [
    ("null", cast_null),
    ("bool", cast_bool),
    ("number", number::parse_number),
    ("json", cast_json),
    ("serialized", cast_serialized),
];

fn cast_null(raw: &str) -> Option<EnvValue> {
    raw.eq_ignore_ascii_case("null").then_some(EnvValue::Null)
}

fn cast_bool(raw: &str) -> Option<EnvValue> {
    if raw.eq_ignore_ascii_case("true") {
        Some(EnvValue::Bool(true))
    } else if raw.eq_ignore_ascii_case("false") {
        Some(EnvValue::Bool(false))
    } else {
        None
    }
}

/// Accepts JSON arrays and objects; empty ones are falsy and stay text.
fn cast_json(raw: &str) -> Option<EnvValue> {
    if !matches!(raw.trim_start().as_bytes().first(), Some(b'[' | b'{')) {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(raw).ok()? {
        serde_json::Value::Array(items) if !items.is_empty() => {
            Some(serde_json::Value::Array(items).into())
        }
        serde_json::Value::Object(map) if !map.is_empty() => {
            Some(serde_json::Value::Object(map).into())
        }
        _ => None,
    }
}

fn cast_serialized(raw: &str) -> Option<EnvValue> {
    if !SerializedObject::matches(raw) {
        return None;
    }
    SerializedObject::decode(raw).map(EnvValue::Object)
}

fn run_chain(raw: &str) -> Option<EnvValue> {
    CAST_CHAIN.iter().find_map(|(name, step)| {
        let value = step(raw)?;
        trace!(step = *name, to = value.type_name(), "cast value");
        Some(value)
    })
}

/// Infers a typed value from a raw string.
#[must_use]
pub fn cast_str(raw: &str) -> EnvValue {
    run_chain(raw).unwrap_or_else(|| EnvValue::String(raw.to_owned()))
}

/// Casts a value: strings go through the cast chain, anything else is
/// returned unchanged.
#[must_use]
pub fn cast_value(value: EnvValue) -> EnvValue {
    match value {
        EnvValue::String(raw) => run_chain(&raw).unwrap_or(EnvValue::String(raw)),
        other => other,
    }
}
