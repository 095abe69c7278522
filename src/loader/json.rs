// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! JSON document parser.
//!
//! Strict: the document must be a single JSON object. Only top-level keys
//! become entries; nested values are kept whole.

use crate::core::value::EnvValue;

/// Parses a JSON object into top-level `(key, value)` pairs.
///
/// # Errors
///
/// Returns a message if the text is not valid JSON or its top level is not
/// an object.
pub fn parse_str(text: &str) -> Result<Vec<(String, EnvValue)>, String> {
    let document: serde_json::Value = serde_json::from_str(text).map_err(|e| e.to_string())?;
    match document {
        serde_json::Value::Object(map) => Ok(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
        other => Err(format!(
            "expected an object at the top level, found {}",
            json_kind(&other)
        )),
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
