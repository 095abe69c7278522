// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! YAML decoding capability.
//!
//! ```text
//! EnvStore --> Option<Box<dyn YamlDecoder>>
//!                 Some(SerdeYamlDecoder)   feature "yaml" (default)
//!                 Some(custom)             with_yaml_decoder()
//!                 None                     -> EnvError::DependencyMissing
//! ```

use std::fmt;

use crate::core::value::EnvValue;

/// Decodes a YAML document into top-level `(key, value)` pairs.
pub trait YamlDecoder: Send + Sync {
    /// # Errors
    ///
    /// Returns a message if the document is malformed or its top level is
    /// not a mapping.
    fn decode(&self, text: &str) -> Result<Vec<(String, EnvValue)>, String>;
}

impl fmt::Debug for dyn YamlDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("YamlDecoder")
    }
}

/// Returns the decoder compiled into this build, if any.
#[must_use]
pub fn default_decoder() -> Option<Box<dyn YamlDecoder>> {
    #[cfg(feature = "yaml")]
    {
        Some(Box::new(SerdeYamlDecoder))
    }
    #[cfg(not(feature = "yaml"))]
    {
        None
    }
}

#[cfg(feature = "yaml")]
pub use serde_impl::SerdeYamlDecoder;

#[cfg(feature = "yaml")]
mod serde_impl {
    use std::collections::BTreeMap;

    use serde_yaml::Value;

    use super::YamlDecoder;
    use crate::core::value::EnvValue;

    /// [`YamlDecoder`] backed by `serde_yaml`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SerdeYamlDecoder;

    impl YamlDecoder for SerdeYamlDecoder {
        fn decode(&self, text: &str) -> Result<Vec<(String, EnvValue)>, String> {
            if text.trim().is_empty() {
                return Ok(Vec::new());
            }
            let document: Value = serde_yaml::from_str(text).map_err(|e| e.to_string())?;
            match untag(document) {
                // An empty document has no entries
                Value::Null => Ok(Vec::new()),
                Value::Mapping(mapping) => mapping
                    .into_iter()
                    .map(|(k, v)| Ok((key_to_string(k)?, to_env_value(v)?)))
                    .collect(),
                _ => Err("expected a mapping at the top level".to_string()),
            }
        }
    }

    fn untag(value: Value) -> Value {
        match value {
            Value::Tagged(tagged) => untag(tagged.value),
            other => other,
        }
    }

    fn key_to_string(key: Value) -> Result<String, String> {
        match key {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null => Ok(String::new()),
            Value::Tagged(tagged) => key_to_string(tagged.value),
            Value::Sequence(_) | Value::Mapping(_) => {
                Err("mapping keys must be scalars".to_string())
            }
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_env_value(value: Value) -> Result<EnvValue, String> {
        Ok(match value {
            Value::Null => EnvValue::Null,
            Value::Bool(b) => EnvValue::Bool(b),
            Value::Number(n) => match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => EnvValue::Int(i),
                (None, Some(u)) => EnvValue::Float(u as f64),
                (None, None) => EnvValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => EnvValue::String(s),
            Value::Sequence(items) => EnvValue::List(
                items
                    .into_iter()
                    .map(to_env_value)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Mapping(mapping) => EnvValue::Map(
                mapping
                    .into_iter()
                    .map(|(k, v)| Ok((key_to_string(k)?, to_env_value(v)?)))
                    .collect::<Result<BTreeMap<_, _>, String>>()?,
            ),
            Value::Tagged(tagged) => to_env_value(tagged.value)?,
        })
    }
}
