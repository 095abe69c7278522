// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!                 EnvError
//!                     |
//!   +---------+-------+-------+---------+
//!   |         |               |         |
//!   v         v               v         v
//! FileAccess  DependencyMissing  Parse  InvalidKey/InvalidValue
//!
//! Store calls return EnvResult<T>.
//! Logging setup returns anyhow::Result<T>.
//! ```
//!
//! Loaders do not fail on an existing key or on a key the table cannot hold.
//! Both are reported through `tracing::warn!` and the loader's `LoadReport`.

use std::fmt;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvError`].
pub type EnvResult<T> = std::result::Result<T, EnvError>;

/// Source format of a loaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `KEY=VALUE` text file.
    Dotenv,
    /// YAML document.
    Yaml,
    /// JSON document.
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dotenv => write!(f, ".env"),
            Self::Yaml => write!(f, "YAML"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// Errors raised by loaders and the environment store.
#[derive(Debug, Error)]
pub enum EnvError {
    /// File does not exist or cannot be read.
    #[error("{format} file not found or unreadable: {path}")]
    FileAccess {
        format: Format,
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A required decoding capability is not available.
    #[error("{capability} support is not available: {hint}")]
    DependencyMissing {
        capability: &'static str,
        hint: &'static str,
    },

    /// File content could not be parsed.
    #[error("failed to parse {format} file '{path}': {message}")]
    Parse {
        format: Format,
        path: String,
        message: String,
    },

    /// Key cannot be stored in an environment table.
    #[error("invalid key '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },

    /// Value cannot be stored in an environment table.
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: &'static str },
}

impl EnvError {
    pub(crate) fn file_access(
        format: Format,
        path: &std::path::Path,
        source: std::io::Error,
    ) -> Self {
        Self::FileAccess {
            format,
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn parse(format: Format, path: &std::path::Path, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Returns true for errors caused by a missing or unreadable file.
    #[must_use]
    pub const fn is_file_access(&self) -> bool {
        matches!(self, Self::FileAccess { .. })
    }
}
