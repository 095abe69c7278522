// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The environment store.
//!
//! # Architecture
//!
//! ```text
//! EnvStore<T: EnvTable>
//!   table   ProcessTable (default) | MemoryTable
//!   root    base directory for <root>/.env
//!   yaml    Option<Box<dyn YamlDecoder>>
//!
//! load / load_default / load_yaml / load_json
//!        |  parse, cast, warn on existing keys
//!        v
//!      set(key, EnvValue) --> table.insert | table.remove
//!
//! get / get_or / all  <-- table --> cast_str
//! ```
//!
//! `global` wraps a process-table store in a mutex for code that wants the
//! ambient, process-wide instance.

pub mod global;
pub mod root;


use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::core::cast::{cast_str, cast_value};
use crate::core::env::{EnvTable, ProcessTable, key_problem};
use crate::core::value::EnvValue;
use crate::error::{EnvError, EnvResult, Format};
use crate::loader::yaml::{self, YamlDecoder};
use crate::loader::{LoadReport, dotenv, json, read_file};

/// A typed view over an environment table plus the loaders that fill it.
#[derive(Debug)]
pub struct EnvStore<T: EnvTable = ProcessTable> {
    table: T,
    root: Option<PathBuf>,
    yaml: Option<Box<dyn YamlDecoder>>,
}

impl EnvStore<ProcessTable> {
    /// Creates a store over the process environment.
    #[must_use]
    pub fn process() -> Self {
        Self::new(ProcessTable)
    }
}

impl Default for EnvStore<ProcessTable> {
    fn default() -> Self {
        Self::process()
    }
}

impl<T: EnvTable> EnvStore<T> {
    /// Creates a store over `table` with the compiled-in YAML decoder.
    pub fn new(table: T) -> Self {
        Self {
            table,
            root: None,
            yaml: yaml::default_decoder(),
        }
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Installs a YAML decoder, replacing the compiled-in one.
    #[must_use]
    pub fn with_yaml_decoder(mut self, decoder: impl YamlDecoder + 'static) -> Self {
        self.yaml = Some(Box::new(decoder));
        self
    }

    /// Removes YAML support; `load_yaml` then fails with
    /// [`EnvError::DependencyMissing`].
    #[must_use]
    pub fn without_yaml_decoder(mut self) -> Self {
        self.yaml = None;
        self
    }

    pub const fn table(&self) -> &T {
        &self.table
    }

    pub fn into_table(self) -> T {
        self.table
    }

    // --- Root ---

    /// Sets the root directory. `None` selects the working directory.
    pub fn set_root(&mut self, path: Option<PathBuf>) {
        let root = path.unwrap_or_else(root::project_root);
        debug!(root = %root.display(), "set root");
        self.root = Some(root);
    }

    /// Returns the root directory, defaulting it to the executable's
    /// directory on first use.
    pub fn root(&mut self) -> &Path {
        self.root.get_or_insert_with(root::install_root).as_path()
    }

    /// Path of the default `.env` file.
    pub fn default_env_path(&mut self) -> PathBuf {
        self.root().join(root::DEFAULT_ENV_FILE)
    }

    // --- Accessors ---

    /// Returns the raw string stored for `key`.
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<String> {
        if key.is_empty() || key_problem(key).is_some() {
            return None;
        }
        self.table.get(key)
    }

    /// Returns the cast value of `key`, or `None` if it is not set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<EnvValue> {
        self.get_raw(key).map(|raw| cast_str(&raw))
    }

    /// Returns the cast value of `key`, or `default` if it is not set.
    pub fn get_or(&self, key: &str, default: impl Into<EnvValue>) -> EnvValue {
        self.get(key).unwrap_or_else(|| default.into())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        !key.is_empty() && key_problem(key).is_none() && self.table.contains(key)
    }

    /// Writes `value` under `key`.
    ///
    /// An empty key is ignored. [`EnvValue::Null`] removes the key; any other
    /// value is stored as its [`EnvValue::to_env_string`] form.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidKey`] if the key contains `=` or NUL and
    /// [`EnvError::InvalidValue`] if the stored string would contain NUL.
    pub fn set(&mut self, key: &str, value: impl Into<EnvValue>) -> EnvResult<()> {
        if key.is_empty() {
            return Ok(());
        }
        if let Some(reason) = key_problem(key) {
            return Err(EnvError::InvalidKey {
                key: key.to_owned(),
                reason,
            });
        }

        match value.into().to_env_string() {
            None => {
                trace!(key, "remove");
                self.table.remove(key);
            }
            Some(text) => {
                if text.contains('\0') {
                    return Err(EnvError::InvalidValue {
                        key: key.to_owned(),
                        reason: "values cannot contain NUL",
                    });
                }
                trace!(key, "set");
                self.table.insert(key, &text);
            }
        }
        Ok(())
    }

    /// Returns every entry of the table, cast.
    #[must_use]
    pub fn all(&self) -> BTreeMap<String, EnvValue> {
        self.table
            .entries()
            .into_iter()
            .map(|(key, raw)| (key, cast_str(&raw)))
            .collect()
    }

    // --- Loaders ---

    /// Loads `<root>/.env`.
    ///
    /// # Errors
    ///
    /// See [`EnvStore::load`].
    pub fn load_default(&mut self) -> EnvResult<LoadReport> {
        let path = self.default_env_path();
        self.load([path])
    }

    /// Loads `.env` files in order; later files overwrite earlier ones.
    ///
    /// Files before a failing one stay applied.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::FileAccess`] for a missing or unreadable file, or
    /// [`EnvError::InvalidValue`] for a value containing NUL. Keys containing
    /// `=` or NUL are skipped with a warning and listed in
    /// [`LoadReport::skipped`].
    pub fn load<I, P>(&mut self, paths: I) -> EnvResult<LoadReport>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = LoadReport::default();
        for path in paths {
            let path = path.as_ref();
            let text = read_file(Format::Dotenv, path)?;
            report.files.push(path.to_path_buf());

            for entry in dotenv::parse_str(&text) {
                trace!(key = %entry.key, line = entry.line, "dotenv entry");
                self.apply(&mut report, path, entry.key, cast_str(&entry.value))?;
            }
        }
        Ok(report)
    }

    /// Loads the top-level keys of a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::FileAccess`] for a missing or unreadable file,
    /// [`EnvError::DependencyMissing`] if no YAML decoder is installed, and
    /// [`EnvError::Parse`] for a malformed document.
    pub fn load_yaml(&mut self, path: impl AsRef<Path>) -> EnvResult<LoadReport> {
        let path = path.as_ref();
        let text = read_file(Format::Yaml, path)?;
        let decoder = self.yaml.as_ref().ok_or(EnvError::DependencyMissing {
            capability: "YAML",
            hint: "build with the `yaml` feature or install a decoder with `with_yaml_decoder`",
        })?;
        let pairs = decoder
            .decode(&text)
            .map_err(|message| EnvError::parse(Format::Yaml, path, message))?;
        self.apply_pairs(path, pairs)
    }

    /// Loads the top-level keys of a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::FileAccess`] for a missing or unreadable file and
    /// [`EnvError::Parse`] for invalid JSON or a non-object document.
    pub fn load_json(&mut self, path: impl AsRef<Path>) -> EnvResult<LoadReport> {
        let path = path.as_ref();
        let text = read_file(Format::Json, path)?;
        let pairs =
            json::parse_str(&text).map_err(|message| EnvError::parse(Format::Json, path, message))?;
        self.apply_pairs(path, pairs)
    }

    fn apply_pairs(
        &mut self,
        path: &Path,
        pairs: Vec<(String, EnvValue)>,
    ) -> EnvResult<LoadReport> {
        let mut report = LoadReport {
            files: vec![path.to_path_buf()],
            ..LoadReport::default()
        };
        for (key, value) in pairs {
            self.apply(&mut report, path, key, cast_value(value))?;
        }
        Ok(report)
    }

    /// Writes one loaded entry, warning when it replaces an existing key or
    /// when the key cannot be stored.
    fn apply(
        &mut self,
        report: &mut LoadReport,
        path: &Path,
        key: String,
        value: EnvValue,
    ) -> EnvResult<()> {
        if key.is_empty() {
            return Ok(());
        }
        if let Some(reason) = key_problem(&key) {
            warn!(
                key = %key.escape_debug(),
                file = %path.display(),
                reason,
                "key cannot be stored and is skipped"
            );
            report.skipped.push(key);
            return Ok(());
        }
        if self.contains(&key) {
            warn!(
                key = %key,
                file = %path.display(),
                "key already exists and will be overwritten"
            );
            report.overwritten.push(key.clone());
        }

        let removed = value.is_null();
        self.set(&key, value)?;
        if removed {
            report.removed.push(key);
        } else {
            report.applied.push(key);
        }
        Ok(())
    }
}
