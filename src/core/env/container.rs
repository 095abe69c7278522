// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory environment table with copy-on-write semantics.
//!
//! # Architecture
//!
//! ```text
//! MemoryTable (copy-on-write)
//! vars: Arc<BTreeMap<String, String>>
//! clone shares the Arc until the first write (Arc::make_mut)
//! ```

use super::table::EnvTable;
use std::collections::BTreeMap;
use std::sync::Arc;

/// An isolated environment table.
///
/// Used by tests and by callers that want typed loading without touching
/// the process environment. Cloning is cheap: clones share data until one
/// of them is modified.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    vars: Arc<BTreeMap<String, String>>,
}

impl MemoryTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars: Arc::new(vars),
        }
    }

    /// Snapshots the current process environment.
    ///
    /// Entries that are not valid Unicode are skipped.
    #[must_use]
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self::from_map(vars)
    }

    /// Returns all variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        (*self.vars).clone()
    }

    /// Returns an iterator over variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if both tables still share the same data.
    #[must_use]
    pub fn shares_data_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.vars, &other.vars)
    }
}

impl EnvTable for MemoryTable {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    fn insert(&mut self, key: &str, value: &str) {
        Arc::make_mut(&mut self.vars).insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        if self.vars.contains_key(key) {
            Arc::make_mut(&mut self.vars).remove(key);
        }
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
