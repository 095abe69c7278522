// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment table abstraction and the process-backed table.

use std::ffi::OsString;

/// A flat, case-sensitive table of string keys to string values.
///
/// Keys passed to `insert`/`remove` are validated by the caller: non-empty,
/// no `=` and no NUL. Values contain no NUL.
pub trait EnvTable {
    /// Returns the raw value of `key`.
    fn get(&self, key: &str) -> Option<String>;

    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn insert(&mut self, key: &str, value: &str);

    fn remove(&mut self, key: &str);

    /// Returns every entry whose key and value are valid Unicode.
    fn entries(&self) -> Vec<(String, String)>;
}

/// The environment of the current process.
///
/// Writes go through `std::env::set_var`/`remove_var` and are visible to
/// child processes. They must only happen while no other thread reads or
/// writes the environment, typically during startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessTable;

impl EnvTable for ProcessTable {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn contains(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }

    fn insert(&mut self, key: &str, value: &str) {
        // SAFETY: the store writes the environment from a single thread
        // during bootstrap; see the type-level docs.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        // SAFETY: as for `insert`.
        unsafe {
            std::env::remove_var(key);
        }
    }

    fn entries(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(k, v): (OsString, OsString)| {
                Some((k.into_string().ok()?, v.into_string().ok()?))
            })
            .collect()
    }
}
