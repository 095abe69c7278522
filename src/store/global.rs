// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process-wide default store.
//!
//! ```text
//! STORE: LazyLock<Mutex<EnvStore<ProcessTable>>>
//!   store()  --> MutexGuard (poison is ignored)
//!   get / get_or / set / all
//!   load / load_default / load_yaml / load_json
//!   set_root / root
//!   reset()  --> fresh store: root unset, default YAML decoder
//! ```
//!
//! The mutex serializes callers of this module only. Code that touches
//! `std::env` directly is not synchronized with it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use super::EnvStore;
use crate::core::env::ProcessTable;
use crate::core::value::EnvValue;
use crate::error::EnvResult;
use crate::loader::LoadReport;

static STORE: LazyLock<Mutex<EnvStore<ProcessTable>>> =
    LazyLock::new(|| Mutex::new(EnvStore::process()));

/// Locks the default store.
pub fn store() -> MutexGuard<'static, EnvStore<ProcessTable>> {
    STORE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the default store with a fresh one.
pub fn reset() {
    *store() = EnvStore::process();
}

#[must_use]
pub fn get(key: &str) -> Option<EnvValue> {
    store().get(key)
}

pub fn get_or(key: &str, default: impl Into<EnvValue>) -> EnvValue {
    store().get_or(key, default)
}

/// # Errors
///
/// See [`EnvStore::set`].
pub fn set(key: &str, value: impl Into<EnvValue>) -> EnvResult<()> {
    store().set(key, value)
}

#[must_use]
pub fn all() -> BTreeMap<String, EnvValue> {
    store().all()
}

pub fn set_root(path: Option<PathBuf>) {
    store().set_root(path);
}

#[must_use]
pub fn root() -> PathBuf {
    store().root().to_path_buf()
}

/// # Errors
///
/// See [`EnvStore::load`].
pub fn load<I, P>(paths: I) -> EnvResult<LoadReport>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    store().load(paths)
}

/// # Errors
///
/// See [`EnvStore::load_default`].
pub fn load_default() -> EnvResult<LoadReport> {
    store().load_default()
}

/// # Errors
///
/// See [`EnvStore::load_yaml`].
pub fn load_yaml(path: impl AsRef<Path>) -> EnvResult<LoadReport> {
    store().load_yaml(path)
}

/// # Errors
///
/// See [`EnvStore::load_json`].
pub fn load_json(path: impl AsRef<Path>) -> EnvResult<LoadReport> {
    store().load_json(path)
}
