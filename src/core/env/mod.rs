// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment tables.
//!
//! # Architecture
//!
//! ```text
//! EnvTable (trait): get / contains / insert / remove / entries
//!   ProcessTable   std::env, visible to child processes
//!   MemoryTable    copy-on-write BTreeMap<String, String>
//! ```
//!
//! - **Case-sensitive keys** in `MemoryTable`; `ProcessTable` follows the OS
//! - **UTF-8 only**: non-Unicode process entries are skipped by `entries()`

pub mod container;
pub mod table;


pub use container::MemoryTable;
pub use table::{EnvTable, ProcessTable};

/// Returns why `key` cannot be stored in an environment table, if anything.
pub(crate) fn key_problem(key: &str) -> Option<&'static str> {
    if key.contains('=') {
        Some("keys cannot contain '='")
    } else if key.contains('\0') {
        Some("keys cannot contain NUL")
    } else {
        None
    }
}
