// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! Loads `.env`, YAML and JSON files into an environment table and reads
//! entries back as typed values.
//!
//! # Crate Architecture
//!
//! ```text
//!                   application code
//!                           |
//!                           v
//!              ,---------------------------,
//!              |           store           |
//!              |  EnvStore<T>, global, root|
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              loader       cast      env
//!          dotenv/yaml/json chain   tables
//!                             |
//!                           value
//!
//!   +-----------------------------------------+
//!   |  core   value, cast, env tables         |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```no_run
//! use envstore::{EnvStore, EnvValue, MemoryTable};
//!
//! let mut store = EnvStore::new(MemoryTable::new());
//! store.set("PORT", 8080)?;
//! assert_eq!(store.get("PORT"), Some(EnvValue::Int(8080)));
//! # Ok::<(), envstore::EnvError>(())
//! ```

pub mod core;
pub mod error;
pub mod loader;
pub mod logging;
pub mod store;

pub use crate::core::cast::serialized::SerializedObject;
pub use crate::core::cast::{cast_str, cast_value};
pub use crate::core::env::{EnvTable, MemoryTable, ProcessTable};
pub use crate::core::value::EnvValue;
pub use crate::error::{EnvError, EnvResult, Result};
pub use crate::loader::LoadReport;
pub use crate::store::EnvStore;
