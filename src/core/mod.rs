// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for typed values and environment tables.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!   value      cast      env
//!     |         |         |
//!  EnvValue  cast chain  EnvTable
//!            number      ProcessTable
//!            serialized  MemoryTable
//! ```

pub mod cast;
pub mod env;
pub mod value;
