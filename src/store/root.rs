// envstore: process-wide environment loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Root directory defaults.
//!
//! ```text
//! set_root(None)   --> working directory      (project root)
//! root() unset     --> executable's directory (falls back to cwd)
//! ```

use std::path::PathBuf;

/// Name of the default `.env` file under the root.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Directory used by `set_root(None)`.
pub(crate) fn project_root() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Directory used when the root is read before being set.
pub(crate) fn install_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(project_root)
}
