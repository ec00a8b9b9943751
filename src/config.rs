//! Configuration management.
//!
//! Paddock keeps everything in one flat garage file. This module resolves
//! where that file lives; no other configuration exists.

use std::path::{Path, PathBuf};

/// Get the global Paddock directory location (`~/.paddock`).
#[must_use]
pub fn global_paddock_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".paddock"))
}

/// Resolve the garage file path.
///
/// Priority:
/// 1. Explicit path, if one was given
/// 2. Global location: `~/.paddock/garage.csv`
///
/// The `PADDOCK_FILE` environment variable is not consulted here: clap
/// feeds it into the `--file` flag, so by the time a command runs it is
/// already the explicit path. Parent directories are created lazily by
/// the store's first save, not here.
#[must_use]
pub fn resolve_store_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    global_paddock_dir().map(|dir| dir.join("garage.csv"))
}
