//! Ancestor chain from the filesystem root to the home directory.

use std::path::{Path, PathBuf};

/// Returns every directory from the filesystem root down to the user's
/// home directory, root-first.
///
/// When the home directory is missing or unreadable the chain falls back
/// to the root alone; each fallback is logged. If `/` itself is unreadable
/// there is nothing sensible left to do, so the root is returned anyway.
pub fn paths_to_home() -> Vec<PathBuf> {
    let home = dirs::home_dir().unwrap_or_else(|| {
        tracing::warn!("home directory unknown, falling back to /");
        PathBuf::from("/")
    });

    let home = if home.is_dir() {
        home
    } else {
        tracing::warn!(path = %home.display(), "home path missing, falling back to /");
        PathBuf::from("/")
    };

    let home = if std::fs::read_dir(&home).is_ok() {
        home
    } else {
        tracing::warn!(path = %home.display(), "home path not readable, falling back to /");
        PathBuf::from("/")
    };

    let mut paths: Vec<PathBuf> = home.ancestors().map(Path::to_path_buf).collect();
    paths.reverse();
    paths
}
