//! Directory enumeration and mutation primitives.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::Entry;

/// Reads the immediate, non-hidden contents of a directory.
///
/// Hidden members (names with a leading `.`) are dropped here so they never
/// materialize as [`Entry`] values. Children whose metadata cannot be read
/// are skipped with a warning. The returned entries are **unsorted**; the
/// model applies [`crate::model::sort::sort_entries`] afterwards.
///
/// # Errors
///
/// - [`CoreError::NotFound`] — the path does not exist.
/// - [`CoreError::NotADirectory`] — the path is not a directory.
/// - [`CoreError::PermissionDenied`] — read access is denied.
/// - [`CoreError::Io`] — any other I/O error.
pub fn read_directory(path: &Path) -> CoreResult<Vec<Entry>> {
    if !path.exists() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            CoreError::PermissionDenied(path.to_path_buf())
        } else {
            CoreError::Io(e)
        }
    })?;

    let mut entries = Vec::new();

    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        if dir_entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let metadata = match dir_entry.metadata() {
            Ok(m) => m,
            Err(err) => {
                tracing::warn!(
                    path = %dir_entry.path().display(),
                    error = %err,
                    "skipping unreadable entry"
                );
                continue;
            }
        };

        entries.push(Entry::new(dir_entry.path(), &metadata));
    }

    Ok(entries)
}

/// Deletes a single file.
///
/// Directories are deliberately not handled: `std::fs::remove_file` fails
/// on them and the error is propagated to the caller. The model logs such
/// failures and moves on.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `path` does not exist.
/// - [`CoreError::PermissionDenied`] if deletion is denied.
/// - [`CoreError::Io`] for any other failure, including directory paths.
pub fn remove_file(path: &Path) -> CoreResult<()> {
    std::fs::remove_file(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
        _ => CoreError::Io(e),
    })
}

/// Renames a file or directory within its parent directory.
///
/// `new_name` must be a bare name (no path separators, not empty, not `.`
/// or `..`). The rename never clobbers: an existing target fails with
/// [`CoreError::AlreadyExists`] — `std::fs::rename` would silently replace
/// a file, which the browser must not do. Returns the new path.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if `path` does not exist.
/// - [`CoreError::InvalidName`] if `new_name` is invalid.
/// - [`CoreError::AlreadyExists`] if the target name is taken.
/// - [`CoreError::Io`] for any other I/O failure.
pub fn rename_entry(path: &Path, new_name: &str) -> CoreResult<PathBuf> {
    if std::fs::symlink_metadata(path).is_err() {
        return Err(CoreError::NotFound(path.to_path_buf()));
    }

    if !is_valid_filename(new_name) {
        return Err(CoreError::InvalidName(new_name.to_string()));
    }

    let parent = path
        .parent()
        .ok_or_else(|| CoreError::InvalidName("no parent directory".to_string()))?;
    let new_path = parent.join(new_name);

    if std::fs::symlink_metadata(&new_path).is_ok() {
        return Err(CoreError::AlreadyExists(new_path));
    }

    std::fs::rename(path, &new_path)?;

    Ok(new_path)
}

fn is_valid_filename(name: &str) -> bool {
    if name.is_empty() || name == "." || name == ".." {
        return false;
    }
    if name.contains('/') || name.contains('\0') {
        return false;
    }
    #[cfg(windows)]
    if name.contains('\\') || name.contains(':') {
        return false;
    }
    true
}
