//! Error types for `fbrowse-core`.
//!
//! All fallible operations in the crate return [`CoreResult<T>`], an alias
//! for `Result<T, CoreError>`. The model layer absorbs most of these into
//! empty/`None`/`false` results (see [`crate::model::DirModel`]); the raw
//! variants are surfaced by the lower-level [`crate::fs::ops`] functions.

use std::path::PathBuf;

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message or take corrective action.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to a file.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A rename target already exists; renames never clobber.
    #[error("target already exists: {0}")]
    AlreadyExists(PathBuf),

    /// A file name is invalid (empty, `.`, `..`, or contains separators).
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout `fbrowse-core`.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn not_found_displays_path() {
        let err = CoreError::NotFound(PathBuf::from("/missing/file"));
        assert_eq!(err.to_string(), "path not found: /missing/file");
    }

    #[test]
    fn permission_denied_displays_path() {
        let err = CoreError::PermissionDenied(PathBuf::from("/secret"));
        assert_eq!(err.to_string(), "permission denied: /secret");
    }

    #[test]
    fn not_a_directory_displays_path() {
        let err = CoreError::NotADirectory(PathBuf::from("/some/file.txt"));
        assert_eq!(err.to_string(), "not a directory: /some/file.txt");
    }

    #[test]
    fn already_exists_displays_path() {
        let err = CoreError::AlreadyExists(PathBuf::from("/tmp/taken.txt"));
        assert_eq!(err.to_string(), "target already exists: /tmp/taken.txt");
    }

    #[test]
    fn invalid_name_displays_message() {
        let err = CoreError::InvalidName("bad/name".to_string());
        assert_eq!(err.to_string(), "invalid name: bad/name");
    }

    #[test]
    fn config_parse_displays_message() {
        let err = CoreError::ConfigParse("unexpected token".to_string());
        assert_eq!(err.to_string(), "config parse error: unexpected token");
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let core_err: CoreError = io_err.into();
        assert!(matches!(core_err, CoreError::Io(_)));
        assert!(core_err.to_string().contains("gone"));
    }

    #[test]
    fn error_is_debug() {
        let err = CoreError::NotFound(PathBuf::from("/test"));
        let debug = format!("{:?}", err);
        assert!(debug.contains("NotFound"));
    }
}
