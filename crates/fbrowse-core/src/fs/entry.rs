//! Directory entry representation.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use unicode_normalization::UnicodeNormalization;

/// Fixed icon identifier for directories; resolved by the frontend theme.
pub const DIRECTORY_ICON: &str = "image://theme/icon-m-common-directory";

/// Fixed icon identifier for ordinary files; resolved by the frontend theme.
pub const DOCUMENT_ICON: &str = "image://theme/icon-m-content-document";

/// One member of a directory snapshot.
///
/// `Entry` is immutable and scoped to the snapshot that produced it; every
/// refresh builds a fresh set. Hidden members (leading `.`) are filtered
/// out during enumeration and never become entries.
///
/// # Examples
///
/// ```no_run
/// use fbrowse_core::Entry;
/// use std::fs;
///
/// let metadata = fs::metadata("Cargo.toml").unwrap();
/// let entry = Entry::new("Cargo.toml".into(), &metadata);
/// assert_eq!(entry.name(), "Cargo.toml");
/// assert!(entry.is_file());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    name: String,
    size: u64,
    created: Option<SystemTime>,
    modified: Option<SystemTime>,
    is_dir: bool,
}

impl Entry {
    /// Creates a new `Entry` from a path and its metadata.
    ///
    /// The name is NFC-normalized (macOS reports NFD). Size is
    /// `Metadata::len()` for directories too — the directory inode size,
    /// not a recursive total.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();

        Self {
            path,
            name,
            size: metadata.len(),
            created: metadata.created().ok(),
            modified: metadata.modified().ok(),
            is_dir: metadata.is_dir(),
        }
    }

    /// Returns the full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the entry name (last component of the path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the size in bytes reported by the filesystem.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the creation time, if the filesystem reports one.
    pub fn created(&self) -> Option<SystemTime> {
        self.created
    }

    /// Returns the last-modified time, if available.
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns `true` if this entry is a file. Always the complement of
    /// [`Entry::is_dir`].
    pub fn is_file(&self) -> bool {
        !self.is_dir
    }

    /// Returns the icon resource identifier for this entry.
    ///
    /// Names ending in `.jpg` or `.png` yield a `file://` URL so the
    /// frontend can show a thumbnail; this check deliberately precedes the
    /// directory test, so a directory named `x.png` also gets the URL.
    /// Everything else maps to one of two fixed theme identifiers.
    pub fn icon_source(&self) -> String {
        if self.name.ends_with(".jpg") || self.name.ends_with(".png") {
            return format!("file://{}", self.path.display());
        }

        if self.is_dir {
            DIRECTORY_ICON.to_string()
        } else {
            DOCUMENT_ICON.to_string()
        }
    }
}
