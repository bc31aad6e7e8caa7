//! The directory snapshot model.
//!
//! [`DirModel`] owns the current directory path and an ordered snapshot of
//! its visible entries. The snapshot is replaced wholesale by
//! [`DirModel::set_path`] and never edited in place; between refreshes it
//! is allowed to go stale. All operations are synchronous and block the
//! caller until filesystem I/O completes.

pub mod fields;
pub mod sort;

use std::path::{Path, PathBuf};
use std::sync::mpsc;

use crate::event::Event;
use crate::fs::entry::Entry;
use crate::fs::ops;
use fields::{Field, FieldValue};

/// Directory-listing model backing a file-browser UI.
///
/// Filesystem errors never propagate out of this type: enumeration
/// failures degrade to an empty snapshot, bad rows and unknown field names
/// degrade to `None`, and mutation failures come back as `false` or are
/// logged per item. Every absorbed failure emits a `tracing` diagnostic.
#[derive(Debug, Default)]
pub struct DirModel {
    current_path: PathBuf,
    entries: Vec<Entry>,
    subscribers: Vec<mpsc::Sender<Event>>,
}

impl DirModel {
    /// Creates an empty model. Populate it with [`DirModel::set_path`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the directory path the snapshot currently describes.
    pub fn path(&self) -> &Path {
        &self.current_path
    }

    /// Replaces the snapshot with the contents of `path`.
    ///
    /// Immediate children only; hidden names are dropped; the result is
    /// sorted with [`sort::sort_entries`]. The held path is replaced even
    /// when enumeration fails — a missing or unreadable directory yields
    /// an empty snapshot rather than an error, so the UI shows an empty
    /// listing instead of blocking navigation. Emits
    /// [`Event::PathChanged`] after the swap.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        tracing::debug!(path = %path.display(), "changing directory");

        let mut entries = match ops::read_directory(&path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "enumeration failed, snapshot is empty"
                );
                Vec::new()
            }
        };
        sort::sort_entries(&mut entries);

        self.current_path = path;
        self.entries = entries;

        self.emit(Event::PathChanged {
            path: self.current_path.clone(),
        });
    }

    /// Re-reads the currently held directory.
    pub fn refresh(&mut self) {
        self.set_path(self.current_path.clone());
    }

    /// Number of entries in the current snapshot.
    pub fn row_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entry at `row`, or `None` when `row` is out of range.
    ///
    /// An out-of-range row is a normal race between UI access and a
    /// refresh, so it degrades to `None` with a diagnostic rather than
    /// panicking.
    pub fn entry(&self, row: usize) -> Option<&Entry> {
        let entry = self.entries.get(row);
        if entry.is_none() {
            tracing::warn!(row, rows = self.entries.len(), "row out of range");
        }
        entry
    }

    /// Projects one named field from the entry at `row`.
    ///
    /// Unknown field names and out-of-range rows yield `None`, never an
    /// error. Timestamps the filesystem did not report also yield `None`.
    pub fn field_value(&self, row: usize, field_name: &str) -> Option<FieldValue> {
        let Some(field) = Field::from_name(field_name) else {
            tracing::warn!(field = field_name, "unknown field name");
            return None;
        };

        let entry = self.entry(row)?;

        match field {
            Field::FileName => Some(FieldValue::Text(entry.name().to_string())),
            Field::CreationDate => entry.created().map(FieldValue::Timestamp),
            Field::ModifiedDate => entry.modified().map(FieldValue::Timestamp),
            Field::FileSize => Some(FieldValue::Text(fields::format_file_size(entry.size()))),
            Field::IconSource => Some(FieldValue::Text(entry.icon_source())),
            Field::FilePath => Some(FieldValue::Text(entry.path().display().to_string())),
            Field::IsDir => Some(FieldValue::Bool(entry.is_dir())),
            Field::IsFile => Some(FieldValue::Bool(entry.is_file())),
        }
    }

    /// Deletes the given files, then refreshes the snapshot.
    ///
    /// Every path is attempted exactly once; a failure is logged and the
    /// batch continues. Directory paths are not handled by this operation
    /// and simply fail per item. The refresh runs regardless of outcomes —
    /// the filesystem is re-read as the authoritative state rather than
    /// editing the snapshot incrementally.
    pub fn remove(&mut self, paths: &[PathBuf]) {
        for path in paths {
            if let Err(err) = ops::remove_file(path) {
                tracing::warn!(path = %path.display(), error = %err, "failed to remove");
            }
        }

        self.refresh();
    }

    /// Renames the entry at `row` to `new_name` within its directory.
    ///
    /// `new_name` is a bare name, joined with the entry's parent. For a
    /// file, a refresh happens only on success and the snapshot is left
    /// untouched on failure. For a directory the refresh runs even on
    /// failure, so the listing re-syncs whenever the rename outcome is
    /// uncertain; the boolean return is the sole success indicator, with
    /// the underlying error confined to the log.
    pub fn rename(&mut self, row: usize, new_name: &str) -> bool {
        let (path, is_dir) = match self.entry(row) {
            Some(entry) => (entry.path().to_path_buf(), entry.is_dir()),
            None => return false,
        };

        tracing::debug!(row, new_name, "renaming {}", path.display());

        if is_dir {
            let renamed = match ops::rename_entry(&path, new_name) {
                Ok(_) => true,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "directory rename failed");
                    false
                }
            };
            self.refresh();
            renamed
        } else {
            match ops::rename_entry(&path, new_name) {
                Ok(_) => {
                    self.refresh();
                    true
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "file rename failed");
                    false
                }
            }
        }
    }

    /// Subscribes to model notifications.
    ///
    /// Returns a receiver that gets one [`Event::PathChanged`] per
    /// completed `set_path`/`refresh`, delivered after the snapshot swap.
    pub fn subscribe(&mut self) -> mpsc::Receiver<Event> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Sends `event` to all subscribers, pruning disconnected ones.
    fn emit(&mut self, event: Event) {
        self.subscribers
            .retain(|tx| tx.send(event.clone()).is_ok());
    }
}
