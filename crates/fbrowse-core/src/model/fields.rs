//! Field-name registry and value projection for the UI wire contract.
//!
//! The eight field names below are the entire data contract exposed to the
//! presentation layer. They must not be renamed without versioning the
//! consumer.

use std::time::SystemTime;

use serde::Serialize;

/// A projectable per-entry field, addressed by its wire name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FileName,
    CreationDate,
    ModifiedDate,
    FileSize,
    IconSource,
    FilePath,
    IsDir,
    IsFile,
}

impl Field {
    /// Every field, in wire-contract order.
    pub const ALL: [Field; 8] = [
        Field::FileName,
        Field::CreationDate,
        Field::ModifiedDate,
        Field::FileSize,
        Field::IconSource,
        Field::FilePath,
        Field::IsDir,
        Field::IsFile,
    ];

    /// Number of fields in the registry.
    pub const COUNT: usize = Field::ALL.len();

    /// The wire name of this field. The match is exhaustive, so adding a
    /// variant without a name fails to compile.
    pub fn name(self) -> &'static str {
        match self {
            Field::FileName => "fileName",
            Field::CreationDate => "creationDate",
            Field::ModifiedDate => "modifiedDate",
            Field::FileSize => "fileSize",
            Field::IconSource => "iconSource",
            Field::FilePath => "filePath",
            Field::IsDir => "isDir",
            Field::IsFile => "isFile",
        }
    }

    /// Looks up a field by its wire name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.name() == name)
    }
}

/// A single projected field value.
///
/// Serializes untagged so the wire sees plain strings, booleans, and
/// timestamps rather than enum wrappers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Timestamp(SystemTime),
}

/// Formats a byte count as the short human string shown in the file list.
///
/// Integer truncation at each unit boundary, no rounding, and the exact
/// suffix strings `" bytes"`, `" kb"`, and `"mb"` (no space before `mb`).
/// Lossy on purpose; consumers depend on these exact strings.
pub fn format_file_size(bytes: u64) -> String {
    let kb = bytes / 1024;
    if kb < 1 {
        return format!("{bytes} bytes");
    }
    if kb < 1024 {
        return format!("{kb} kb");
    }
    format!("{}mb", kb / 1024)
}
