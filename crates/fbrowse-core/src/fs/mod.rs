//! File system layer for FBrowse.
//!
//! [`entry::Entry`] is the record type one snapshot row is made of;
//! [`ops`] holds the enumeration and mutation primitives the model builds
//! on ([`ops::read_directory`], [`ops::remove_file`], [`ops::rename_entry`]).

pub mod entry;
pub mod ops;
