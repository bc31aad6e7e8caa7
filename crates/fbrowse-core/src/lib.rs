//! FBrowse core library — UI-agnostic directory-listing model.
//!
//! `fbrowse-core` holds the data model behind the FBrowse file browser:
//! a sorted, queryable snapshot of one directory, a stable field-name
//! projection surface for the UI, and the mutating operations (rename,
//! delete) that keep the snapshot consistent with the filesystem. It is
//! deliberately decoupled from any UI framework.
//!
//! # Modules
//!
//! - [`model`] — [`DirModel`], the snapshot model, plus the field registry
//!   ([`model::fields`]) and sort policy ([`model::sort`]).
//! - [`fs`] — the [`Entry`] record type and filesystem primitives.
//! - [`nav`] — the stateless home-path-chain helper.
//! - [`config`] — startup configuration ([`Config`], TOML-based).
//! - [`event`] — Core → UI notification type ([`Event`]).
//! - [`error`] — unified error type ([`CoreError`]) and alias ([`CoreResult`]).

pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod model;
pub mod nav;

pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use event::Event;
pub use fs::entry::{Entry, DIRECTORY_ICON, DOCUMENT_ICON};
pub use fs::ops::{read_directory, remove_file, rename_entry};
pub use model::fields::{format_file_size, Field, FieldValue};
pub use model::DirModel;
pub use nav::home::paths_to_home;
