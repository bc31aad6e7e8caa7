//! Notifications from the model to the presentation layer.
//!
//! Events flow **Core → UI** only. The UI obtains a receiver through
//! [`crate::model::DirModel::subscribe`] and may re-query the model after
//! each [`Event::PathChanged`]; the model never delivers a notification
//! before the snapshot swap it describes has completed.

use std::path::PathBuf;

/// A notification the model sends after completing an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The snapshot has been replaced wholesale; `path` is the directory
    /// it now describes. Emitted once per completed `set_path`/`refresh`.
    PathChanged {
        /// The directory the model now holds.
        path: PathBuf,
    },
}
