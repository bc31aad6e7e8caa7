//! Navigation helpers for FBrowse.
//!
//! Currently only the stateless [`home::paths_to_home`] utility the
//! frontend uses to build its initial breadcrumb chain.

pub mod home;
