//! CLI command implementations.

pub mod append;
pub mod common;
pub mod concat;
pub mod gate;
pub mod herm;
pub mod show;
pub mod slice;
pub mod vars;
pub mod version;
