//! Command implementations.

pub mod completions;
pub mod format;
pub mod sync;
pub mod version;
