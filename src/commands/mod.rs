//! Command implementations for the post-migrator CLI

pub mod completions;
pub mod migrate;
