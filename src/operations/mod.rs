//! Operations module
//!
//! High-level operations behind the CLI commands:
//! - MigrateOperation: cleanup pass, then title-to-heading migration

pub mod migrate;

pub use migrate::{MigrateOperation, MigrateOptions};
