//! Error types and handling for post-migrator
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Sub-modules hold convenience constructors by error domain:
//! - [`fs`]: File system errors
//! - [`cli`]: Invocation errors

pub mod cli;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for post-migrator operations
#[derive(Error, Diagnostic, Debug)]
pub enum MigrateError {
    // Directory errors
    #[error("Posts directory not found: {path}")]
    #[diagnostic(
        code(post_migrator::dir::not_found),
        help("Pass an existing directory as POSTS_DIR or set POST_MIGRATOR_DIR")
    )]
    DirectoryNotFound { path: String },

    #[error("Failed to list directory: {path}: {reason}")]
    #[diagnostic(code(post_migrator::dir::read_failed))]
    DirectoryReadFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(
        code(post_migrator::fs::read_failed),
        help("Posts must be UTF-8 encoded text")
    )]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(
        code(post_migrator::fs::write_failed),
        help("The original post is left untouched; a leftover .tmp file is removed on the next run")
    )]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to remove file: {path}: {reason}")]
    #[diagnostic(code(post_migrator::fs::remove_failed))]
    FileRemoveFailed { path: String, reason: String },

    // Invocation errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(post_migrator::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, MigrateError>;
