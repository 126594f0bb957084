//! Invocation errors

use std::path::Path;

use super::MigrateError;

/// Creates an error for a posts directory that does not exist or is not a directory
pub fn directory_not_found(path: &Path) -> MigrateError {
    MigrateError::DirectoryNotFound {
        path: path.display().to_string(),
    }
}

/// Creates an error for an unsupported completions shell
pub fn unknown_shell(shell: impl Into<String>) -> MigrateError {
    MigrateError::UnknownShell {
        shell: shell.into(),
    }
}
