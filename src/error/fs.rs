//! File system errors

use std::path::Path;

use super::MigrateError;

/// Creates a read error for `path`
pub fn read_failed(path: &Path, e: &std::io::Error) -> MigrateError {
    MigrateError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Creates a write error for `path`
pub fn write_failed(path: &Path, e: &std::io::Error) -> MigrateError {
    MigrateError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Creates a removal error for `path`
pub fn remove_failed(path: &Path, e: &std::io::Error) -> MigrateError {
    MigrateError::FileRemoveFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Creates a directory listing error for `path`
pub fn dir_read_failed(path: &Path, e: &std::io::Error) -> MigrateError {
    MigrateError::DirectoryReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}
