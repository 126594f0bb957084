//! Directory listing for the cleanup and migration passes

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, cli, fs as fs_error};

/// A non-directory entry of the posts directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEntry {
    /// File name as printed in log lines
    pub name: String,
    pub path: PathBuf,
}

impl PostEntry {
    pub fn has_suffix(&self, suffix: &str) -> bool {
        self.name.ends_with(suffix)
    }
}

/// Fail early when `dir` is missing or not a directory.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        Err(cli::directory_not_found(dir))
    }
}

/// Snapshot the entries of `dir` in enumeration order, skipping directories.
///
/// The listing is collected up front so that files written or renamed while
/// processing cannot show up in, or vanish from, the same pass.
pub fn list_entries(dir: &Path) -> Result<Vec<PostEntry>> {
    let read_dir = fs::read_dir(dir).map_err(|e| fs_error::dir_read_failed(dir, &e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| fs_error::dir_read_failed(dir, &e))?;
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        entries.push(PostEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
        });
    }

    Ok(entries)
}
