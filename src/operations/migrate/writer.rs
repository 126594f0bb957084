//! In-place rewrite of a post
//!
//! Content goes to `<name>.tmp` next to the post and is renamed over it, so a
//! failed write never leaves a truncated document behind.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, fs as fs_error};

use super::cleanup::TEMP_SUFFIX;

/// Sibling path used while `path` is being rewritten
pub fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

/// Replace the contents of `path` with `content`.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let tmp_path = temp_path_for(path);

    if let Err(e) = write_synced(&tmp_path, content) {
        let _ = fs::remove_file(&tmp_path);
        return Err(fs_error::write_failed(&tmp_path, &e));
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        fs_error::write_failed(path, &e)
    })
}

fn write_synced(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}
