//! Removal of temporary files left behind by an interrupted run

use std::fs;
use std::path::Path;

use crate::error::{Result, fs as fs_error};
use crate::ui::Reporter;

use super::discovery;

/// Suffix identifying a leftover temporary file
pub const TEMP_SUFFIX: &str = ".tmp";

/// Delete every `*.tmp` entry of `dir`, returning how many were (or would be) removed.
///
/// Any failed deletion aborts the run.
pub fn remove_temp_files(dir: &Path, dry_run: bool, reporter: Reporter) -> Result<usize> {
    let mut removed = 0;

    for entry in discovery::list_entries(dir)? {
        if !entry.has_suffix(TEMP_SUFFIX) {
            continue;
        }
        if !dry_run {
            fs::remove_file(&entry.path).map_err(|e| fs_error::remove_failed(&entry.path, &e))?;
        }
        reporter.removed(&entry.name);
        removed += 1;
    }

    Ok(removed)
}
