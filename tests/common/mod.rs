//! Common test utilities for post-migrator integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A posts directory for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the posts directory
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new, empty posts directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the posts directory
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.path.join(name), content).expect("Failed to write file");
    }

    /// Write raw bytes in the posts directory
    #[allow(dead_code)]
    pub fn write_bytes(&self, name: &str, content: &[u8]) {
        std::fs::write(self.path.join(name), content).expect("Failed to write file");
    }

    /// Read a file from the posts directory
    #[allow(dead_code)]
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path.join(name)).expect("Failed to read file")
    }

    /// Check if a file exists in the posts directory
    #[allow(dead_code)]
    pub fn file_exists(&self, name: &str) -> bool {
        self.path.join(name).exists()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// A post with a quoted title and a two-delimiter frontmatter block
#[allow(dead_code)]
pub fn post(title: &str, body: &str) -> String {
    format!("---\ntitle: '{title}'\ndate: 2024-01-01\n---\n{body}")
}

/// The post-migrator binary, isolated from any developer POST_MIGRATOR_DIR
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn post_migrator_cmd() -> Command {
    let mut cmd = Command::cargo_bin("post-migrator").expect("Failed to find binary");
    cmd.env_remove("POST_MIGRATOR_DIR");
    cmd
}

/// `post-migrator migrate <dir>` plus extra args
#[allow(dead_code)]
pub fn migrate_cmd(dir: &Path, extra: &[&str]) -> Command {
    let mut cmd = post_migrator_cmd();
    cmd.arg("migrate").arg(dir).args(extra);
    cmd
}
