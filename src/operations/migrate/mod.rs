//! Migrate operation module
//!
//! Runs the cleanup pass, then moves the frontmatter title of every `.md`
//! post in the directory into a `# title` heading. Files are handled one at
//! a time; a missing title skips the file, any I/O failure ends the run.

pub mod cleanup;
pub mod discovery;
pub mod writer;

use std::fs;
use std::path::PathBuf;

use crate::cli::MigrateArgs;
use crate::error::{Result, fs as fs_error};
use crate::frontmatter;
use crate::ui::Reporter;

use discovery::PostEntry;

/// Suffix of the posts being migrated
pub const POST_SUFFIX: &str = ".md";

/// Configuration options for a migration run
#[derive(Debug, Clone)]
pub struct MigrateOptions {
    pub posts_dir: PathBuf,
    pub dry_run: bool,
    pub verbose: bool,
}

impl MigrateOptions {
    pub fn new(posts_dir: impl Into<PathBuf>) -> Self {
        Self {
            posts_dir: posts_dir.into(),
            dry_run: false,
            verbose: false,
        }
    }
}

impl From<&MigrateArgs> for MigrateOptions {
    fn from(args: &MigrateArgs) -> Self {
        Self {
            dry_run: args.dry_run,
            ..Self::new(args.posts_dir.clone())
        }
    }
}

/// What happened to a single post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Title moved into a heading
    Migrated,
    /// Title removed, but fewer than two `---` left no place for the heading
    Degraded,
    /// No title line; file untouched
    Skipped,
}

/// Counts for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub removed: usize,
    pub migrated: usize,
    pub degraded: usize,
    pub skipped: usize,
}

impl MigrationReport {
    fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Migrated => self.migrated += 1,
            FileOutcome::Degraded => self.degraded += 1,
            FileOutcome::Skipped => self.skipped += 1,
        }
    }
}

/// High-level migrate operation
pub struct MigrateOperation {
    options: MigrateOptions,
    reporter: Reporter,
}

impl MigrateOperation {
    pub fn new(options: MigrateOptions) -> Self {
        let reporter = Reporter::new(options.dry_run, options.verbose);
        Self { options, reporter }
    }

    pub fn execute(&self) -> Result<MigrationReport> {
        let dir = &self.options.posts_dir;
        discovery::ensure_dir(dir)?;

        let mut report = MigrationReport {
            removed: cleanup::remove_temp_files(dir, self.options.dry_run, self.reporter)?,
            ..MigrationReport::default()
        };

        for entry in discovery::list_entries(dir)? {
            if !entry.has_suffix(POST_SUFFIX) {
                continue;
            }
            let outcome = self.migrate_file(&entry)?;
            report.record(outcome);
        }

        self.reporter.complete(&report);
        Ok(report)
    }

    fn migrate_file(&self, entry: &PostEntry) -> Result<FileOutcome> {
        let content =
            fs::read_to_string(&entry.path).map_err(|e| fs_error::read_failed(&entry.path, &e))?;

        let Some(rewrite) = frontmatter::rewrite(&content) else {
            self.reporter.skipped(&entry.name);
            return Ok(FileOutcome::Skipped);
        };

        if rewrite.preamble_discarded {
            self.reporter.warn(&format!(
                "{}: text before the opening '---' was dropped",
                entry.name
            ));
        }
        if !rewrite.heading_inserted {
            self.reporter.warn(&format!(
                "{}: fewer than two '---' delimiters, title removed without a heading",
                entry.name
            ));
        }

        if !self.options.dry_run {
            writer::write_atomic(&entry.path, &rewrite.content)?;
        }

        self.reporter.migrated(&entry.name);
        self.reporter.title(&rewrite.title);

        Ok(if rewrite.heading_inserted {
            FileOutcome::Migrated
        } else {
            FileOutcome::Degraded
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(dir: &std::path::Path) -> Result<MigrationReport> {
        MigrateOperation::new(MigrateOptions::new(dir)).execute()
    }

    #[test]
    fn test_migrates_post() {
        let temp = TempDir::new().unwrap();
        let post = temp.path().join("hello.md");
        fs::write(
            &post,
            "---\ntitle: 'Hello World'\ndate: 2024-01-01\n---\nBody text.\n",
        )
        .unwrap();

        let report = run(temp.path()).unwrap();

        assert_eq!(report.migrated, 1);
        assert_eq!(
            fs::read_to_string(&post).unwrap(),
            "---\ndate: 2024-01-01\n---\n# Hello World\nBody text.\n"
        );
    }

    #[test]
    fn test_skipped_post_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        let post = temp.path().join("notitle.md");
        let original = "---\ndate: 2024-01-01\n---\nBody\n";
        fs::write(&post, original).unwrap();

        let report = run(temp.path()).unwrap();

        assert_eq!(report.skipped, 1);
        assert_eq!(fs::read_to_string(&post).unwrap(), original);
    }

    #[test]
    fn test_degraded_post_loses_title_without_heading() {
        let temp = TempDir::new().unwrap();
        let post = temp.path().join("broken.md");
        fs::write(&post, "title: 'Broken'\n---\nBody\n").unwrap();

        let report = run(temp.path()).unwrap();

        assert_eq!(report.degraded, 1);
        let content = fs::read_to_string(&post).unwrap();
        assert_eq!(content, "---\nBody\n");
        assert!(!content.contains("# "));
    }

    #[test]
    fn test_second_run_skips_everything() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.md"), "---\ntitle: \"A\"\n---\nA\n").unwrap();
        fs::write(temp.path().join("b.md"), "---\ntitle: 'B'\n---\nB\n").unwrap();

        let first = run(temp.path()).unwrap();
        let after_first = fs::read_to_string(temp.path().join("a.md")).unwrap();
        let second = run(temp.path()).unwrap();

        assert_eq!(first.migrated, 2);
        assert_eq!(second.migrated, 0);
        assert_eq!(second.skipped, 2);
        assert_eq!(
            fs::read_to_string(temp.path().join("a.md")).unwrap(),
            after_first
        );
    }

    #[test]
    fn test_non_markdown_files_untouched() {
        let temp = TempDir::new().unwrap();
        let other = temp.path().join("notes.txt");
        fs::write(&other, "title: 'Not a post'\n---\n---\n").unwrap();

        let report = run(temp.path()).unwrap();

        assert_eq!(report, MigrationReport::default());
        assert_eq!(
            fs::read_to_string(&other).unwrap(),
            "title: 'Not a post'\n---\n---\n"
        );
    }

    #[test]
    fn test_cleanup_runs_before_migration() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("hello.md.tmp"), "partial").unwrap();
        fs::write(temp.path().join("hello.md"), "---\ntitle: 'Hi'\n---\n").unwrap();

        let report = run(temp.path()).unwrap();

        assert_eq!(report.removed, 1);
        assert_eq!(report.migrated, 1);
        assert!(!temp.path().join("hello.md.tmp").exists());
        assert_eq!(
            fs::read_to_string(temp.path().join("hello.md")).unwrap(),
            "---\n---\n# Hi\n"
        );
    }

    #[test]
    fn test_dry_run_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let post = temp.path().join("hello.md");
        let original = "---\ntitle: 'Hi'\n---\nBody\n";
        fs::write(&post, original).unwrap();
        fs::write(temp.path().join("old.tmp"), "x").unwrap();

        let options = MigrateOptions {
            dry_run: true,
            ..MigrateOptions::new(temp.path())
        };
        let report = MigrateOperation::new(options).execute().unwrap();

        assert_eq!(report.migrated, 1);
        assert_eq!(report.removed, 1);
        assert_eq!(fs::read_to_string(&post).unwrap(), original);
        assert!(temp.path().join("old.tmp").exists());
    }

    #[test]
    fn test_invalid_utf8_is_fatal() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("binary.md"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let result = run(temp.path());

        assert!(matches!(
            result,
            Err(crate::error::MigrateError::FileReadFailed { .. })
        ));
    }

    #[test]
    fn test_missing_directory() {
        let temp = TempDir::new().unwrap();
        let result = run(&temp.path().join("missing"));
        assert!(matches!(
            result,
            Err(crate::error::MigrateError::DirectoryNotFound { .. })
        ));
    }
}
