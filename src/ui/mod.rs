//! Console output for migration runs
//!
//! Progress lines go to stdout, warnings to stderr. `console` drops the
//! styling when the stream is not a terminal, so piped output is plain text.

use console::Style;

use crate::operations::migrate::MigrationReport;

const DRY_RUN_PREFIX: &str = "[DRY RUN] ";

/// Prints one line per action taken during a run
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    dry_run: bool,
    verbose: bool,
}

impl Reporter {
    pub fn new(dry_run: bool, verbose: bool) -> Self {
        Self { dry_run, verbose }
    }

    fn prefix(self) -> &'static str {
        if self.dry_run { DRY_RUN_PREFIX } else { "" }
    }

    pub fn removed(self, filename: &str) {
        let verb = if self.dry_run { "Would remove" } else { "Removed" };
        println!(
            "{}{} {}",
            self.prefix(),
            Style::new().red().apply_to(verb),
            filename
        );
    }

    pub fn skipped(self, filename: &str) {
        println!(
            "{}{} {}: no title found",
            self.prefix(),
            Style::new().dim().apply_to("Skipping"),
            filename
        );
    }

    pub fn migrated(self, filename: &str) {
        let verb = if self.dry_run {
            "Would migrate"
        } else {
            "Migrated"
        };
        println!(
            "{}{} {}",
            self.prefix(),
            Style::new().green().apply_to(verb),
            filename
        );
    }

    /// Verbose only
    pub fn title(self, title: &str) {
        if self.verbose {
            println!("  {} {}", Style::new().bold().apply_to("title:"), title);
        }
    }

    pub fn warn(self, message: &str) {
        eprintln!(
            "{} {}",
            Style::new().yellow().bold().for_stderr().apply_to("Warning:"),
            message
        );
    }

    pub fn complete(self, report: &MigrationReport) {
        if self.verbose {
            println!(
                "{} {} migrated, {} without heading, {} skipped, {} temporary removed",
                Style::new().bold().apply_to("Summary:"),
                report.migrated,
                report.degraded,
                report.skipped,
                report.removed
            );
        }
        println!("{}Migration complete!", self.prefix());
    }
}
