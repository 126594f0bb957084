//! CLI definitions using clap derive API
//!
//! Argument types for each command live in submodules:
//! - migrate: Migrate command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod migrate;

pub use completions::CompletionsArgs;
pub use migrate::MigrateArgs;

/// post-migrator - move frontmatter titles into headings
#[derive(Parser, Debug)]
#[command(
    name = "post-migrator",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Move frontmatter titles of Markdown posts into level-1 headings",
    long_about = "Rewrites every .md post in a directory: the quoted `title:` line is removed \
                  from the frontmatter and re-inserted as a `# title` heading right after the \
                  closing `---`. Leftover .tmp files from an interrupted run are removed first.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  post-migrator migrate ./posts            \x1b[90m# Migrate posts in place\x1b[0m\n   \
                  post-migrator migrate ./posts --dry-run  \x1b[90m# Preview without writing\x1b[0m\n"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Migrate the posts of a directory
    Migrate(MigrateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
