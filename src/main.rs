//! post-migrator - move frontmatter titles of Markdown posts into headings
//!
//! One-shot batch tool: removes leftover `.tmp` files from a posts directory,
//! then rewrites every `.md` post so its quoted `title:` frontmatter field
//! becomes a `# title` heading right after the closing `---`.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod error;
mod frontmatter;
mod operations;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Migrate(args) => commands::migrate::run(args, cli.verbose),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
