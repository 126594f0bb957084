use clap::Parser;
use std::path::PathBuf;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Migrate all posts in a directory:\n    post-migrator migrate ./posts\n\n\
                  Preview changes without writing:\n    post-migrator migrate ./posts --dry-run\n\n\
                  Take the directory from the environment:\n    POST_MIGRATOR_DIR=./posts post-migrator migrate")]
pub struct MigrateArgs {
    /// Directory containing the Markdown posts
    #[arg(value_name = "POSTS_DIR", env = "POST_MIGRATOR_DIR")]
    pub posts_dir: PathBuf,

    /// Show what would change without deleting or writing any file
    #[arg(long)]
    pub dry_run: bool,
}
