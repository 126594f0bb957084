//! Migrate command CLI wrapper
//!
//! Thin wrapper that turns arguments into options and delegates to
//! operations/migrate.

use crate::cli::MigrateArgs;
use crate::error::Result;
use crate::operations::{MigrateOperation, MigrateOptions};

/// Run migrate command
pub fn run(args: &MigrateArgs, verbose: bool) -> Result<()> {
    let options = MigrateOptions {
        verbose,
        ..MigrateOptions::from(args)
    };

    MigrateOperation::new(options).execute()?;

    Ok(())
}
