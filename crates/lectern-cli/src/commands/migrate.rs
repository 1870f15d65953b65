//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use lectern_core::config::AppConfig;
use lectern_core::error::AppError;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Reset database (drop catalog tables and re-run)
    Reset {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            lectern_database::migration::run_migrations(&pool).await?;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::Reset { force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt("This will DROP all catalog tables and re-run migrations. Continue?")
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            println!("Resetting database...");
            lectern_database::migration::reset_database(&pool).await?;
            output::print_success("Database reset complete.");
        }
    }

    Ok(())
}
