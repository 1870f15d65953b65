//! Folder management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use lectern_core::config::AppConfig;
use lectern_core::error::AppError;

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// List the contents of a folder
    List {
        /// Canonical folder path
        #[arg(short, long, default_value = "/")]
        path: String,
    },
    /// Create a new folder
    Create {
        /// Canonical parent folder path
        #[arg(short, long, default_value = "/")]
        parent: String,
        /// Folder name
        #[arg(short, long)]
        name: String,
    },
    /// Delete a folder and everything underneath it
    Delete {
        /// Canonical parent folder path
        #[arg(short, long, default_value = "/")]
        parent: String,
        /// Folder name
        #[arg(short, long)]
        name: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// One row of a folder listing
#[derive(Debug, Serialize, Tabled)]
struct EntryRow {
    /// Entry kind
    kind: &'static str,
    /// Name
    name: String,
    /// Stored reference (empty for folders)
    reference: String,
}

/// Execute folder commands
pub async fn execute(
    args: &FolderArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let (_, service) = super::open_catalog(config).await?;

    match &args.command {
        FolderCommand::List { path } => {
            let listing = service.list_children(path).await;
            let mut rows: Vec<EntryRow> = listing
                .subfolders
                .iter()
                .map(|name| EntryRow {
                    kind: "folder",
                    name: name.clone(),
                    reference: String::new(),
                })
                .collect();
            rows.extend(listing.files.iter().map(|(name, reference)| EntryRow {
                kind: "file",
                name: name.clone(),
                reference: reference.clone(),
            }));
            output::print_rows(&rows, format);
        }
        FolderCommand::Create { parent, name } => {
            if service.create_folder(parent, name).await {
                output::print_success(&format!("Folder '{}' created under {}", name, parent));
            } else {
                output::print_error(&format!(
                    "Could not create folder '{}' under {}",
                    name, parent
                ));
            }
        }
        FolderCommand::Delete {
            parent,
            name,
            force,
        } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!(
                        "Delete '{}' under {} and everything inside it?",
                        name, parent
                    ))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            if service.delete_folder(parent, name).await {
                output::print_success(&format!("Folder '{}' deleted", name));
            } else {
                output::print_error(&format!("Could not delete folder '{}'", name));
            }
        }
    }

    Ok(())
}
