//! Catalog export CLI command.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;

use crate::output;
use lectern_core::config::AppConfig;
use lectern_core::error::AppError;
use lectern_entity::{Folder, StoredFile, User};

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Write the JSON dump to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Full catalog dump
#[derive(Debug, Serialize)]
struct CatalogDump {
    exported_at: DateTime<Utc>,
    folders: Vec<Folder>,
    files: Vec<StoredFile>,
    users: Vec<User>,
}

/// Execute the export command
pub async fn execute(args: &ExportArgs, config: &AppConfig) -> Result<(), AppError> {
    let (catalog, _) = super::open_catalog(config).await?;

    let dump = CatalogDump {
        exported_at: Utc::now(),
        folders: catalog.folders().find_all().await?,
        files: catalog.files().find_all().await?,
        users: catalog.users().find_all().await?,
    };
    let json = serde_json::to_string_pretty(&dump)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &json)?;
            output::print_success(&format!(
                "Exported {} folder(s), {} file(s), {} user(s) to {}",
                dump.folders.len(),
                dump.files.len(),
                dump.users.len(),
                path.display()
            ));
        }
        None => println!("{}", json),
    }

    Ok(())
}
