//! Filename search CLI command.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use lectern_core::config::AppConfig;
use lectern_core::error::AppError;

/// Arguments for the search command
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Case-insensitive substring to look for in filenames
    pub query: String,
}

/// Search result display row
#[derive(Debug, Serialize, Tabled)]
struct SearchRow {
    /// Filename
    filename: String,
    /// Containing folder
    folder: String,
    /// Stored reference
    reference: String,
}

/// Execute the search command
pub async fn execute(
    args: &SearchArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let (_, service) = super::open_catalog(config).await?;

    let hits = service.search_files(&args.query).await;
    let rows: Vec<SearchRow> = hits
        .into_iter()
        .map(|hit| SearchRow {
            filename: hit.filename,
            folder: hit.folder_path,
            reference: hit.file_reference,
        })
        .collect();
    output::print_rows(&rows, format);

    Ok(())
}
