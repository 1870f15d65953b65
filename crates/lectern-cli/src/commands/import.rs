//! Bulk import CLI command.

use std::path::PathBuf;

use clap::Args;

use crate::output;
use lectern_core::config::AppConfig;
use lectern_core::error::AppError;
use lectern_service::import_tree;

/// Arguments for the import command
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Local directory to import
    pub source: PathBuf,

    /// Canonical catalog path to import into
    #[arg(short, long, default_value = "/")]
    pub dest: String,
}

/// Execute the import command
pub async fn execute(args: &ImportArgs, config: &AppConfig) -> Result<(), AppError> {
    let (catalog, _) = super::open_catalog(config).await?;

    let summary = import_tree(catalog.as_ref(), &args.source, &args.dest).await?;

    output::print_success(&format!(
        "Imported {} folder(s) and {} file(s); {} already present",
        summary.folders_created, summary.files_added, summary.files_skipped
    ));
    Ok(())
}
