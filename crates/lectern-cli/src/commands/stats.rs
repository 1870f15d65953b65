//! Catalog statistics CLI command.

use crate::output::{self, OutputFormat};
use lectern_core::config::AppConfig;
use lectern_core::error::AppError;
use lectern_core::types::stats::format_size;

/// Execute the stats command
pub async fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let (_, service) = super::open_catalog(config).await?;
    let stats = service.stats().await;

    match format {
        OutputFormat::Table => {
            println!("Catalog statistics");
            output::print_kv("Folders", &stats.folders.to_string());
            output::print_kv("Files", &stats.files.to_string());
            output::print_kv("Total size", &format_size(stats.total_size_bytes));
            output::print_kv("Users", &stats.users.to_string());
        }
        OutputFormat::Json => output::print_json(&stats),
    }

    Ok(())
}
