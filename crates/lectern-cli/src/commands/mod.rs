//! CLI command definitions and dispatch.

pub mod export;
pub mod folder;
pub mod import;
pub mod migrate;
pub mod search;
pub mod stats;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;
use lectern_core::config::{AppConfig, LoggingConfig};
use lectern_core::error::AppError;
use lectern_database::PgCatalog;
use lectern_service::CatalogService;

/// Lectern — hierarchical file catalog
#[derive(Debug, Parser)]
#[command(name = "lectern", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (reads config/default.toml plus config/<ENV>.toml)
    #[arg(short, long, default_value = "default")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Folder management
    Folder(folder::FolderArgs),
    /// Search the catalog by filename
    Search(search::SearchArgs),
    /// Catalog statistics
    Stats,
    /// Import a local directory tree into the catalog
    Import(import::ImportArgs),
    /// Export the full catalog as JSON
    Export(export::ExportArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.env)?;
        init_tracing(&config.logging);

        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Folder(args) => folder::execute(args, &config, self.format).await,
            Commands::Search(args) => search::execute(args, &config, self.format).await,
            Commands::Stats => stats::execute(&config, self.format).await,
            Commands::Import(args) => import::execute(args, &config).await,
            Commands::Export(args) => export::execute(args, &config).await,
        }
    }
}

/// Initialize tracing from the logging section, with `RUST_LOG` taking
/// precedence over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<sqlx::PgPool, AppError> {
    let pool = lectern_database::connection::DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}

/// Helper: open the Postgres catalog and the service facade over it
pub async fn open_catalog(config: &AppConfig) -> Result<(Arc<PgCatalog>, CatalogService), AppError> {
    let db = lectern_database::connection::DatabasePool::connect(&config.database).await?;
    db.ping().await?;
    let catalog = Arc::new(PgCatalog::new(db.into_pool()));
    let service = CatalogService::new(catalog.clone(), config.catalog.clone());
    service.init().await?;
    Ok((catalog, service))
}
