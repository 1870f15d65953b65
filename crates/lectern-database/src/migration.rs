//! Database migration runner.

use sqlx::PgPool;
use tracing::info;

use lectern_core::error::{AppError, ErrorKind};

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Drop all catalog tables and re-run migrations from scratch.
pub async fn reset_database(pool: &PgPool) -> Result<(), AppError> {
    info!("Dropping catalog tables...");

    sqlx::query("DROP TABLE IF EXISTS files, folders, users, _sqlx_migrations CASCADE")
        .execute(pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to drop catalog tables", e)
        })?;

    run_migrations(pool).await
}
