//! Folder repository implementation.

use sqlx::PgPool;

use lectern_core::error::{AppError, ErrorKind};
use lectern_core::result::AppResult;
use lectern_core::types::path;
use lectern_entity::folder::Folder;

use super::escape_like;

/// Repository for folder rows and subtree operations.
///
/// The hierarchy lives entirely in the `path`/`parent_path` string columns;
/// there are no foreign keys between folders.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the root folder row if it is missing. Idempotent.
    pub async fn ensure_root(&self) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO folders (path, name, parent_path) VALUES ($1, $2, NULL) \
             ON CONFLICT (path) DO NOTHING",
        )
        .bind(path::ROOT)
        .bind(path::ROOT_NAME)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to ensure root folder", e))?;
        Ok(())
    }

    /// Names of the direct children of a folder, ascending.
    pub async fn child_names(&self, parent_path: &str) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT name FROM folders WHERE parent_path = $1 ORDER BY name ASC",
        )
        .bind(parent_path)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list child folders", e))
    }

    /// Insert a single folder row under `parent_path`.
    ///
    /// Missing ancestors are not created. A duplicate path maps to a
    /// `Conflict` error.
    pub async fn create(&self, parent_path: &str, name: &str) -> AppResult<()> {
        let folder_path = path::child_path(parent_path, name);
        sqlx::query("INSERT INTO folders (path, name, parent_path) VALUES ($1, $2, $3)")
            .bind(&folder_path)
            .bind(name)
            .bind(parent_path)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("folders_path_key") =>
                {
                    AppError::conflict(format!("Folder path '{folder_path}' already exists"))
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", e),
            })?;
        Ok(())
    }

    /// Delete a folder together with every descendant folder and file.
    ///
    /// Both deletes run in one transaction, so the catalog can never be left
    /// with files whose folders were removed but not vice versa. Matching is
    /// on the exact path or a `path + '/'` prefix; a sibling such as `/AB`
    /// does not match when `/A` is deleted. Deleting a non-existent folder
    /// affects zero rows and succeeds.
    pub async fn delete_subtree(&self, folder_path: &str) -> AppResult<u64> {
        let prefix = format!("{}/%", escape_like(folder_path));

        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let files = sqlx::query(
            "DELETE FROM files WHERE folder_path = $1 OR folder_path LIKE $2 ESCAPE '\\'",
        )
        .bind(folder_path)
        .bind(&prefix)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete subtree files", e)
        })?;

        let folders =
            sqlx::query("DELETE FROM folders WHERE path = $1 OR path LIKE $2 ESCAPE '\\'")
                .bind(folder_path)
                .bind(&prefix)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete subtree folders", e)
                })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit subtree delete", e)
        })?;

        Ok(files.rows_affected() + folders.rows_affected())
    }

    /// Count folders, excluding the root row.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM folders WHERE path != $1")
            .bind(path::ROOT)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count folders", e))
    }

    /// All folder rows ordered by path, for export.
    pub async fn find_all(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders ORDER BY path ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }
}
