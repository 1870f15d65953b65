//! File repository implementation.

use sqlx::PgPool;

use lectern_core::error::{AppError, ErrorKind};
use lectern_core::result::AppResult;
use lectern_core::types::kind::FileKind;
use lectern_core::types::listing::SearchHit;
use lectern_entity::file::StoredFile;

use super::escape_like;

/// Repository for file records.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Filenames and references in a folder, ascending by filename.
    pub async fn files_in(&self, folder_path: &str) -> AppResult<Vec<(String, String)>> {
        sqlx::query_as::<_, (String, String)>(
            "SELECT filename, file_reference FROM files WHERE folder_path = $1 \
             ORDER BY filename ASC",
        )
        .bind(folder_path)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    /// Resolve the opaque reference for a file, if present.
    pub async fn find_reference(
        &self,
        folder_path: &str,
        filename: &str,
    ) -> AppResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT file_reference FROM files WHERE filename = $1 AND folder_path = $2",
        )
        .bind(filename)
        .bind(folder_path)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file reference", e))
    }

    /// Insert or replace a file record keyed on (`filename`, `folder_path`).
    ///
    /// On overwrite, the reference, kind, and size are replaced and the
    /// timestamp is refreshed.
    pub async fn upsert(
        &self,
        folder_path: &str,
        filename: &str,
        file_reference: &str,
        kind: FileKind,
        size: i64,
    ) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO files (filename, folder_path, file_reference, file_kind, file_size) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (filename, folder_path) DO UPDATE SET \
                 file_reference = EXCLUDED.file_reference, \
                 file_kind = EXCLUDED.file_kind, \
                 file_size = EXCLUDED.file_size, \
                 created_at = NOW()",
        )
        .bind(filename)
        .bind(folder_path)
        .bind(file_reference)
        .bind(kind.as_str())
        .bind(size)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert file", e))?;
        Ok(())
    }

    /// Delete a single file record. Returns `true` if a row was removed.
    pub async fn delete(&self, folder_path: &str, filename: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM files WHERE filename = $1 AND folder_path = $2")
            .bind(filename)
            .bind(folder_path)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete file", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search on filenames.
    ///
    /// LIKE wildcards in the query are escaped so the match is a literal
    /// substring match.
    pub async fn search(&self, query: &str, limit: i64) -> AppResult<Vec<SearchHit>> {
        let pattern = format!("%{}%", escape_like(query));

        let rows = sqlx::query_as::<_, (String, String, String)>(
            "SELECT filename, folder_path, file_reference FROM files \
             WHERE filename ILIKE $1 ESCAPE '\\' LIMIT $2",
        )
        .bind(&pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search files", e))?;

        Ok(rows
            .into_iter()
            .map(|(filename, folder_path, file_reference)| SearchHit {
                filename,
                folder_path,
                file_reference,
            })
            .collect())
    }

    /// Count total file records.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM files")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count files", e))
    }

    /// Total size of all files in bytes.
    pub async fn total_size_bytes(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(file_size), 0)::BIGINT FROM files")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to calculate total size", e)
            })
    }

    /// All file rows ordered by folder and filename, for export.
    pub async fn find_all(&self) -> AppResult<Vec<StoredFile>> {
        sqlx::query_as::<_, StoredFile>(
            "SELECT * FROM files ORDER BY folder_path ASC, filename ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }
}
