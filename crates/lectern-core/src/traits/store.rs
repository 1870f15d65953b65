//! Catalog store trait for pluggable persistence backends.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::kind::FileKind;
use crate::types::listing::{FolderListing, SearchHit};
use crate::types::stats::CatalogStats;

/// Trait for catalog persistence backends (PostgreSQL or in-memory).
///
/// The hierarchy is a flat key space of canonical absolute paths; parent and
/// child are related only through `parent_path` equality and path prefixes,
/// never through in-memory links. Every method is a single bounded
/// operation; errors propagate to the caller, and the service facade is
/// responsible for degrading them into empty results and `false` booleans.
///
/// Mutations assume single-writer administrative semantics: the backend
/// provides no mutual exclusion between overlapping structural changes.
/// Concurrent reads are always safe.
#[async_trait]
pub trait CatalogStore: Send + Sync + std::fmt::Debug + 'static {
    /// Ensure the root folder row (`/`) exists. Idempotent.
    async fn ensure_root(&self) -> AppResult<()>;

    /// List the immediate children of a folder, ordered ascending by name.
    async fn list_children(&self, path: &str) -> AppResult<FolderListing>;

    /// Resolve a (folder path, filename) pair to its opaque file reference.
    async fn file_reference(&self, path: &str, filename: &str) -> AppResult<Option<String>>;

    /// Case-insensitive substring search on filenames, truncated to `limit`.
    /// Result order carries no guarantee beyond storage default.
    async fn search_files(&self, query: &str, limit: i64) -> AppResult<Vec<SearchHit>>;

    /// Insert a single folder row under `parent_path`. Does not create
    /// missing ancestors. A duplicate path yields a `Conflict` error.
    async fn create_folder(&self, parent_path: &str, name: &str) -> AppResult<()>;

    /// Delete the folder at `parent_path`/`name` together with every
    /// descendant folder and file, as one atomic action. Deleting a
    /// non-existent folder is a no-op.
    async fn delete_folder(&self, parent_path: &str, name: &str) -> AppResult<()>;

    /// Insert or replace a file record keyed on (`filename`, `folder_path`),
    /// refreshing reference, kind, size, and timestamp on overwrite. The
    /// folder path is not required to match an existing folder row.
    async fn add_file(
        &self,
        folder_path: &str,
        filename: &str,
        file_reference: &str,
        kind: FileKind,
        size: i64,
    ) -> AppResult<()>;

    /// Delete a single file record. No-op if absent.
    async fn delete_file(&self, folder_path: &str, filename: &str) -> AppResult<()>;

    /// Insert a user or refresh their username and last-seen timestamp.
    async fn upsert_user(&self, user_id: i64, username: Option<&str>) -> AppResult<()>;

    /// All known user IDs (the broadcast audience).
    async fn user_ids(&self) -> AppResult<Vec<i64>>;

    /// Aggregate catalog statistics. The root folder is not counted.
    async fn stats(&self) -> AppResult<CatalogStats>;
}
