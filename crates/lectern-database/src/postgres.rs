//! PostgreSQL-backed catalog store.

use async_trait::async_trait;
use sqlx::PgPool;

use lectern_core::result::AppResult;
use lectern_core::traits::CatalogStore;
use lectern_core::types::kind::FileKind;
use lectern_core::types::listing::{FolderListing, SearchHit};
use lectern_core::types::path;
use lectern_core::types::stats::CatalogStats;

use crate::repositories::{FileRepository, FolderRepository, UserRepository};

/// The production catalog store, delegating to the entity repositories.
#[derive(Debug, Clone)]
pub struct PgCatalog {
    folders: FolderRepository,
    files: FileRepository,
    users: UserRepository,
}

impl PgCatalog {
    /// Create a catalog store over a connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            folders: FolderRepository::new(pool.clone()),
            files: FileRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    /// The folder repository, for callers needing full-row access (export).
    pub fn folders(&self) -> &FolderRepository {
        &self.folders
    }

    /// The file repository, for callers needing full-row access (export).
    pub fn files(&self) -> &FileRepository {
        &self.files
    }

    /// The user repository, for callers needing full-row access (export).
    pub fn users(&self) -> &UserRepository {
        &self.users
    }
}

#[async_trait]
impl CatalogStore for PgCatalog {
    async fn ensure_root(&self) -> AppResult<()> {
        self.folders.ensure_root().await
    }

    async fn list_children(&self, folder_path: &str) -> AppResult<FolderListing> {
        let subfolders = self.folders.child_names(folder_path).await?;
        let files = self.files.files_in(folder_path).await?;
        Ok(FolderListing {
            subfolders: subfolders.into_iter().collect(),
            files: files.into_iter().collect(),
        })
    }

    async fn file_reference(&self, folder_path: &str, filename: &str) -> AppResult<Option<String>> {
        self.files.find_reference(folder_path, filename).await
    }

    async fn search_files(&self, query: &str, limit: i64) -> AppResult<Vec<SearchHit>> {
        self.files.search(query, limit).await
    }

    async fn create_folder(&self, parent_path: &str, name: &str) -> AppResult<()> {
        self.folders.create(parent_path, name).await
    }

    async fn delete_folder(&self, parent_path: &str, name: &str) -> AppResult<()> {
        let folder_path = path::child_path(parent_path, name);
        self.folders.delete_subtree(&folder_path).await?;
        Ok(())
    }

    async fn add_file(
        &self,
        folder_path: &str,
        filename: &str,
        file_reference: &str,
        kind: FileKind,
        size: i64,
    ) -> AppResult<()> {
        self.files
            .upsert(folder_path, filename, file_reference, kind, size)
            .await
    }

    async fn delete_file(&self, folder_path: &str, filename: &str) -> AppResult<()> {
        self.files.delete(folder_path, filename).await?;
        Ok(())
    }

    async fn upsert_user(&self, user_id: i64, username: Option<&str>) -> AppResult<()> {
        self.users.upsert(user_id, username).await
    }

    async fn user_ids(&self) -> AppResult<Vec<i64>> {
        self.users.all_ids().await
    }

    async fn stats(&self) -> AppResult<CatalogStats> {
        Ok(CatalogStats {
            folders: self.folders.count().await?,
            files: self.files.count().await?,
            total_size_bytes: self.files.total_size_bytes().await?,
            users: self.users.count().await?,
        })
    }
}
