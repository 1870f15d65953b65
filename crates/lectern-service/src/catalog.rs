//! Catalog service facade.
//!
//! Wraps a [`CatalogStore`] and converts storage failures into benign
//! outcomes: reads come back empty, mutations report `false`. Every
//! swallowed error is logged. Only [`CatalogService::init`] is fatal.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use lectern_core::config::CatalogConfig;
use lectern_core::result::AppResult;
use lectern_core::traits::CatalogStore;
use lectern_core::types::kind::FileKind;
use lectern_core::types::listing::{FolderListing, SearchHit};
use lectern_core::types::stats::CatalogStats;

/// The outward-facing catalog API.
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
    config: CatalogConfig,
}

impl CatalogService {
    /// Create a service over any catalog store backend.
    pub fn new(store: Arc<dyn CatalogStore>, config: CatalogConfig) -> Self {
        Self { store, config }
    }

    /// Bootstrap the catalog: make sure the root folder row exists.
    ///
    /// Unlike the rest of the API this propagates errors, since a catalog
    /// without a root is unusable.
    pub async fn init(&self) -> AppResult<()> {
        self.store.ensure_root().await?;
        info!("Catalog root verified");
        Ok(())
    }

    /// Subfolder names and files directly under `folder_path`.
    ///
    /// Returns an empty listing when the folder does not exist or the
    /// store fails.
    pub async fn list_children(&self, folder_path: &str) -> FolderListing {
        match self.store.list_children(folder_path).await {
            Ok(listing) => listing,
            Err(e) => {
                error!(folder_path, error = %e, "Failed to list folder children");
                FolderListing::default()
            }
        }
    }

    /// The stored reference for a file, or `None` when absent or on failure.
    pub async fn file_reference(&self, folder_path: &str, filename: &str) -> Option<String> {
        match self.store.file_reference(folder_path, filename).await {
            Ok(reference) => reference,
            Err(e) => {
                warn!(folder_path, filename, error = %e, "Failed to look up file reference");
                None
            }
        }
    }

    /// Case-insensitive substring search over filenames, capped at the
    /// configured limit. Blank queries and store failures yield no hits.
    pub async fn search_files(&self, query: &str) -> Vec<SearchHit> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        match self.store.search_files(query, self.config.search_limit).await {
            Ok(hits) => hits,
            Err(e) => {
                error!(query, error = %e, "Search failed");
                Vec::new()
            }
        }
    }

    /// Create a folder under `parent_path`. Returns `false` when the name
    /// is invalid, the folder already exists, or the store fails.
    pub async fn create_folder(&self, parent_path: &str, name: &str) -> bool {
        let name = name.trim();
        if let Some(reason) = self.name_error(name) {
            warn!(parent_path, name, reason, "Rejected folder name");
            return false;
        }
        match self.store.create_folder(parent_path, name).await {
            Ok(()) => {
                info!(parent_path, name, "Created folder");
                true
            }
            Err(e) if e.is_conflict() => {
                debug!(parent_path, name, "Folder already exists");
                false
            }
            Err(e) => {
                error!(parent_path, name, error = %e, "Failed to create folder");
                false
            }
        }
    }

    /// Delete a folder and everything underneath it. Deleting a folder
    /// that does not exist still reports `true`; invalid names and store
    /// failures report `false`.
    ///
    /// Name validation matters here as much as on create: an empty name
    /// would resolve to the parent path itself, turning a root-level
    /// delete into a wipe of the root subtree.
    pub async fn delete_folder(&self, parent_path: &str, name: &str) -> bool {
        let name = name.trim();
        if let Some(reason) = self.name_error(name) {
            warn!(parent_path, name, reason, "Rejected folder name");
            return false;
        }
        match self.store.delete_folder(parent_path, name).await {
            Ok(()) => {
                info!(parent_path, name, "Deleted folder subtree");
                true
            }
            Err(e) => {
                error!(parent_path, name, error = %e, "Failed to delete folder");
                false
            }
        }
    }

    /// Record a file in a folder, replacing any existing entry with the
    /// same name.
    pub async fn add_file(
        &self,
        folder_path: &str,
        filename: &str,
        file_reference: &str,
        kind: FileKind,
        size: i64,
    ) -> bool {
        let filename = filename.trim();
        if let Some(reason) = self.name_error(filename) {
            warn!(folder_path, filename, reason, "Rejected filename");
            return false;
        }
        match self
            .store
            .add_file(folder_path, filename, file_reference, kind, size)
            .await
        {
            Ok(()) => {
                info!(folder_path, filename, "Stored file");
                true
            }
            Err(e) => {
                error!(folder_path, filename, error = %e, "Failed to store file");
                false
            }
        }
    }

    /// Remove a single file entry. Removing a missing file reports `true`;
    /// invalid filenames report `false`.
    pub async fn delete_file(&self, folder_path: &str, filename: &str) -> bool {
        let filename = filename.trim();
        if let Some(reason) = self.name_error(filename) {
            warn!(folder_path, filename, reason, "Rejected filename");
            return false;
        }
        match self.store.delete_file(folder_path, filename).await {
            Ok(()) => true,
            Err(e) => {
                error!(folder_path, filename, error = %e, "Failed to delete file");
                false
            }
        }
    }

    /// Record that a user was seen, refreshing their username.
    pub async fn upsert_user(&self, user_id: i64, username: Option<&str>) {
        if let Err(e) = self.store.upsert_user(user_id, username).await {
            warn!(user_id, error = %e, "Failed to upsert user");
        }
    }

    /// All known user IDs, for broadcast fan-out. Empty on failure.
    pub async fn user_ids(&self) -> Vec<i64> {
        match self.store.user_ids().await {
            Ok(ids) => ids,
            Err(e) => {
                error!(error = %e, "Failed to list user ids");
                Vec::new()
            }
        }
    }

    /// Aggregate catalog counters. Zeroed on failure.
    pub async fn stats(&self) -> CatalogStats {
        match self.store.stats().await {
            Ok(stats) => stats,
            Err(e) => {
                error!(error = %e, "Failed to compute catalog stats");
                CatalogStats::default()
            }
        }
    }

    /// Why a trimmed folder or file name is unacceptable, if it is.
    fn name_error(&self, name: &str) -> Option<&'static str> {
        if name.is_empty() {
            Some("name is empty")
        } else if name.contains('/') {
            Some("name contains a path separator")
        } else if name.chars().count() > self.config.max_name_length {
            Some("name is too long")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_limit(max_name_length: usize) -> CatalogService {
        // The store is never reached by name validation tests.
        CatalogService::new(
            Arc::new(NullStore),
            CatalogConfig {
                search_limit: 20,
                max_name_length,
            },
        )
    }

    #[derive(Debug)]
    struct NullStore;

    #[async_trait::async_trait]
    impl CatalogStore for NullStore {
        async fn ensure_root(&self) -> AppResult<()> {
            Ok(())
        }
        async fn list_children(&self, _folder_path: &str) -> AppResult<FolderListing> {
            Ok(FolderListing::default())
        }
        async fn file_reference(
            &self,
            _folder_path: &str,
            _filename: &str,
        ) -> AppResult<Option<String>> {
            Ok(None)
        }
        async fn search_files(&self, _query: &str, _limit: i64) -> AppResult<Vec<SearchHit>> {
            Ok(Vec::new())
        }
        async fn create_folder(&self, _parent_path: &str, _name: &str) -> AppResult<()> {
            Ok(())
        }
        async fn delete_folder(&self, _parent_path: &str, _name: &str) -> AppResult<()> {
            Ok(())
        }
        async fn add_file(
            &self,
            _folder_path: &str,
            _filename: &str,
            _file_reference: &str,
            _kind: FileKind,
            _size: i64,
        ) -> AppResult<()> {
            Ok(())
        }
        async fn delete_file(&self, _folder_path: &str, _filename: &str) -> AppResult<()> {
            Ok(())
        }
        async fn upsert_user(&self, _user_id: i64, _username: Option<&str>) -> AppResult<()> {
            Ok(())
        }
        async fn user_ids(&self) -> AppResult<Vec<i64>> {
            Ok(Vec::new())
        }
        async fn stats(&self) -> AppResult<CatalogStats> {
            Ok(CatalogStats::default())
        }
    }

    #[tokio::test]
    async fn test_rejects_empty_and_slash_names() {
        let service = service_with_limit(64);
        assert!(!service.create_folder("/", "").await);
        assert!(!service.create_folder("/", "   ").await);
        assert!(!service.create_folder("/", "a/b").await);
        assert!(service.create_folder("/", "Lectures").await);
    }

    #[tokio::test]
    async fn test_rejects_overlong_names() {
        let service = service_with_limit(8);
        assert!(service.create_folder("/", "short").await);
        assert!(!service.create_folder("/", "much-too-long-name").await);
    }

    #[tokio::test]
    async fn test_blank_search_returns_no_hits() {
        let service = service_with_limit(64);
        assert!(service.search_files("   ").await.is_empty());
    }
}
