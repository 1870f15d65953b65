//! In-memory catalog store.
//!
//! Mirrors the Postgres backend's semantics over plain ordered maps. Used by
//! tests and ephemeral local runs; constructor injection of the store trait
//! lets every consumer swap this in for [`crate::PgCatalog`].

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use lectern_core::error::AppError;
use lectern_core::result::AppResult;
use lectern_core::traits::CatalogStore;
use lectern_core::types::kind::FileKind;
use lectern_core::types::listing::{FolderListing, SearchHit};
use lectern_core::types::path;
use lectern_core::types::stats::CatalogStats;

#[derive(Debug, Clone)]
struct MemFolder {
    name: String,
    parent_path: Option<String>,
}

#[derive(Debug, Clone)]
struct MemFile {
    file_reference: String,
    file_kind: FileKind,
    file_size: i64,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct MemUser {
    username: Option<String>,
    first_seen: DateTime<Utc>,
    last_seen: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Folder rows keyed by canonical path.
    folders: BTreeMap<String, MemFolder>,
    /// File rows keyed by (folder path, filename).
    files: BTreeMap<(String, String), MemFile>,
    users: HashMap<i64, MemUser>,
}

/// In-memory implementation of [`CatalogStore`].
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    inner: Mutex<Inner>,
}

impl MemoryCatalog {
    /// Create an empty in-memory catalog. The root folder is not present
    /// until [`CatalogStore::ensure_root`] runs.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Whether `candidate` equals `folder_path` or lies underneath it.
///
/// Prefix matching stops at segment boundaries: `/AB` is not inside `/A`.
fn in_subtree(candidate: &str, folder_path: &str) -> bool {
    candidate == folder_path
        || (candidate.starts_with(folder_path)
            && candidate.as_bytes().get(folder_path.len()) == Some(&b'/'))
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn ensure_root(&self) -> AppResult<()> {
        let mut inner = self.lock();
        inner
            .folders
            .entry(path::ROOT.to_string())
            .or_insert_with(|| MemFolder {
                name: path::ROOT_NAME.to_string(),
                parent_path: None,
            });
        Ok(())
    }

    async fn list_children(&self, folder_path: &str) -> AppResult<FolderListing> {
        let inner = self.lock();
        let subfolders = inner
            .folders
            .values()
            .filter(|f| f.parent_path.as_deref() == Some(folder_path))
            .map(|f| f.name.clone())
            .collect();
        let files = inner
            .files
            .iter()
            .filter(|((folder, _), _)| folder == folder_path)
            .map(|((_, filename), file)| (filename.clone(), file.file_reference.clone()))
            .collect();
        Ok(FolderListing { subfolders, files })
    }

    async fn file_reference(&self, folder_path: &str, filename: &str) -> AppResult<Option<String>> {
        let inner = self.lock();
        Ok(inner
            .files
            .get(&(folder_path.to_string(), filename.to_string()))
            .map(|f| f.file_reference.clone()))
    }

    async fn search_files(&self, query: &str, limit: i64) -> AppResult<Vec<SearchHit>> {
        let needle = query.to_lowercase();
        let inner = self.lock();
        Ok(inner
            .files
            .iter()
            .filter(|((_, filename), _)| filename.to_lowercase().contains(&needle))
            .take(limit.max(0) as usize)
            .map(|((folder_path, filename), file)| SearchHit {
                filename: filename.clone(),
                folder_path: folder_path.clone(),
                file_reference: file.file_reference.clone(),
            })
            .collect())
    }

    async fn create_folder(&self, parent_path: &str, name: &str) -> AppResult<()> {
        let folder_path = path::child_path(parent_path, name);
        let mut inner = self.lock();
        if inner.folders.contains_key(&folder_path) {
            return Err(AppError::conflict(format!(
                "Folder path '{folder_path}' already exists"
            )));
        }
        inner.folders.insert(
            folder_path,
            MemFolder {
                name: name.to_string(),
                parent_path: Some(parent_path.to_string()),
            },
        );
        Ok(())
    }

    async fn delete_folder(&self, parent_path: &str, name: &str) -> AppResult<()> {
        let folder_path = path::child_path(parent_path, name);
        let mut inner = self.lock();
        inner
            .files
            .retain(|(folder, _), _| !in_subtree(folder, &folder_path));
        inner
            .folders
            .retain(|candidate, _| !in_subtree(candidate, &folder_path));
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
        let mut inner = self.lock();
        inner.files.insert(
            (folder_path.to_string(), filename.to_string()),
            MemFile {
                file_reference: file_reference.to_string(),
                file_kind: kind,
                file_size: size,
                created_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn delete_file(&self, folder_path: &str, filename: &str) -> AppResult<()> {
        let mut inner = self.lock();
        inner
            .files
            .remove(&(folder_path.to_string(), filename.to_string()));
        Ok(())
    }

    async fn upsert_user(&self, user_id: i64, username: Option<&str>) -> AppResult<()> {
        let now = Utc::now();
        let mut inner = self.lock();
        inner
            .users
            .entry(user_id)
            .and_modify(|u| {
                u.username = username.map(str::to_string);
                u.last_seen = now;
            })
            .or_insert_with(|| MemUser {
                username: username.map(str::to_string),
                first_seen: now,
                last_seen: now,
            });
        Ok(())
    }

    async fn user_ids(&self) -> AppResult<Vec<i64>> {
        let inner = self.lock();
        Ok(inner.users.keys().copied().collect())
    }

    async fn stats(&self) -> AppResult<CatalogStats> {
        let inner = self.lock();
        Ok(CatalogStats {
            folders: inner
                .folders
                .keys()
                .filter(|p| !path::is_root(p))
                .count() as i64,
            files: inner.files.len() as i64,
            total_size_bytes: inner.files.values().map(|f| f.file_size).sum(),
            users: inner.users.len() as i64,
        })
    }
}
