//! Behavior tests for the catalog service over the in-memory store.

use std::sync::Arc;

use async_trait::async_trait;

use lectern_core::config::CatalogConfig;
use lectern_core::error::{AppError, ErrorKind};
use lectern_core::result::AppResult;
use lectern_core::traits::CatalogStore;
use lectern_core::types::kind::FileKind;
use lectern_core::types::listing::{FolderListing, SearchHit};
use lectern_core::types::stats::CatalogStats;
use lectern_database::MemoryCatalog;
use lectern_service::CatalogService;

fn service() -> CatalogService {
    CatalogService::new(Arc::new(MemoryCatalog::new()), CatalogConfig::default())
}

async fn ready_service() -> CatalogService {
    let service = service();
    service.init().await.expect("init failed");
    service
}

#[tokio::test]
async fn test_init_is_idempotent() {
    let service = service();
    service.init().await.unwrap();
    service.create_folder("/", "A").await;
    // A second bootstrap must not disturb existing content.
    service.init().await.unwrap();

    let root = service.list_children("/").await;
    assert_eq!(root.subfolders.len(), 1);
    assert!(root.subfolders.contains("A"));
}

#[tokio::test]
async fn test_create_and_list_round_trip() {
    let service = ready_service().await;

    assert!(service.create_folder("/", "Lectures").await);
    assert!(service.create_folder("/Lectures", "2024").await);
    assert!(
        service
            .add_file("/Lectures/2024", "intro.pdf", "ref-1", FileKind::Document, 1024)
            .await
    );

    let root = service.list_children("/").await;
    assert!(root.subfolders.contains("Lectures"));
    assert!(root.files.is_empty());

    let inner = service.list_children("/Lectures/2024").await;
    assert!(inner.subfolders.is_empty());
    assert_eq!(
        inner.files.get("intro.pdf").map(String::as_str),
        Some("ref-1")
    );
    assert_eq!(
        service.file_reference("/Lectures/2024", "intro.pdf").await,
        Some("ref-1".to_string())
    );
}

#[tokio::test]
async fn test_duplicate_folder_is_rejected() {
    let service = ready_service().await;

    assert!(service.create_folder("/", "A").await);
    assert!(!service.create_folder("/", "A").await);

    let root = service.list_children("/").await;
    assert_eq!(root.subfolders.len(), 1);
}

#[tokio::test]
async fn test_add_file_replaces_existing_entry() {
    let service = ready_service().await;
    service.create_folder("/", "A").await;

    assert!(
        service
            .add_file("/A", "notes.txt", "ref-old", FileKind::Document, 10)
            .await
    );
    assert!(
        service
            .add_file("/A", "notes.txt", "ref-new", FileKind::Document, 20)
            .await
    );

    assert_eq!(
        service.file_reference("/A", "notes.txt").await,
        Some("ref-new".to_string())
    );
    let stats = service.stats().await;
    assert_eq!(stats.files, 1);
    assert_eq!(stats.total_size_bytes, 20);
}

#[tokio::test]
async fn test_delete_folder_removes_whole_subtree() {
    let service = ready_service().await;
    service.create_folder("/", "A").await;
    service.create_folder("/A", "B").await;
    service.create_folder("/A/B", "C").await;
    service.create_folder("/", "Keep").await;
    service
        .add_file("/A/B", "deep.txt", "ref-d", FileKind::Document, 5)
        .await;
    service
        .add_file("/Keep", "safe.txt", "ref-s", FileKind::Document, 5)
        .await;

    assert!(service.delete_folder("/", "A").await);

    let root = service.list_children("/").await;
    assert!(!root.subfolders.contains("A"));
    assert!(root.subfolders.contains("Keep"));
    assert!(service.list_children("/A").await.is_empty());
    assert!(service.list_children("/A/B").await.is_empty());
    assert_eq!(service.file_reference("/A/B", "deep.txt").await, None);
    assert_eq!(
        service.file_reference("/Keep", "safe.txt").await,
        Some("ref-s".to_string())
    );
}

#[tokio::test]
async fn test_delete_folder_spares_sibling_with_prefix_name() {
    let service = ready_service().await;
    service.create_folder("/", "A").await;
    service.create_folder("/", "AB").await;
    service
        .add_file("/AB", "kept.txt", "ref-k", FileKind::Document, 1)
        .await;

    assert!(service.delete_folder("/", "A").await);

    let root = service.list_children("/").await;
    assert!(!root.subfolders.contains("A"));
    assert!(root.subfolders.contains("AB"));
    assert_eq!(
        service.file_reference("/AB", "kept.txt").await,
        Some("ref-k".to_string())
    );
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let service = ready_service().await;
    service.create_folder("/", "A").await;
    service
        .add_file("/A", "Intro-Lecture.mp4", "ref-1", FileKind::Video, 100)
        .await;
    service
        .add_file("/A", "summary.txt", "ref-2", FileKind::Document, 10)
        .await;

    let hits = service.search_files("lecture").await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].filename, "Intro-Lecture.mp4");
    assert_eq!(hits[0].folder_path, "/A");
    assert_eq!(hits[0].file_reference, "ref-1");

    assert!(service.search_files("zzz").await.is_empty());
}

#[tokio::test]
async fn test_deleting_missing_entries_is_benign() {
    let service = ready_service().await;
    service.create_folder("/", "A").await;

    assert!(service.delete_folder("/", "Ghost").await);
    assert!(service.delete_file("/A", "ghost.txt").await);

    let root = service.list_children("/").await;
    assert!(root.subfolders.contains("A"));
}

#[tokio::test]
async fn test_delete_rejects_invalid_names() {
    let store = Arc::new(MemoryCatalog::new());
    let service = CatalogService::new(store.clone(), CatalogConfig::default());
    service.init().await.unwrap();
    service.create_folder("/", "A").await;
    service
        .add_file("/", "top.txt", "ref-t", FileKind::Document, 1)
        .await;

    // An empty name would resolve to the parent itself; it must not turn
    // into a delete of the root subtree.
    assert!(!service.delete_folder("/", "").await);
    assert!(!service.delete_folder("/", "   ").await);
    assert!(!service.delete_folder("/", "A/B").await);
    assert!(!service.delete_file("/", "").await);

    let root = service.list_children("/").await;
    assert!(root.subfolders.contains("A"));
    assert_eq!(
        root.files.get("top.txt").map(String::as_str),
        Some("ref-t")
    );
    // Nothing was deleted at the store level either.
    let stats = store.stats().await.unwrap();
    assert_eq!(stats.folders, 1);
    assert_eq!(stats.files, 1);
}

#[tokio::test]
async fn test_users_and_stats() {
    let service = ready_service().await;

    service.upsert_user(1, Some("alice")).await;
    service.upsert_user(2, None).await;
    service.upsert_user(1, Some("alice-renamed")).await;

    let mut ids = service.user_ids().await;
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2]);

    service.create_folder("/", "A").await;
    service
        .add_file("/A", "a.bin", "ref-a", FileKind::Document, 1000)
        .await;

    let stats = service.stats().await;
    // The root folder is not counted.
    assert_eq!(stats.folders, 1);
    assert_eq!(stats.files, 1);
    assert_eq!(stats.total_size_bytes, 1000);
    assert_eq!(stats.users, 2);
}

#[tokio::test]
async fn test_nonexistent_folder_lists_empty() {
    let service = ready_service().await;
    assert!(service.list_children("/does/not/exist").await.is_empty());
    assert_eq!(service.file_reference("/nope", "x.txt").await, None);
}

/// A store whose every operation fails, for exercising the degraded paths.
#[derive(Debug)]
struct BrokenStore;

fn down() -> AppError {
    AppError::new(ErrorKind::Database, "store is down")
}

#[async_trait]
impl CatalogStore for BrokenStore {
    async fn ensure_root(&self) -> AppResult<()> {
        Err(down())
    }
    async fn list_children(&self, _folder_path: &str) -> AppResult<FolderListing> {
        Err(down())
    }
    async fn file_reference(
        &self,
        _folder_path: &str,
        _filename: &str,
    ) -> AppResult<Option<String>> {
        Err(down())
    }
    async fn search_files(&self, _query: &str, _limit: i64) -> AppResult<Vec<SearchHit>> {
        Err(down())
    }
    async fn create_folder(&self, _parent_path: &str, _name: &str) -> AppResult<()> {
        Err(down())
    }
    async fn delete_folder(&self, _parent_path: &str, _name: &str) -> AppResult<()> {
        Err(down())
    }
    async fn add_file(
        &self,
        _folder_path: &str,
        _filename: &str,
        _file_reference: &str,
        _kind: FileKind,
        _size: i64,
    ) -> AppResult<()> {
        Err(down())
    }
    async fn delete_file(&self, _folder_path: &str, _filename: &str) -> AppResult<()> {
        Err(down())
    }
    async fn upsert_user(&self, _user_id: i64, _username: Option<&str>) -> AppResult<()> {
        Err(down())
    }
    async fn user_ids(&self) -> AppResult<Vec<i64>> {
        Err(down())
    }
    async fn stats(&self) -> AppResult<CatalogStats> {
        Err(down())
    }
}

#[tokio::test]
async fn test_store_failures_degrade_to_empty_results() {
    let service = CatalogService::new(Arc::new(BrokenStore), CatalogConfig::default());

    // Bootstrap is the one fatal path.
    assert!(service.init().await.is_err());

    assert!(service.list_children("/").await.is_empty());
    assert_eq!(service.file_reference("/", "x.txt").await, None);
    assert!(service.search_files("x").await.is_empty());
    assert!(!service.create_folder("/", "A").await);
    assert!(!service.delete_folder("/", "A").await);
    assert!(
        !service
            .add_file("/", "x.txt", "ref", FileKind::Document, 1)
            .await
    );
    assert!(!service.delete_file("/", "x.txt").await);
    assert!(service.user_ids().await.is_empty());
    assert_eq!(service.stats().await, CatalogStats::default());
}
