//! Bulk import of a local directory tree into the catalog.
//!
//! Walks the source directory, mirrors its folders under a destination
//! catalog path, and records every regular file. Files already present in
//! the catalog are skipped so re-runs are incremental.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use serde::Serialize;
use tracing::{debug, info};

use lectern_core::error::AppError;
use lectern_core::result::AppResult;
use lectern_core::traits::CatalogStore;
use lectern_core::types::kind::FileKind;
use lectern_core::types::path;

/// Counters reported after an import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub folders_created: u64,
    pub files_added: u64,
    pub files_skipped: u64,
}

/// Create `folder_path` and any missing ancestors, walking up to the root.
///
/// Returns the number of folders created. Concurrent creation races are
/// tolerated: a conflict means someone else made the folder first.
fn ensure_folder<'a>(
    store: &'a dyn CatalogStore,
    folder_path: &'a str,
) -> Pin<Box<dyn Future<Output = AppResult<u64>> + Send + 'a>> {
    Box::pin(async move {
        let Some((parent, name)) = path::split_path(folder_path) else {
            return Ok(0);
        };
        let mut created = ensure_folder(store, parent).await?;
        if store.list_children(parent).await?.subfolders.contains(name) {
            return Ok(created);
        }
        match store.create_folder(parent, name).await {
            Ok(()) => created += 1,
            Err(e) if e.is_conflict() => {}
            Err(e) => return Err(e),
        }
        Ok(created)
    })
}

/// Import every folder and file under `source` into the catalog below
/// `dest`, a canonical catalog path such as `/` or `/Archive/2024`.
pub async fn import_tree(
    store: &dyn CatalogStore,
    source: &Path,
    dest: &str,
) -> AppResult<ImportSummary> {
    if !source.is_dir() {
        return Err(AppError::validation(format!(
            "Import source '{}' is not a directory",
            source.display()
        )));
    }

    let mut summary = ImportSummary::default();
    summary.folders_created += ensure_folder(store, dest).await?;

    let mut pending: Vec<(PathBuf, String)> = vec![(source.to_path_buf(), dest.to_string())];
    while let Some((dir, folder_path)) = pending.pop() {
        let mut entries: Vec<_> = std::fs::read_dir(&dir)?.collect::<Result<_, _>>()?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let file_type = entry.file_type()?;
            let name = entry.file_name().to_string_lossy().into_owned();

            if file_type.is_dir() {
                match store.create_folder(&folder_path, &name).await {
                    Ok(()) => summary.folders_created += 1,
                    Err(e) if e.is_conflict() => {}
                    Err(e) => return Err(e),
                }
                pending.push((entry.path(), path::child_path(&folder_path, &name)));
            } else if file_type.is_file() {
                if store.file_reference(&folder_path, &name).await?.is_some() {
                    debug!(folder_path, filename = %name, "Skipping existing file");
                    summary.files_skipped += 1;
                    continue;
                }
                let size = entry.metadata()?.len() as i64;
                let entry_path = entry.path();
                let relative = entry_path.strip_prefix(source).map_err(|e| {
                    AppError::internal(format!("Entry escaped the import source: {e}"))
                })?;
                let reference = format!("local:{}", relative.display());
                store
                    .add_file(
                        &folder_path,
                        &name,
                        &reference,
                        FileKind::from_filename(&name),
                        size,
                    )
                    .await?;
                summary.files_added += 1;
            }
        }
    }

    info!(
        source = %source.display(),
        dest,
        folders_created = summary.folders_created,
        files_added = summary.files_added,
        files_skipped = summary.files_skipped,
        "Import finished"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectern_database::MemoryCatalog;

    fn seed_source() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Lectures/2024")).unwrap();
        std::fs::write(dir.path().join("readme.txt"), b"hello").unwrap();
        std::fs::write(dir.path().join("Lectures/intro.mp4"), b"video").unwrap();
        std::fs::write(dir.path().join("Lectures/2024/slides.pdf"), b"pdf").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_import_mirrors_tree_and_is_incremental() {
        let store = MemoryCatalog::new();
        store.ensure_root().await.unwrap();
        let source = seed_source();

        let summary = import_tree(&store, source.path(), "/").await.unwrap();
        assert_eq!(summary.folders_created, 2);
        assert_eq!(summary.files_added, 3);
        assert_eq!(summary.files_skipped, 0);

        let root = store.list_children("/").await.unwrap();
        assert!(root.subfolders.contains("Lectures"));
        assert_eq!(
            root.files.get("readme.txt").map(String::as_str),
            Some("local:readme.txt")
        );
        let lectures = store.list_children("/Lectures").await.unwrap();
        assert!(lectures.files.contains_key("intro.mp4"));

        // Second run finds everything in place.
        let again = import_tree(&store, source.path(), "/").await.unwrap();
        assert_eq!(again.folders_created, 0);
        assert_eq!(again.files_added, 0);
        assert_eq!(again.files_skipped, 3);
    }

    #[tokio::test]
    async fn test_import_creates_missing_destination_ancestors() {
        let store = MemoryCatalog::new();
        store.ensure_root().await.unwrap();
        let source = seed_source();

        let summary = import_tree(&store, source.path(), "/Archive/2024")
            .await
            .unwrap();
        // /Archive, /Archive/2024, plus the two source folders.
        assert_eq!(summary.folders_created, 4);

        let archive = store.list_children("/Archive").await.unwrap();
        assert!(archive.subfolders.contains("2024"));
        let dest = store.list_children("/Archive/2024").await.unwrap();
        assert!(dest.files.contains_key("readme.txt"));
    }

    #[tokio::test]
    async fn test_import_rejects_missing_source() {
        let store = MemoryCatalog::new();
        store.ensure_root().await.unwrap();
        let err = import_tree(&store, Path::new("/nonexistent-import-source"), "/")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }
}
