//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lectern_core::types::FileKind;

/// A file record in the catalog.
///
/// Identity is the (`filename`, `folder_path`) pair. The file reference is
/// an opaque handle into an external blob store; the catalog never
/// interprets it. `folder_path` is not required to reference an existing
/// folder row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StoredFile {
    /// Row identifier.
    pub id: i64,
    /// Filename, unique within its folder.
    pub filename: String,
    /// Canonical path of the containing folder.
    pub folder_path: String,
    /// Opaque external blob-storage handle.
    pub file_reference: String,
    /// Lowercase kind label (`document`, `photo`, `video`, `audio`).
    pub file_kind: String,
    /// File size in bytes.
    pub file_size: i64,
    /// Set on insert, refreshed on overwrite.
    pub created_at: DateTime<Utc>,
}

impl StoredFile {
    /// The parsed file kind; unknown labels fall back to `Document`.
    pub fn kind(&self) -> FileKind {
        FileKind::from_label(&self.file_kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_kind_falls_back_to_document() {
        let file = StoredFile {
            id: 1,
            filename: "slides.key".to_string(),
            folder_path: "/Lectures".to_string(),
            file_reference: "ref-1".to_string(),
            file_kind: "mystery".to_string(),
            file_size: 0,
            created_at: Utc::now(),
        };
        assert_eq!(file.kind(), FileKind::Document);
    }
}
