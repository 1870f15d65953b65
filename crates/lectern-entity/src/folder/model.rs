//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A folder in the catalog hierarchy.
///
/// The tree is flat: a folder knows its own canonical path and its parent's
/// path, nothing else. Descendants are found by path prefix, children by
/// `parent_path` equality.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Row identifier.
    pub id: i64,
    /// Canonical absolute path (e.g. `/Lectures/Week 1`). Unique.
    pub path: String,
    /// Last path segment, used as display name. `Root` for the root folder.
    pub name: String,
    /// Canonical path of the immediate parent; `None` only for the root.
    pub parent_path: Option<String>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}
