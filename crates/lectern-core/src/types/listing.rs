//! Read-side result records for catalog queries.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// The immediate children of a folder.
///
/// Both collections are ordered ascending by name; a storage failure is
/// reported to callers as the empty listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderListing {
    /// Names of direct subfolders.
    pub subfolders: BTreeSet<String>,
    /// Files in this folder, mapping filename to its opaque file reference.
    pub files: BTreeMap<String, String>,
}

impl FolderListing {
    /// Whether the folder has neither subfolders nor files.
    pub fn is_empty(&self) -> bool {
        self.subfolders.is_empty() && self.files.is_empty()
    }
}

/// A single filename-search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Matched filename.
    pub filename: String,
    /// Canonical path of the folder containing the file.
    pub folder_path: String,
    /// Opaque blob-storage handle for the file.
    pub file_reference: String,
}
