//! Catalog-wide counters.

use serde::{Deserialize, Serialize};

/// Aggregate statistics over the whole catalog.
///
/// The root folder is excluded from `folders`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Number of folders, root excluded.
    pub folders: i64,
    /// Number of file records.
    pub files: i64,
    /// Sum of all file sizes in bytes.
    pub total_size_bytes: i64,
    /// Number of known users.
    pub users: i64,
}

/// Format a byte count as a human-readable size string.
pub fn format_size(bytes: i64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if bytes <= 0 {
        return "0 B".to_string();
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}
