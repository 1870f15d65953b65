//! Catalog behavior configuration.

use serde::{Deserialize, Serialize};

/// Tunables for catalog queries and mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Maximum number of results returned by a filename search.
    #[serde(default = "default_search_limit")]
    pub search_limit: i64,
    /// Maximum accepted length for a folder name, in characters.
    #[serde(default = "default_max_name_length")]
    pub max_name_length: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_limit: default_search_limit(),
            max_name_length: default_max_name_length(),
        }
    }
}

fn default_search_limit() -> i64 {
    20
}

fn default_max_name_length() -> usize {
    64
}
