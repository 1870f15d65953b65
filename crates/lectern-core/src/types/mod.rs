//! Plain value types crossing the catalog boundary.
//!
//! Everything here is transport-agnostic: strings, integers, and simple
//! records that any frontend can render.

pub mod kind;
pub mod listing;
pub mod path;
pub mod stats;

pub use kind::FileKind;
pub use listing::{FolderListing, SearchHit};
pub use stats::CatalogStats;
