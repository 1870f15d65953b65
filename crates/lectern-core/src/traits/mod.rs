//! Trait definitions implemented by other Lectern crates.

pub mod store;

pub use store::CatalogStore;
