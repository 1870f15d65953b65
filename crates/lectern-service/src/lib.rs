//! # lectern-service
//!
//! The outward-facing catalog service: wraps a
//! [`CatalogStore`](lectern_core::traits::CatalogStore) behind the
//! degrade-to-empty contract, tracks per-user navigation sessions, and
//! provides the bulk directory importer.

pub mod catalog;
pub mod import;
pub mod session;

pub use catalog::CatalogService;
pub use import::{ImportSummary, import_tree};
pub use session::{Session, SessionRegistry, SessionState, TextCommand};
