//! # lectern-core
//!
//! Core crate for Lectern. Contains the `CatalogStore` trait, configuration
//! schemas, plain value types (paths, listings, stats), and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other Lectern crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
