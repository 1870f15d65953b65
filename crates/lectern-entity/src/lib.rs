//! # lectern-entity
//!
//! Persisted row models for the Lectern catalog: folders, files, and users.
//! These structs map one-to-one onto table rows via `sqlx::FromRow`.

pub mod file;
pub mod folder;
pub mod user;

pub use file::StoredFile;
pub use folder::Folder;
pub use user::User;
