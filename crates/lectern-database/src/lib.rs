//! # lectern-database
//!
//! PostgreSQL connection management, migrations, repositories, and the two
//! [`CatalogStore`](lectern_core::traits::CatalogStore) backends: the
//! Postgres-backed [`PgCatalog`] and the in-memory [`MemoryCatalog`].

pub mod connection;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod repositories;

pub use connection::DatabasePool;
pub use memory::MemoryCatalog;
pub use postgres::PgCatalog;
