//! Persistence layer for the estate server.
//!
//! Provides SQLite-backed storage for estates and trees.
//! Uses write-through caching with DashMap for hot data access.

pub mod db;
pub mod estates;
pub mod trees;

pub use db::{Database, init_database};
