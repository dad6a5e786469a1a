//! Tunes Catalog Library
//!
//! In-memory catalog of artists, albums, songs, users and playlists, with the
//! relationship indexes and like aggregates tying them together.

pub mod catalog_store;
pub mod config;
pub mod seed;

// Re-export commonly used types for convenience
pub use catalog_store::{CatalogError, CatalogManager, CatalogResult, CatalogStore, EntityKind};
pub use seed::{load_seed, CatalogSeed, SeedProblem};
