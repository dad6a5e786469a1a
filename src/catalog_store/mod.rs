mod error;
mod likes;
mod manager;
mod models;
mod playlists;
mod popularity;
mod store;

pub use error::{CatalogError, CatalogResult, EntityKind};
pub use manager::CatalogManager;
pub use models::*;
pub use store::CatalogStore;
