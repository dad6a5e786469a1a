use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The kinds of entity an operation can fail to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Artist,
    Album,
    Song,
    User,
    Playlist,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Artist => "artist",
            EntityKind::Album => "album",
            EntityKind::Song => "song",
            EntityKind::User => "user",
            EntityKind::Playlist => "playlist",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by catalog operations.
///
/// Every variant is raised before the store is touched, so a failed call
/// never leaves partial index updates behind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{0} does not exist")]
    NotFound(EntityKind),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
