//! Catalog entity models.
//!
//! Entities live in per-kind arenas inside [`super::CatalogStore`] and refer
//! to each other through the typed ids below, never through references.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// Position of the entity in its arena, i.e. its creation order.
            pub fn index(&self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

arena_id!(
    /// Identifies an [`Artist`] inside a store.
    ArtistId
);
arena_id!(
    /// Identifies an [`Album`] inside a store.
    AlbumId
);
arena_id!(
    /// Identifies a [`Song`] inside a store.
    SongId
);
arena_id!(
    /// Identifies a [`User`] inside a store.
    UserId
);
arena_id!(
    /// Identifies a [`Playlist`] inside a store.
    PlaylistId
);

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    /// One per successful song like on any of the artist's songs.
    pub likes: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist_id: ArtistId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Song {
    pub id: SongId,
    pub title: String,
    pub length: u32,
    pub likes: u64,
    pub album_id: AlbumId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub mobile: String,
}

/// A playlist record. Its songs and listeners are kept in the store indexes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Playlist {
    pub id: PlaylistId,
    pub title: String,
    pub creator_id: UserId,
}

/// A playlist together with everything it references.
#[derive(Clone, Debug, Serialize)]
pub struct ResolvedPlaylist {
    pub playlist: Playlist,
    pub creator: User,
    pub songs: Vec<Song>,
    pub listeners: Vec<User>,
}

/// Entity counts, in the order they are usually displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub artists: usize,
    pub albums: usize,
    pub songs: usize,
    pub users: usize,
    pub playlists: usize,
}
