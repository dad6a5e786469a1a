//! Seeding a store from a TOML catalog description.
//!
//! Records are replayed through the regular store operations, so a seed file
//! obeys exactly the same rules as interactive calls: duplicates are no-ops
//! and references to unknown entities are reported as problems without
//! stopping the load.
//!
//! ```toml
//! [[users]]
//! name = "Alice"
//! mobile = "999"
//!
//! [[albums]]
//! title = "A1"
//! artist = "X"
//!
//! [[songs]]
//! title = "S1"
//! album = "A1"
//! length = 180
//!
//! [[playlists]]
//! title = "Three minutes"
//! creator = "999"
//! length = 180
//!
//! [[joins]]
//! mobile = "111"
//! playlist = "Three minutes"
//!
//! [[likes]]
//! mobile = "999"
//! song = "S1"
//! ```

use crate::catalog_store::{CatalogError, CatalogStore};
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CatalogSeed {
    pub users: Vec<SeedUser>,
    pub artists: Vec<SeedArtist>,
    pub albums: Vec<SeedAlbum>,
    pub songs: Vec<SeedSong>,
    pub playlists: Vec<SeedPlaylist>,
    pub joins: Vec<SeedJoin>,
    pub likes: Vec<SeedLike>,
}

#[derive(Debug, Deserialize)]
pub struct SeedUser {
    pub name: String,
    pub mobile: String,
}

#[derive(Debug, Deserialize)]
pub struct SeedArtist {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SeedAlbum {
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Deserialize)]
pub struct SeedSong {
    pub title: String,
    pub album: String,
    pub length: u32,
}

/// A playlist selects its songs either by `length` or by `songs` titles.
#[derive(Debug, Deserialize)]
pub struct SeedPlaylist {
    pub title: String,
    pub creator: String,
    pub length: Option<u32>,
    pub songs: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct SeedJoin {
    pub mobile: String,
    pub playlist: String,
}

#[derive(Debug, Deserialize)]
pub struct SeedLike {
    pub mobile: String,
    pub song: String,
}

/// A seed record that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedProblem {
    Rejected {
        record: String,
        error: CatalogError,
    },
    AmbiguousPlaylist {
        title: String,
    },
}

impl CatalogSeed {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file: {:?}", path))?;
        Self::from_toml(&text).with_context(|| format!("Failed to parse seed file: {:?}", path))
    }

    /// Replays every record into `store`, in dependency order, and returns
    /// the records that were rejected.
    pub fn apply(&self, store: &mut CatalogStore) -> Vec<SeedProblem> {
        let mut problems = vec![];

        for user in &self.users {
            store.create_user(&user.name, &user.mobile);
        }
        for artist in &self.artists {
            store.create_artist(&artist.name);
        }
        for album in &self.albums {
            store.create_album(&album.title, &album.artist);
        }
        for song in &self.songs {
            if let Err(error) = store.create_song(&song.title, &song.album, song.length) {
                problems.push(SeedProblem::Rejected {
                    record: format!("song \"{}\"", song.title),
                    error,
                });
            }
        }
        for playlist in &self.playlists {
            let result = match (&playlist.length, &playlist.songs) {
                (Some(length), None) => {
                    store.create_playlist_by_length(&playlist.creator, &playlist.title, *length)
                }
                (None, Some(songs)) => {
                    store.create_playlist_by_names(&playlist.creator, &playlist.title, songs)
                }
                _ => {
                    problems.push(SeedProblem::AmbiguousPlaylist {
                        title: playlist.title.clone(),
                    });
                    continue;
                }
            };
            if let Err(error) = result {
                problems.push(SeedProblem::Rejected {
                    record: format!("playlist \"{}\"", playlist.title),
                    error,
                });
            }
        }
        for join in &self.joins {
            if let Err(error) = store.join_playlist(&join.mobile, &join.playlist) {
                problems.push(SeedProblem::Rejected {
                    record: format!("join of {} to \"{}\"", join.mobile, join.playlist),
                    error,
                });
            }
        }
        for like in &self.likes {
            if let Err(error) = store.like_song(&like.mobile, &like.song) {
                problems.push(SeedProblem::Rejected {
                    record: format!("like of \"{}\" by {}", like.song, like.mobile),
                    error,
                });
            }
        }

        problems
    }
}

/// Builds a store from a seed file, logging the records that were rejected.
pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<CatalogStore> {
    let path = path.as_ref();
    let seed = CatalogSeed::load(path)?;
    let mut store = CatalogStore::new();
    let problems = seed.apply(&mut store);

    if !problems.is_empty() {
        warn!("Found {} problems in {:?}:", problems.len(), path);
        for problem in problems.iter() {
            warn!("- {:?}", problem);
        }
    }
    if store.get_users_count() == 0 && store.get_artists_count() == 0 {
        if problems.is_empty() {
            info!("Seed file {:?} is empty.", path);
        } else {
            bail!("Could not load anything from seed file {:?}", path);
        }
    }

    let stats = store.stats();
    info!(
        "Catalog has:\n{} artists\n{} albums\n{} songs\n{} users\n{} playlists",
        stats.artists, stats.albums, stats.songs, stats.users, stats.playlists
    );
    Ok(store)
}
