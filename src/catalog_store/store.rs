//! The catalog store: entity arenas, key registries and relationship indexes.
//!
//! Entity creation and read access live here. Playlists, likes and the
//! popularity queries are implemented in their own modules on the same type.

use super::error::{CatalogError, CatalogResult, EntityKind};
use super::models::*;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Owns every entity of the catalog and the indexes relating them.
///
/// Arenas are append-only, so an id's index is also the entity's creation
/// order. Every index is keyed by ids and updated by the same operation that
/// creates or links the entities involved.
#[derive(Debug, Default)]
pub struct CatalogStore {
    pub(super) artists: Vec<Artist>,
    pub(super) albums: Vec<Album>,
    pub(super) songs: Vec<Song>,
    pub(super) users: Vec<User>,
    pub(super) playlists: Vec<Playlist>,

    pub(super) artists_by_name: HashMap<String, ArtistId>,
    pub(super) albums_by_title: HashMap<String, AlbumId>,
    pub(super) songs_by_title: HashMap<String, SongId>,
    pub(super) users_by_mobile: HashMap<String, UserId>,
    pub(super) playlists_by_title: HashMap<String, PlaylistId>,

    pub(super) artist_albums: HashMap<ArtistId, Vec<AlbumId>>,
    pub(super) album_songs: HashMap<AlbumId, Vec<SongId>>,
    pub(super) playlist_songs: HashMap<PlaylistId, Vec<SongId>>,
    pub(super) playlist_listeners: HashMap<PlaylistId, Vec<UserId>>,
    pub(super) user_created_playlists: HashMap<UserId, Vec<PlaylistId>>,
    pub(super) user_playlists: HashMap<UserId, Vec<PlaylistId>>,
    pub(super) song_likers: HashMap<SongId, BTreeSet<UserId>>,
    pub(super) user_liked_songs: HashMap<UserId, Vec<SongId>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Entity Creation
    // =========================================================================

    /// Registers a user, or returns the one already registered with `mobile`.
    pub fn create_user(&mut self, name: &str, mobile: &str) -> &User {
        let id = match self.users_by_mobile.get(mobile) {
            Some(&id) => id,
            None => {
                let id = UserId(self.users.len());
                self.users.push(User {
                    id,
                    name: name.to_owned(),
                    mobile: mobile.to_owned(),
                });
                self.users_by_mobile.insert(mobile.to_owned(), id);
                debug!("Created user {} ({})", mobile, id);
                id
            }
        };
        &self.users[id.0]
    }

    /// Registers an artist, or returns the one already named `name`.
    pub fn create_artist(&mut self, name: &str) -> &Artist {
        let id = self.artist_id_or_create(name);
        &self.artists[id.0]
    }

    /// Creates an album owned by `artist_name`, creating the artist if needed.
    ///
    /// If an album titled `title` already exists it is returned as is, even
    /// when it belongs to a different artist.
    pub fn create_album(&mut self, title: &str, artist_name: &str) -> &Album {
        let id = match self.albums_by_title.get(title) {
            Some(&id) => id,
            None => {
                let artist_id = self.artist_id_or_create(artist_name);
                let id = AlbumId(self.albums.len());
                self.albums.push(Album {
                    id,
                    title: title.to_owned(),
                    artist_id,
                });
                self.albums_by_title.insert(title.to_owned(), id);
                self.artist_albums.entry(artist_id).or_default().push(id);
                debug!("Created album \"{}\" for artist {}", title, artist_id);
                id
            }
        };
        &self.albums[id.0]
    }

    /// Creates a song in the album titled `album_name`.
    ///
    /// The album must exist even when the title is taken, in which case the
    /// existing song is returned unchanged.
    pub fn create_song(
        &mut self,
        title: &str,
        album_name: &str,
        length: u32,
    ) -> CatalogResult<&Song> {
        let album_id = self.album_id(album_name)?;
        let id = match self.songs_by_title.get(title) {
            Some(&id) => id,
            None => {
                let id = SongId(self.songs.len());
                self.songs.push(Song {
                    id,
                    title: title.to_owned(),
                    length,
                    likes: 0,
                    album_id,
                });
                self.songs_by_title.insert(title.to_owned(), id);
                self.album_songs.entry(album_id).or_default().push(id);
                debug!("Created song \"{}\" in album {}", title, album_id);
                id
            }
        };
        Ok(&self.songs[id.0])
    }

    fn artist_id_or_create(&mut self, name: &str) -> ArtistId {
        if let Some(&id) = self.artists_by_name.get(name) {
            return id;
        }
        let id = ArtistId(self.artists.len());
        self.artists.push(Artist {
            id,
            name: name.to_owned(),
            likes: 0,
        });
        self.artists_by_name.insert(name.to_owned(), id);
        debug!("Created artist \"{}\" ({})", name, id);
        id
    }

    // =========================================================================
    // Key Resolution
    // =========================================================================

    pub(super) fn user_id(&self, mobile: &str) -> CatalogResult<UserId> {
        self.users_by_mobile
            .get(mobile)
            .copied()
            .ok_or(CatalogError::NotFound(EntityKind::User))
    }

    pub(super) fn artist_id(&self, name: &str) -> CatalogResult<ArtistId> {
        self.artists_by_name
            .get(name)
            .copied()
            .ok_or(CatalogError::NotFound(EntityKind::Artist))
    }

    pub(super) fn album_id(&self, title: &str) -> CatalogResult<AlbumId> {
        self.albums_by_title
            .get(title)
            .copied()
            .ok_or(CatalogError::NotFound(EntityKind::Album))
    }

    pub(super) fn song_id(&self, title: &str) -> CatalogResult<SongId> {
        self.songs_by_title
            .get(title)
            .copied()
            .ok_or(CatalogError::NotFound(EntityKind::Song))
    }

    pub(super) fn playlist_id(&self, title: &str) -> CatalogResult<PlaylistId> {
        self.playlists_by_title
            .get(title)
            .copied()
            .ok_or(CatalogError::NotFound(EntityKind::Playlist))
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    pub fn user(&self, mobile: &str) -> Option<&User> {
        self.user_id(mobile).ok().map(|id| &self.users[id.0])
    }

    pub fn artist(&self, name: &str) -> Option<&Artist> {
        self.artist_id(name).ok().map(|id| &self.artists[id.0])
    }

    pub fn album(&self, title: &str) -> Option<&Album> {
        self.album_id(title).ok().map(|id| &self.albums[id.0])
    }

    pub fn song(&self, title: &str) -> Option<&Song> {
        self.song_id(title).ok().map(|id| &self.songs[id.0])
    }

    pub fn playlist(&self, title: &str) -> Option<&Playlist> {
        self.playlist_id(title).ok().map(|id| &self.playlists[id.0])
    }

    /// The artist an album was created for.
    pub fn artist_of_album(&self, album: &Album) -> &Artist {
        &self.artists[album.artist_id.0]
    }

    /// The album a song was created in.
    pub fn album_of_song(&self, song: &Song) -> &Album {
        &self.albums[song.album_id.0]
    }

    /// Albums of an artist, in creation order.
    pub fn albums_of_artist(&self, artist_name: &str) -> CatalogResult<Vec<&Album>> {
        let artist_id = self.artist_id(artist_name)?;
        Ok(self
            .artist_albums
            .get(&artist_id)
            .map(|ids| ids.iter().map(|id| &self.albums[id.0]).collect())
            .unwrap_or_default())
    }

    /// Songs of an album, in creation order.
    pub fn songs_of_album(&self, album_title: &str) -> CatalogResult<Vec<&Song>> {
        let album_id = self.album_id(album_title)?;
        Ok(self.songs_by_ids(self.album_songs.get(&album_id)))
    }

    pub(super) fn songs_by_ids(&self, ids: Option<&Vec<SongId>>) -> Vec<&Song> {
        ids.map(|ids| ids.iter().map(|id| &self.songs[id.0]).collect())
            .unwrap_or_default()
    }

    pub(super) fn users_by_ids<'a>(
        &'a self,
        ids: impl IntoIterator<Item = &'a UserId>,
    ) -> Vec<&'a User> {
        ids.into_iter().map(|id| &self.users[id.0]).collect()
    }

    pub(super) fn playlists_by_ids(&self, ids: Option<&Vec<PlaylistId>>) -> Vec<&Playlist> {
        ids.map(|ids| ids.iter().map(|id| &self.playlists[id.0]).collect())
            .unwrap_or_default()
    }

    // =========================================================================
    // Listings and counts
    // =========================================================================

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn get_users_count(&self) -> usize {
        self.users.len()
    }

    pub fn get_artists_count(&self) -> usize {
        self.artists.len()
    }

    pub fn get_albums_count(&self) -> usize {
        self.albums.len()
    }

    pub fn get_songs_count(&self) -> usize {
        self.songs.len()
    }

    pub fn get_playlists_count(&self) -> usize {
        self.playlists.len()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            artists: self.artists.len(),
            albums: self.albums.len(),
            songs: self.songs.len(),
            users: self.users.len(),
            playlists: self.playlists.len(),
        }
    }
}
