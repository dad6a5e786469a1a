//! Thread-safe access to a shared [`CatalogStore`].

use super::error::CatalogResult;
use super::models::*;
use super::store::CatalogStore;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle serializing every operation on one store.
///
/// The lock is held for the whole operation, so the indexes touched by a
/// single call are always updated together. Operations return owned copies
/// of the entities involved.
#[derive(Clone, Default)]
pub struct CatalogManager {
    store: Arc<Mutex<CatalogStore>>,
}

impl CatalogManager {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Locks the store. Operations validate before mutating, so a store left
    /// behind by a panicking holder is still consistent and can be reused.
    fn lock(&self) -> MutexGuard<'_, CatalogStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with shared access to the store, under the lock.
    pub fn read<R>(&self, f: impl FnOnce(&CatalogStore) -> R) -> R {
        let store = self.lock();
        f(&*store)
    }

    pub fn create_user(&self, name: &str, mobile: &str) -> User {
        self.lock().create_user(name, mobile).clone()
    }

    pub fn create_artist(&self, name: &str) -> Artist {
        self.lock().create_artist(name).clone()
    }

    pub fn create_album(&self, title: &str, artist_name: &str) -> Album {
        self.lock().create_album(title, artist_name).clone()
    }

    pub fn create_song(&self, title: &str, album_name: &str, length: u32) -> CatalogResult<Song> {
        self.lock().create_song(title, album_name, length).cloned()
    }

    pub fn create_playlist_by_length(
        &self,
        mobile: &str,
        title: &str,
        length: u32,
    ) -> CatalogResult<Playlist> {
        self.lock()
            .create_playlist_by_length(mobile, title, length)
            .cloned()
    }

    pub fn create_playlist_by_names<S: AsRef<str>>(
        &self,
        mobile: &str,
        title: &str,
        song_titles: &[S],
    ) -> CatalogResult<Playlist> {
        self.lock()
            .create_playlist_by_names(mobile, title, song_titles)
            .cloned()
    }

    pub fn join_playlist(&self, mobile: &str, playlist_title: &str) -> CatalogResult<Playlist> {
        self.lock().join_playlist(mobile, playlist_title).cloned()
    }

    pub fn like_song(&self, mobile: &str, song_title: &str) -> CatalogResult<Song> {
        self.lock().like_song(mobile, song_title).cloned()
    }

    pub fn most_popular_artist(&self) -> Option<String> {
        self.lock().most_popular_artist().map(str::to_owned)
    }

    pub fn most_popular_song(&self) -> Option<String> {
        self.lock().most_popular_song().map(str::to_owned)
    }

    pub fn resolve_playlist(&self, playlist_title: &str) -> CatalogResult<ResolvedPlaylist> {
        self.lock().resolve_playlist(playlist_title)
    }

    pub fn stats(&self) -> CatalogStats {
        self.lock().stats()
    }
}
