//! Playlist construction and listener management.

use super::error::CatalogResult;
use super::models::*;
use super::store::CatalogStore;
use tracing::debug;

impl CatalogStore {
    /// Creates a playlist holding every song of the catalog lasting `length`.
    ///
    /// Returns the existing playlist untouched if `title` is already taken.
    pub fn create_playlist_by_length(
        &mut self,
        mobile: &str,
        title: &str,
        length: u32,
    ) -> CatalogResult<&Playlist> {
        self.create_playlist_with(mobile, title, |song| song.length == length)
    }

    /// Creates a playlist holding every song of the catalog whose title is in
    /// `song_titles`. Titles that match no song are ignored.
    ///
    /// Returns the existing playlist untouched if `title` is already taken.
    pub fn create_playlist_by_names<S: AsRef<str>>(
        &mut self,
        mobile: &str,
        title: &str,
        song_titles: &[S],
    ) -> CatalogResult<&Playlist> {
        self.create_playlist_with(mobile, title, |song| {
            song_titles.iter().any(|t| t.as_ref() == song.title)
        })
    }

    fn create_playlist_with<F>(
        &mut self,
        mobile: &str,
        title: &str,
        is_member: F,
    ) -> CatalogResult<&Playlist>
    where
        F: Fn(&Song) -> bool,
    {
        let id = match self.playlists_by_title.get(title) {
            Some(&id) => id,
            None => {
                let creator_id = self.user_id(mobile)?;
                let songs: Vec<SongId> = self
                    .songs
                    .iter()
                    .filter(|song| is_member(song))
                    .map(|song| song.id)
                    .collect();

                let id = PlaylistId(self.playlists.len());
                self.playlists.push(Playlist {
                    id,
                    title: title.to_owned(),
                    creator_id,
                });
                self.playlists_by_title.insert(title.to_owned(), id);
                debug!(
                    "Created playlist \"{}\" by user {} with {} songs",
                    title,
                    creator_id,
                    songs.len()
                );
                self.playlist_songs.insert(id, songs);
                self.playlist_listeners.insert(id, vec![creator_id]);
                self.user_created_playlists
                    .entry(creator_id)
                    .or_default()
                    .push(id);
                self.user_playlists.entry(creator_id).or_default().push(id);
                id
            }
        };
        Ok(&self.playlists[id.0])
    }

    /// Adds the user to the listeners of a playlist.
    ///
    /// Creators and existing listeners are left as they are.
    pub fn join_playlist(
        &mut self,
        mobile: &str,
        playlist_title: &str,
    ) -> CatalogResult<&Playlist> {
        let playlist_id = self.playlist_id(playlist_title)?;
        let user_id = self.user_id(mobile)?;

        let playlist = &self.playlists[playlist_id.0];
        if playlist.creator_id == user_id {
            return Ok(playlist);
        }

        let listeners = self.playlist_listeners.entry(playlist_id).or_default();
        if !listeners.contains(&user_id) {
            listeners.push(user_id);
            self.user_playlists
                .entry(user_id)
                .or_default()
                .push(playlist_id);
            debug!("User {} joined playlist {}", user_id, playlist_id);
        }
        Ok(&self.playlists[playlist_id.0])
    }

    // =========================================================================
    // Playlist queries
    // =========================================================================

    /// Songs of a playlist, as selected when it was created.
    pub fn playlist_songs(&self, playlist_title: &str) -> CatalogResult<Vec<&Song>> {
        let playlist_id = self.playlist_id(playlist_title)?;
        Ok(self.songs_by_ids(self.playlist_songs.get(&playlist_id)))
    }

    /// Listeners of a playlist, creator first.
    pub fn playlist_listeners(&self, playlist_title: &str) -> CatalogResult<Vec<&User>> {
        let playlist_id = self.playlist_id(playlist_title)?;
        let listeners = self.playlist_listeners.get(&playlist_id);
        Ok(self.users_by_ids(listeners.into_iter().flatten()))
    }

    /// Every playlist the user created or joined.
    pub fn user_playlists(&self, mobile: &str) -> CatalogResult<Vec<&Playlist>> {
        let user_id = self.user_id(mobile)?;
        Ok(self.playlists_by_ids(self.user_playlists.get(&user_id)))
    }

    /// Every playlist the user created, oldest first.
    pub fn created_playlists(&self, mobile: &str) -> CatalogResult<Vec<&Playlist>> {
        let user_id = self.user_id(mobile)?;
        Ok(self.playlists_by_ids(self.user_created_playlists.get(&user_id)))
    }

    /// The playlist the user created last, if any.
    pub fn creator_playlist(&self, mobile: &str) -> CatalogResult<Option<&Playlist>> {
        Ok(self.created_playlists(mobile)?.last().copied())
    }

    pub fn resolve_playlist(&self, playlist_title: &str) -> CatalogResult<ResolvedPlaylist> {
        let playlist_id = self.playlist_id(playlist_title)?;
        let playlist = self.playlists[playlist_id.0].clone();
        let creator = self.users[playlist.creator_id.0].clone();
        let songs = self
            .playlist_songs(playlist_title)?
            .into_iter()
            .cloned()
            .collect();
        let listeners = self
            .playlist_listeners(playlist_title)?
            .into_iter()
            .cloned()
            .collect();
        Ok(ResolvedPlaylist {
            playlist,
            creator,
            songs,
            listeners,
        })
    }
}
