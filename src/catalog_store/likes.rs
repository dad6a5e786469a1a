use super::error::CatalogResult;
use super::models::*;
use super::store::CatalogStore;
use tracing::debug;

impl CatalogStore {
    /// Records that the user likes a song and auto-likes the song's artist.
    ///
    /// A user likes a song at most once; repeated calls return the song
    /// unchanged. The artist gains one like per liked song, so a user liking
    /// two songs of the same artist counts twice for that artist.
    pub fn like_song(&mut self, mobile: &str, song_title: &str) -> CatalogResult<&Song> {
        let user_id = self.user_id(mobile)?;
        let song_id = self.song_id(song_title)?;

        if self.song_likers.entry(song_id).or_default().insert(user_id) {
            let song = &mut self.songs[song_id.0];
            song.likes += 1;
            let artist_id = self.albums[song.album_id.0].artist_id;
            self.artists[artist_id.0].likes += 1;
            self.user_liked_songs
                .entry(user_id)
                .or_default()
                .push(song_id);
            debug!(
                "User {} liked song {}, artist {} now has {} likes",
                user_id, song_id, artist_id, self.artists[artist_id.0].likes
            );
        }
        Ok(&self.songs[song_id.0])
    }

    /// Users who liked a song, in registration order.
    pub fn song_likers(&self, song_title: &str) -> CatalogResult<Vec<&User>> {
        let song_id = self.song_id(song_title)?;
        Ok(self.users_by_ids(self.song_likers.get(&song_id).into_iter().flatten()))
    }

    /// Songs liked by a user, in the order they were liked.
    pub fn liked_songs(&self, mobile: &str) -> CatalogResult<Vec<&Song>> {
        let user_id = self.user_id(mobile)?;
        Ok(self.songs_by_ids(self.user_liked_songs.get(&user_id)))
    }

    pub fn has_liked(&self, mobile: &str, song_title: &str) -> CatalogResult<bool> {
        let user_id = self.user_id(mobile)?;
        let song_id = self.song_id(song_title)?;
        Ok(self
            .song_likers
            .get(&song_id)
            .is_some_and(|likers| likers.contains(&user_id)))
    }
}
