//! Test fixture creation for catalog stores and seed files

#![allow(dead_code)]

use super::constants::*;
use std::io::Write;
use tempfile::NamedTempFile;
use tunes_catalog::CatalogStore;

/// Creates a store with 2 users, 2 artists, 3 albums and 5 songs.
/// Nothing is liked and no playlist exists yet.
pub fn populated_store() -> CatalogStore {
    let mut store = CatalogStore::new();
    store.create_user(ALICE_NAME, ALICE_MOBILE);
    store.create_user(BOB_NAME, BOB_MOBILE);

    store.create_album(ALBUM_1, ARTIST_1);
    store.create_album(ALBUM_2, ARTIST_1);
    store.create_album(ALBUM_3, ARTIST_2);

    for (song, album, length) in [
        (SONG_1, ALBUM_1, SHORT_LENGTH),
        (SONG_2, ALBUM_1, LONG_LENGTH),
        (SONG_3, ALBUM_2, SHORT_LENGTH),
        (SONG_4, ALBUM_3, SHORT_LENGTH),
        (SONG_5, ALBUM_3, LONG_LENGTH),
    ] {
        store
            .create_song(song, album, length)
            .expect("fixture albums exist");
    }
    store
}

/// Writes `content` to a temporary seed file kept alive by the returned handle.
pub fn seed_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create seed file");
    file.write_all(content.as_bytes())
        .expect("Failed to write seed file");
    file
}
