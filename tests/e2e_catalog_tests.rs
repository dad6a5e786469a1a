//! End-to-end tests for the catalog store
//!
//! Exercises creation, playlists, listeners, likes and popularity together
//! on a populated catalog.

mod common;

use common::*;
use tunes_catalog::{CatalogError, CatalogManager, CatalogStore, EntityKind};

// =============================================================================
// Creation Tests
// =============================================================================

#[test]
fn test_repeated_creation_returns_same_entities() {
    let mut store = populated_store();
    let stats = store.stats();

    let user = store.create_user("Alice Again", ALICE_MOBILE).id;
    assert_eq!(user, store.user(ALICE_MOBILE).unwrap().id);
    let artist = store.create_artist(ARTIST_1).id;
    assert_eq!(artist, store.artist(ARTIST_1).unwrap().id);
    let album = store.create_album(ALBUM_1, ARTIST_2).id;
    assert_eq!(album, store.album(ALBUM_1).unwrap().id);
    let song = store.create_song(SONG_1, ALBUM_3, LONG_LENGTH).unwrap().id;
    assert_eq!(song, store.song(SONG_1).unwrap().id);
    store
        .create_playlist_by_length(ALICE_MOBILE, "Mix", SHORT_LENGTH)
        .unwrap();
    let playlist = store
        .create_playlist_by_length(BOB_MOBILE, "Mix", LONG_LENGTH)
        .unwrap()
        .id;
    assert_eq!(playlist, store.playlist("Mix").unwrap().id);

    let mut expected = stats;
    expected.playlists += 1;
    assert_eq!(store.stats(), expected);
    assert_eq!(store.user(ALICE_MOBILE).unwrap().name, ALICE_NAME);
}

#[test]
fn test_album_artist_never_changes() {
    let mut store = populated_store();
    store.create_album(ALBUM_1, ARTIST_2);
    store.like_song(ALICE_MOBILE, SONG_1).unwrap();
    store.create_song("Encore", ALBUM_1, SHORT_LENGTH).unwrap();

    let album = store.album(ALBUM_1).unwrap();
    assert_eq!(store.artist_of_album(album).name, ARTIST_1);
    let encore = store.song("Encore").unwrap();
    assert_eq!(store.album_of_song(encore).title, ALBUM_1);
}

// =============================================================================
// Playlist Tests
// =============================================================================

#[test]
fn test_playlist_membership_is_frozen() {
    let mut store = populated_store();
    store
        .create_playlist_by_length(ALICE_MOBILE, "Short ones", SHORT_LENGTH)
        .unwrap();
    store.create_song("Interlude", ALBUM_2, SHORT_LENGTH).unwrap();

    let songs: Vec<_> = store
        .playlist_songs("Short ones")
        .unwrap()
        .into_iter()
        .map(|s| s.title.clone())
        .collect();
    assert_eq!(songs, vec![SONG_1, SONG_3, SONG_4]);
}

#[test]
fn test_listeners_join_once_and_creator_stays_first() {
    let mut store = populated_store();
    store
        .create_playlist_by_names(ALICE_MOBILE, "Favorites", &[SONG_2, SONG_5])
        .unwrap();
    store.join_playlist(BOB_MOBILE, "Favorites").unwrap();
    store.join_playlist(BOB_MOBILE, "Favorites").unwrap();
    store.join_playlist(ALICE_MOBILE, "Favorites").unwrap();

    let listeners: Vec<_> = store
        .playlist_listeners("Favorites")
        .unwrap()
        .into_iter()
        .map(|u| u.mobile.clone())
        .collect();
    assert_eq!(listeners, vec![ALICE_MOBILE, BOB_MOBILE]);
    assert_eq!(store.user_playlists(BOB_MOBILE).unwrap().len(), 1);
    assert!(store.created_playlists(BOB_MOBILE).unwrap().is_empty());
}

#[test]
fn test_failed_operations_leave_store_untouched() {
    let mut store = populated_store();
    let stats = store.stats();

    assert_eq!(
        store.create_song("Orphan", "No Such Album", 1).unwrap_err(),
        CatalogError::NotFound(EntityKind::Album)
    );
    assert_eq!(
        store
            .create_playlist_by_length(UNKNOWN_MOBILE, "Ghost", SHORT_LENGTH)
            .unwrap_err(),
        CatalogError::NotFound(EntityKind::User)
    );
    assert_eq!(
        store.join_playlist(ALICE_MOBILE, "Ghost").unwrap_err(),
        CatalogError::NotFound(EntityKind::Playlist)
    );
    assert_eq!(
        store.like_song(ALICE_MOBILE, "Orphan").unwrap_err(),
        CatalogError::NotFound(EntityKind::Song)
    );

    assert_eq!(store.stats(), stats);
    assert!(store.playlist("Ghost").is_none());
    assert_eq!(store.most_popular_song(), None);
}

// =============================================================================
// Like Tests
// =============================================================================

#[test]
fn test_likes_are_idempotent_and_transitive() {
    let mut store = populated_store();

    let song = store.like_song(ALICE_MOBILE, SONG_1).unwrap().clone();
    assert_eq!(song.likes, 1);
    assert_eq!(store.artist(ARTIST_1).unwrap().likes, 1);

    store.like_song(ALICE_MOBILE, SONG_1).unwrap();
    assert_eq!(store.song(SONG_1).unwrap().likes, 1);
    assert_eq!(store.artist(ARTIST_1).unwrap().likes, 1);

    // SONG_3 is on another album of the same artist.
    store.like_song(ALICE_MOBILE, SONG_3).unwrap();
    assert_eq!(store.artist(ARTIST_1).unwrap().likes, 2);
    assert_eq!(store.song(SONG_1).unwrap().likes, 1);
    assert_eq!(store.song(SONG_3).unwrap().likes, 1);
    assert_eq!(store.artist(ARTIST_2).unwrap().likes, 0);
}

#[test]
fn test_artist_likes_match_like_pairs() {
    let mut store = populated_store();
    for (mobile, song) in [
        (ALICE_MOBILE, SONG_1),
        (BOB_MOBILE, SONG_1),
        (BOB_MOBILE, SONG_2),
        (ALICE_MOBILE, SONG_4),
        (BOB_MOBILE, SONG_2),
    ] {
        store.like_song(mobile, song).unwrap();
    }

    for artist in store.artists() {
        let pairs: usize = store
            .albums_of_artist(&artist.name)
            .unwrap()
            .into_iter()
            .flat_map(|album| store.songs_of_album(&album.title).unwrap())
            .map(|song| store.song_likers(&song.title).unwrap().len())
            .sum();
        assert_eq!(artist.likes, pairs as u64);
    }
    assert_eq!(store.artist(ARTIST_1).unwrap().likes, 3);
    assert_eq!(store.artist(ARTIST_2).unwrap().likes, 1);
}

// =============================================================================
// Popularity Tests
// =============================================================================

#[test]
fn test_popularity_tie_goes_to_first_created() {
    let mut store = populated_store();
    store.like_song(ALICE_MOBILE, SONG_4).unwrap();
    store.like_song(ALICE_MOBILE, SONG_1).unwrap();

    assert_eq!(store.most_popular_artist(), Some(ARTIST_1));
    assert_eq!(store.most_popular_song(), Some(SONG_1));

    store.like_song(BOB_MOBILE, SONG_5).unwrap();
    assert_eq!(store.most_popular_artist(), Some(ARTIST_2));
    assert_eq!(store.most_popular_song(), Some(SONG_1));
}

#[test]
fn test_end_to_end_scenario() {
    let mut store = CatalogStore::new();
    store.create_user("Alice", "999");
    store.create_album("A1", "X");
    store.create_song("S1", "A1", 180).unwrap();

    let song = store.like_song("999", "S1").unwrap().clone();
    assert_eq!(song.likes, 1);
    assert_eq!(store.artist("X").unwrap().likes, 1);
    assert_eq!(store.most_popular_song(), Some("S1"));
    assert_eq!(store.most_popular_artist(), Some("X"));
}

// =============================================================================
// Shared access
// =============================================================================

#[test]
fn test_manager_wraps_a_populated_store() {
    let manager = CatalogManager::new(populated_store());
    manager
        .create_playlist_by_length(ALICE_MOBILE, "Long ones", LONG_LENGTH)
        .unwrap();
    manager.join_playlist(BOB_MOBILE, "Long ones").unwrap();
    manager.like_song(BOB_MOBILE, SONG_5).unwrap();

    let resolved = manager.resolve_playlist("Long ones").unwrap();
    assert_eq!(resolved.creator.name, ALICE_NAME);
    assert_eq!(resolved.songs.len(), 2);
    assert_eq!(resolved.listeners.len(), 2);
    assert_eq!(manager.most_popular_artist(), Some(ARTIST_2.to_string()));
    assert_eq!(manager.most_popular_song(), Some(SONG_5.to_string()));
}
