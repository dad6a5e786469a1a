//! Shared constants for the catalog scenario tests.
//!
//! When the fixture catalog changes, update only this file and
//! `fixtures.rs`.

#![allow(dead_code)]

// ============================================================================
// Users
// ============================================================================

pub const ALICE_NAME: &str = "Alice";
pub const ALICE_MOBILE: &str = "999";

pub const BOB_NAME: &str = "Bob";
pub const BOB_MOBILE: &str = "111";

/// A mobile number nobody registers.
pub const UNKNOWN_MOBILE: &str = "000";

// ============================================================================
// Catalog
// ============================================================================

/// Owns ALBUM_1 and ALBUM_2.
pub const ARTIST_1: &str = "The Test Band";
/// Owns ALBUM_3.
pub const ARTIST_2: &str = "Jazz Ensemble";

pub const ALBUM_1: &str = "First Light";
pub const ALBUM_2: &str = "Second Wind";
pub const ALBUM_3: &str = "Blue Notes";

/// In ALBUM_1, SHORT_LENGTH.
pub const SONG_1: &str = "Opening";
/// In ALBUM_1, LONG_LENGTH.
pub const SONG_2: &str = "Crescendo";
/// In ALBUM_2, SHORT_LENGTH.
pub const SONG_3: &str = "Breather";
/// In ALBUM_3, SHORT_LENGTH.
pub const SONG_4: &str = "Walking Bass";
/// In ALBUM_3, LONG_LENGTH.
pub const SONG_5: &str = "Late Set";

pub const SHORT_LENGTH: u32 = 180;
pub const LONG_LENGTH: u32 = 420;
