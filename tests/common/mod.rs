//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{populated_store, ALICE_MOBILE, SONG_1};
//!
//! #[test]
//! fn test_like() {
//!     let mut store = populated_store();
//!     store.like_song(ALICE_MOBILE, SONG_1).unwrap();
//! }
//! ```

mod constants;
mod fixtures;

#[allow(unused_imports)]
pub use constants::*;
#[allow(unused_imports)]
pub use fixtures::{populated_store, seed_file};
