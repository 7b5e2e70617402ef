//! Shared constants for end-to-end tests
//!
//! When the test corpus changes, update only this file.

// ============================================================================
// Test Corpus
// ============================================================================

pub const ARTIST_NAME: &str = "Daniel Caesar";

pub const SONG_1_TITLE: &str = "Best Part";
pub const SONG_1_ALBUM: &str = "Freudian";
pub const SONG_1_LYRICS: &str = "Ooh\nI just wanna be a part\nof your symphony";

pub const SONG_2_TITLE: &str = "Get You";
pub const SONG_2_ALBUM: &str = "Freudian";
pub const SONG_2_LYRICS: &str = "Every time I try to get you\nI love you so\n\nLove me too";

pub const SONG_3_TITLE: &str = "Japanese Denim";
pub const SONG_3_ALBUM: &str = "Pilgrim's Paradise";
pub const SONG_3_LYRICS: &str = "Love\nI got love for you";

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for the server to answer on `/`
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Delay between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 25;

/// Timeout applied to each test request
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
