//! Lyrics Search Library
//!
//! Loads an artist's lyrics corpus and serves fuzzy line search over it.
//! Exposes the internal modules for the binaries and for testing.

pub mod config;
pub mod corpus;
pub mod scraper;
pub mod search;
pub mod server;

// Re-export commonly used types for convenience
pub use corpus::{Corpus, CorpusError, CorpusFormat, CorpusSchema, LineRecord, Song};
pub use search::{search, LyricMatch, MATCH_THRESHOLD};
pub use server::{run_server, RequestsLoggingLevel};
