//! Test fixture creation for the lyrics corpus

use super::constants::*;
use anyhow::Result;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes a three-song corpus in the `{Title, Lyrics, Album}` shape.
/// Returns (temp_dir, corpus_path)
pub fn create_test_corpus() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let corpus_path = dir.path().join("lyrics.json");

    let corpus = json!([
        {"Title": SONG_1_TITLE, "Album": SONG_1_ALBUM, "Lyrics": SONG_1_LYRICS},
        {"Title": SONG_2_TITLE, "Album": SONG_2_ALBUM, "Lyrics": SONG_2_LYRICS},
        {"Title": SONG_3_TITLE, "Album": SONG_3_ALBUM, "Lyrics": SONG_3_LYRICS},
    ]);
    fs::write(&corpus_path, serde_json::to_string(&corpus)?)?;

    Ok((dir, corpus_path))
}
