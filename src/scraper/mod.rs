//! One-shot scraping of an artist's lyrics into a corpus file.

mod genius;
mod lyrics_page;

pub use genius::{GeniusArtist, GeniusClient, GeniusSong};
pub use lyrics_page::extract_lyrics;

use crate::corpus::{CorpusSchema, Song};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

/// Environment variable holding the Genius API access token.
pub const GENIUS_API_KEY_VAR: &str = "GENIUS_API_KEY";

/// Fetches up to `max_songs` songs of `artist_name` with their lyrics.
/// Songs whose lyrics can't be fetched or extracted are skipped.
pub fn scrape_artist(
    client: &GeniusClient,
    artist_name: &str,
    max_songs: usize,
    with_album: bool,
) -> Result<Vec<Song>> {
    let artist = client
        .find_artist(artist_name)?
        .with_context(|| format!("No artist found on Genius for \"{}\"", artist_name))?;
    info!("Found artist {} (id {})", artist.name, artist.id);

    let songs = client.artist_songs(artist.id, max_songs)?;
    info!("Fetching lyrics of {} songs...", songs.len());

    let mut out = Vec::with_capacity(songs.len());
    for (index, genius_song) in songs.iter().enumerate() {
        info!(
            "[{}/{}] {}",
            index + 1,
            songs.len(),
            genius_song.title
        );

        let lyrics = match client.song_lyrics(&genius_song.url) {
            Ok(Some(lyrics)) => lyrics,
            Ok(None) => {
                warn!("No lyrics found for \"{}\", skipping", genius_song.title);
                continue;
            }
            Err(err) => {
                warn!(
                    "Failed to fetch lyrics for \"{}\": {:#}",
                    genius_song.title, err
                );
                continue;
            }
        };

        let album = if with_album {
            client.song_album(genius_song.id).unwrap_or_else(|err| {
                warn!(
                    "Failed to fetch album of \"{}\": {:#}",
                    genius_song.title, err
                );
                None
            })
        } else {
            None
        };

        out.push(Song::new(genius_song.title.clone(), album, lyrics));
    }

    Ok(out)
}

/// Serializes songs as a JSON array using the schema's field names.
pub fn corpus_to_json(songs: &[Song], schema: &CorpusSchema) -> Value {
    Value::Array(songs.iter().map(|s| schema.song_to_json(s)).collect())
}

pub fn write_corpus(path: &Path, songs: &[Song], schema: &CorpusSchema) -> Result<()> {
    let json = corpus_to_json(songs, schema);
    let text = serde_json::to_string(&json)?;
    std::fs::write(path, text).with_context(|| format!("Failed to write corpus to {:?}", path))?;
    info!("Wrote {} songs to {:?}", songs.len(), path);
    Ok(())
}
