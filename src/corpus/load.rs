use super::{Corpus, CorpusSchema};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Loads the corpus and logs what was found. Any failure here is fatal for
/// the caller, nothing should be served without a corpus.
pub fn load_corpus<P: AsRef<Path>>(path: P, schema: &CorpusSchema) -> Result<Corpus> {
    let path = path.as_ref();
    info!(
        "Loading corpus at {:?} (title: \"{}\", lyrics: \"{}\", album: {:?})...",
        path, schema.title_key, schema.lyrics_key, schema.album_key
    );

    let corpus = Corpus::load(path, schema)
        .with_context(|| format!("Failed to load corpus from {:?}", path))?;

    let albums = corpus.albums();
    info!(
        "Corpus has:\n{} songs\n{} lines\n{} albums",
        corpus.songs_count(),
        corpus.lines_count(),
        albums.len()
    );
    if !albums.is_empty() {
        info!("Albums: {}", albums.join(", "));
    }

    Ok(corpus)
}
