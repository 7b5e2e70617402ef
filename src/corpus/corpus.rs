use super::{CorpusError, CorpusSchema, LineRecord, Song};
use serde_json::Value;
use std::path::Path;

/// The lyrics corpus, built once at startup and read-only afterwards.
///
/// Holds the songs in file order, each song's lyrics split into lines, and
/// the flat sequence of [`LineRecord`]s the search scans.
#[derive(Debug, Default)]
pub struct Corpus {
    songs: Vec<Song>,
    song_lines: Vec<Vec<String>>,
    lines: Vec<LineRecord>,
}

impl Corpus {
    pub fn from_songs(songs: Vec<Song>) -> Corpus {
        let song_lines: Vec<Vec<String>> = songs.iter().map(Song::split_lines).collect();

        let mut lines = Vec::with_capacity(song_lines.iter().map(Vec::len).sum());
        for (song_index, (song, split)) in songs.iter().zip(song_lines.iter()).enumerate() {
            for (line_index, line) in split.iter().enumerate() {
                lines.push(LineRecord {
                    line: line.clone(),
                    title: song.title.clone(),
                    album: song.album.clone(),
                    song_index,
                    line_index,
                });
            }
        }

        Corpus {
            songs,
            song_lines,
            lines,
        }
    }

    pub fn from_json_str(text: &str, schema: &CorpusSchema) -> Result<Corpus, CorpusError> {
        let root: Value = serde_json::from_str(text)?;
        let entries = root.as_array().ok_or(CorpusError::NotAnArray)?;

        let songs = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| schema.parse_song(index, entry))
            .collect::<Result<Vec<Song>, CorpusError>>()?;

        Ok(Corpus::from_songs(songs))
    }

    pub fn load<P: AsRef<Path>>(path: P, schema: &CorpusSchema) -> Result<Corpus, CorpusError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Corpus::from_json_str(&text, schema)
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn song_lines(&self, song_index: usize) -> Option<&[String]> {
        self.song_lines.get(song_index).map(Vec::as_slice)
    }

    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    pub fn songs_count(&self) -> usize {
        self.songs.len()
    }

    pub fn lines_count(&self) -> usize {
        self.lines.len()
    }

    /// Distinct album names, in the order they first appear.
    pub fn albums(&self) -> Vec<&str> {
        let mut albums: Vec<&str> = vec![];
        for album in self.songs.iter().filter_map(|s| s.album.as_deref()) {
            if !albums.contains(&album) {
                albums.push(album);
            }
        }
        albums
    }
}
