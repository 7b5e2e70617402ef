//! Field-name mapping between corpus files and [`Song`].
//!
//! Corpus files have shipped in two shapes over time: `{title, lyrics}` and
//! `{Title, Lyrics, Album}`. The schema tells the loader (and the scraper,
//! when writing) which keys to use.

use super::{CorpusError, Song};
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CorpusFormat {
    /// `{"title": ..., "lyrics": ...}`, no album.
    Lowercase,
    /// `{"Title": ..., "Lyrics": ..., "Album": ...}`.
    #[default]
    Capitalized,
}

impl std::fmt::Display for CorpusFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusFormat::Lowercase => write!(f, "lowercase"),
            CorpusFormat::Capitalized => write!(f, "capitalized"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorpusSchema {
    pub title_key: String,
    pub lyrics_key: String,
    pub album_key: Option<String>,
}

impl CorpusSchema {
    pub fn lowercase() -> CorpusSchema {
        CorpusSchema {
            title_key: "title".to_string(),
            lyrics_key: "lyrics".to_string(),
            album_key: None,
        }
    }

    pub fn capitalized() -> CorpusSchema {
        CorpusSchema {
            title_key: "Title".to_string(),
            lyrics_key: "Lyrics".to_string(),
            album_key: Some("Album".to_string()),
        }
    }

    /// Reads one song object. `index` is only used for error reporting.
    pub fn parse_song(&self, index: usize, value: &Value) -> Result<Song, CorpusError> {
        let object = value
            .as_object()
            .ok_or(CorpusError::NotAnObject { index })?;

        let title = required_string(object, index, &self.title_key)?;
        let lyrics = required_string(object, index, &self.lyrics_key)?;

        // A configured album key may still be absent on older entries.
        let album = match &self.album_key {
            None => None,
            Some(key) => match object.get(key) {
                None | Some(Value::Null) => None,
                Some(Value::String(album)) => Some(album.clone()),
                Some(_) => {
                    return Err(CorpusError::InvalidField {
                        index,
                        key: key.clone(),
                    })
                }
            },
        };

        Ok(Song {
            title,
            album,
            lyrics,
        })
    }

    /// Writes a song back using this schema's keys.
    pub fn song_to_json(&self, song: &Song) -> Value {
        let mut object = Map::new();
        object.insert(self.title_key.clone(), Value::String(song.title.clone()));
        if let Some(album_key) = &self.album_key {
            let album = song
                .album
                .clone()
                .map(Value::String)
                .unwrap_or(Value::Null);
            object.insert(album_key.clone(), album);
        }
        object.insert(self.lyrics_key.clone(), Value::String(song.lyrics.clone()));
        Value::Object(object)
    }
}

impl Default for CorpusSchema {
    fn default() -> Self {
        CorpusFormat::default().into()
    }
}

impl From<CorpusFormat> for CorpusSchema {
    fn from(format: CorpusFormat) -> Self {
        match format {
            CorpusFormat::Lowercase => CorpusSchema::lowercase(),
            CorpusFormat::Capitalized => CorpusSchema::capitalized(),
        }
    }
}

fn required_string(
    object: &Map<String, Value>,
    index: usize,
    key: &str,
) -> Result<String, CorpusError> {
    match object.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(CorpusError::InvalidField {
            index,
            key: key.to_string(),
        }),
        None => Err(CorpusError::MissingField {
            index,
            key: key.to_string(),
        }),
    }
}
