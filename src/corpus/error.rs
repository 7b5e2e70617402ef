use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Failed to read corpus file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corpus is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corpus root must be an array of songs")]
    NotAnArray,

    #[error("Song #{index} is not an object")]
    NotAnObject { index: usize },

    #[error("Song #{index} has no \"{key}\" field")]
    MissingField { index: usize, key: String },

    #[error("Song #{index} has a non-string value for \"{key}\"")]
    InvalidField { index: usize, key: String },
}
