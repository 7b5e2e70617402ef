use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub corpus_path: Option<String>,
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub logging_level: Option<String>,
    pub artist_name: Option<String>,

    pub corpus: Option<CorpusConfig>,
}

/// Field mapping of the corpus file. `format` picks a preset, the
/// individual keys override it. An empty `album_key` disables albums.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct CorpusConfig {
    pub format: Option<String>,
    pub title_key: Option<String>,
    pub lyrics_key: Option<String>,
    pub album_key: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
