mod file_config;

pub use file_config::{CorpusConfig, FileConfig};

use crate::corpus::{CorpusFormat, CorpusSchema};
use crate::server::{RequestsLoggingLevel, ServerConfig};
use anyhow::{anyhow, bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub corpus_path: Option<PathBuf>,
    pub format: CorpusFormat,
    pub bind_address: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub artist_name: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub corpus_path: PathBuf,
    pub corpus_schema: CorpusSchema,
    pub bind_address: String,
    pub port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub artist_name: String,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let corpus_path = file
            .corpus_path
            .map(PathBuf::from)
            .or_else(|| cli.corpus_path.clone())
            .ok_or_else(|| {
                anyhow!("corpus path must be specified on the command line or in config file")
            })?;

        if !corpus_path.is_file() {
            bail!("Corpus file does not exist: {:?}", corpus_path);
        }

        let corpus_schema = resolve_schema(cli.format, file.corpus.unwrap_or_default())?;

        let bind_address = file
            .bind_address
            .unwrap_or_else(|| cli.bind_address.clone());
        let port = file.port.unwrap_or(cli.port);

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let artist_name = file
            .artist_name
            .unwrap_or_else(|| cli.artist_name.clone());

        Ok(AppConfig {
            corpus_path,
            corpus_schema,
            bind_address,
            port,
            logging_level,
            artist_name,
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            bind_address: self.bind_address.clone(),
            port: self.port,
            artist_name: self.artist_name.clone(),
        }
    }
}

fn resolve_schema(cli_format: CorpusFormat, file: CorpusConfig) -> Result<CorpusSchema> {
    let format = match file.format {
        Some(s) => parse_corpus_format(&s)
            .ok_or_else(|| anyhow!("Unknown corpus format \"{}\"", s))?,
        None => cli_format,
    };

    let mut schema = CorpusSchema::from(format);
    if let Some(title_key) = file.title_key {
        schema.title_key = title_key;
    }
    if let Some(lyrics_key) = file.lyrics_key {
        schema.lyrics_key = lyrics_key;
    }
    if let Some(album_key) = file.album_key {
        schema.album_key = Some(album_key).filter(|k| !k.is_empty());
    }

    if schema.title_key.is_empty() || schema.lyrics_key.is_empty() {
        bail!("Corpus title and lyrics keys cannot be empty");
    }
    Ok(schema)
}

fn parse_corpus_format(s: &str) -> Option<CorpusFormat> {
    CorpusFormat::from_str(s, true).ok()
}

fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
