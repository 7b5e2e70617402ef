use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lyrics_search::corpus::{CorpusFormat, CorpusSchema};
use lyrics_search::scraper::{scrape_artist, write_corpus, GeniusClient, GENIUS_API_KEY_VAR};
use lyrics_search::server::config::DEFAULT_ARTIST_NAME;

#[derive(Parser, Debug)]
struct CliArgs {
    /// Where to write the JSON corpus.
    #[clap(default_value = "daniel_caesar_lyrics.json")]
    pub output: PathBuf,

    /// The artist to fetch lyrics for.
    #[clap(long, default_value = DEFAULT_ARTIST_NAME)]
    pub artist: String,

    /// Maximum number of songs to fetch.
    #[clap(long, default_value_t = 50)]
    pub max_songs: usize,

    /// Field naming of the written corpus, `capitalized` also stores albums.
    #[clap(long, default_value_t = CorpusFormat::Capitalized)]
    pub format: CorpusFormat,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    let api_key = std::env::var(GENIUS_API_KEY_VAR)
        .with_context(|| format!("{} must be set to a Genius API token", GENIUS_API_KEY_VAR))?;

    let schema = CorpusSchema::from(cli_args.format);
    let client = GeniusClient::new(&api_key)?;

    info!(
        "Fetching up to {} songs of {}...",
        cli_args.max_songs, cli_args.artist
    );
    let songs = scrape_artist(
        &client,
        &cli_args.artist,
        cli_args.max_songs,
        schema.album_key.is_some(),
    )?;

    write_corpus(&cli_args.output, &songs, &schema)
}
