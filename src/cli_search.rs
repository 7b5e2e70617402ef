use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lyrics_search::corpus::{load_corpus, CorpusFormat, CorpusSchema};
use lyrics_search::search::{search, LyricMatch};

fn parse_corpus_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s)
        .canonicalize()
        .with_context(|| format!("Error resolving path: {}", s))?;
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the JSON lyrics corpus.
    #[clap(value_parser = parse_corpus_path)]
    pub corpus: PathBuf,

    /// Field naming of the corpus file.
    #[clap(long, default_value_t = CorpusFormat::Capitalized)]
    pub format: CorpusFormat,
}

fn print_match(result: &LyricMatch) {
    let album = result.album.as_deref().unwrap_or("-");
    println!("{} [{}]", result.title, album);
    if !result.before.is_empty() {
        println!("    {}", result.before);
    }
    println!("  > {}", result.line);
    if !result.after.is_empty() {
        println!("    {}", result.after);
    }
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    println!(
        "Cli Search loading corpus at {}...",
        cli_args.corpus.display()
    );
    let corpus = load_corpus(&cli_args.corpus, &CorpusSchema::from(cli_args.format))?;
    println!(
        "Done! {} songs, {} lines.",
        corpus.songs_count(),
        corpus.lines_count()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Please enter your search query: ");
        io::stdout().flush()?;

        let user_input = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let results = search(&corpus, &user_input);
        if results.is_empty() {
            println!("No matches found for \"{}\".", user_input);
        } else {
            println!("Found {} matches for \"{}\":\n", results.len(), user_input);
            for result in results.iter() {
                print_match(result);
            }
        }
        println!();
    }

    Ok(())
}
