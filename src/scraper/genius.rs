//! Genius API client.
//!
//! The API lists artists and songs but does not return lyrics, those are
//! scraped from each song's public page.

use super::extract_lyrics;
use anyhow::{bail, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::debug;

const GENIUS_API_BASE: &str = "https://api.genius.com";
const SONGS_PAGE_SIZE: usize = 50;
const RATE_LIMIT_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeniusArtist {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeniusSong {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub primary_artist: GeniusArtist,
}

#[derive(Deserialize)]
struct ApiResponse<T> {
    response: T,
}

#[derive(Deserialize)]
struct SearchResponse {
    hits: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    #[serde(rename = "type")]
    hit_type: String,
    result: SearchHitResult,
}

#[derive(Deserialize)]
struct SearchHitResult {
    primary_artist: GeniusArtist,
}

#[derive(Deserialize)]
struct ArtistSongsResponse {
    songs: Vec<GeniusSong>,
    next_page: Option<u32>,
}

#[derive(Deserialize)]
struct SongResponse {
    song: SongDetails,
}

#[derive(Deserialize)]
struct SongDetails {
    album: Option<AlbumSummary>,
}

#[derive(Deserialize)]
struct AlbumSummary {
    name: String,
}

/// Picks the artist whose name matches `name`, falling back to the primary
/// artist of the first song hit.
fn pick_artist(hits: Vec<SearchHit>, name: &str) -> Option<GeniusArtist> {
    let mut artists = hits
        .into_iter()
        .filter(|hit| hit.hit_type == "song")
        .map(|hit| hit.result.primary_artist);

    let first = artists.next()?;
    if first.name.eq_ignore_ascii_case(name) {
        return Some(first);
    }
    Some(
        artists
            .find(|artist| artist.name.eq_ignore_ascii_case(name))
            .unwrap_or(first),
    )
}

pub struct GeniusClient {
    client: Client,
    access_token: String,
    last_request: Mutex<Instant>,
}

impl GeniusClient {
    pub fn new(access_token: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("lyrics-search/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            access_token: access_token.to_string(),
            last_request: Mutex::new(Instant::now() - RATE_LIMIT_INTERVAL),
        })
    }

    fn rate_limit(&self) {
        let mut last = self
            .last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let elapsed = last.elapsed();
        if elapsed < RATE_LIMIT_INTERVAL {
            std::thread::sleep(RATE_LIMIT_INTERVAL - elapsed);
        }
        *last = Instant::now();
    }

    fn api_get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        self.rate_limit();

        let url = format!("{}{}", GENIUS_API_BASE, path);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()?;

        if !response.status().is_success() {
            bail!("Genius API {} failed with status {}", path, response.status());
        }

        let body: ApiResponse<T> = response.json()?;
        Ok(body.response)
    }

    pub fn find_artist(&self, name: &str) -> Result<Option<GeniusArtist>> {
        let search: SearchResponse = self.api_get("/search", &[("q", name.to_string())])?;
        Ok(pick_artist(search.hits, name))
    }

    /// Lists the artist's own songs, most popular first.
    pub fn artist_songs(&self, artist_id: u64, max_songs: usize) -> Result<Vec<GeniusSong>> {
        let mut songs = Vec::new();
        let mut page = Some(1u32);

        while let Some(current_page) = page {
            if songs.len() >= max_songs {
                break;
            }
            let response: ArtistSongsResponse = self.api_get(
                &format!("/artists/{}/songs", artist_id),
                &[
                    ("per_page", SONGS_PAGE_SIZE.to_string()),
                    ("page", current_page.to_string()),
                    ("sort", "popularity".to_string()),
                ],
            )?;

            songs.extend(
                response
                    .songs
                    .into_iter()
                    .filter(|s| s.primary_artist.id == artist_id),
            );
            page = response.next_page;
        }

        songs.truncate(max_songs);
        Ok(songs)
    }

    pub fn song_album(&self, song_id: u64) -> Result<Option<String>> {
        let response: SongResponse = self.api_get(&format!("/songs/{}", song_id), &[])?;
        Ok(response.song.album.map(|a| a.name))
    }

    /// Downloads a song page and extracts its lyrics.
    pub fn song_lyrics(&self, song_url: &str) -> Result<Option<String>> {
        self.rate_limit();

        let response = self.client.get(song_url).send()?;
        if !response.status().is_success() {
            bail!("Lyrics page {} failed with status {}", song_url, response.status());
        }
        let html = response.text()?;
        Ok(extract_lyrics(&html))
    }
}
