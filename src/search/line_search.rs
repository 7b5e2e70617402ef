use super::partial_ratio_cutoff;
use crate::corpus::{Corpus, LineRecord};
use serde::{Deserialize, Serialize};

/// Minimum partial similarity score for a line to be returned. Compared
/// against the unrounded score.
pub const MATCH_THRESHOLD: f64 = 90.0;

/// A matched line with its neighbours inside the same song.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct LyricMatch {
    pub title: String,
    pub album: Option<String>,
    pub before: String,
    #[serde(rename = "match")]
    pub line: String,
    pub after: String,
}

fn is_match(score: f64) -> bool {
    score >= MATCH_THRESHOLD
}

fn to_lyric_match(corpus: &Corpus, record: &LineRecord) -> LyricMatch {
    let song_lines = corpus.song_lines(record.song_index).unwrap_or_default();

    let before = match record.line_index {
        0 => String::new(),
        i => song_lines.get(i - 1).cloned().unwrap_or_default(),
    };
    let after = song_lines
        .get(record.line_index + 1)
        .cloned()
        .unwrap_or_default();

    LyricMatch {
        title: record.title.clone(),
        album: record.album.clone(),
        before,
        line: record.line.clone(),
        after,
    }
}

/// Scans every line of the corpus and returns the ones whose partial
/// similarity with `query` reaches [`MATCH_THRESHOLD`], in corpus order.
///
/// Comparison is case-insensitive, returned text keeps its original casing.
pub fn search(corpus: &Corpus, query: &str) -> Vec<LyricMatch> {
    let query = query.to_lowercase();

    corpus
        .lines()
        .iter()
        .filter(|record| {
            is_match(partial_ratio_cutoff(
                &query,
                &record.line.to_lowercase(),
                MATCH_THRESHOLD,
            ))
        })
        .map(|record| to_lyric_match(corpus, record))
        .collect()
}
