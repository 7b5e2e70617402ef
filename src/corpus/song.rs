/// A single track of the corpus, normalized to one field convention
/// regardless of the shape of the file it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Song {
    pub title: String,
    pub album: Option<String>,
    pub lyrics: String,
}

impl Song {
    pub fn new<T, L>(title: T, album: Option<String>, lyrics: L) -> Song
    where
        T: Into<String>,
        L: Into<String>,
    {
        Song {
            title: title.into(),
            album,
            lyrics: lyrics.into(),
        }
    }

    /// Splits the lyrics on newline boundaries. Empty lines are kept, so an
    /// empty lyric text still yields one (empty) line.
    pub fn split_lines(&self) -> Vec<String> {
        self.lyrics.split('\n').map(str::to_owned).collect()
    }
}

/// One lyric line, the unit the search scans over.
///
/// `song_index` points back into the corpus songs, `line_index` is the
/// position of the line inside that song.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineRecord {
    pub line: String,
    pub title: String,
    pub album: Option<String>,
    pub song_index: usize,
    pub line_index: usize,
}
