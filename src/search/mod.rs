mod line_search;
mod partial_ratio;

pub use line_search::{search, LyricMatch, MATCH_THRESHOLD};
pub use partial_ratio::{indel_ratio, partial_ratio, partial_ratio_cutoff};
