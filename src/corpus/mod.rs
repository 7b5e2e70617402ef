mod corpus;
mod error;
mod load;
mod schema;
mod song;

pub use corpus::Corpus;
pub use error::CorpusError;
pub use load::load_corpus;
pub use schema::{CorpusFormat, CorpusSchema};
pub use song::{LineRecord, Song};
