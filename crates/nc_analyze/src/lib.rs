pub mod extractor;
pub mod idf;
pub mod stopwords;
pub mod tagger;

pub use extractor::TagExtractor;
pub use tagger::{HeuristicTagger, PosTag, TaggedWord, Tagger};

pub mod prelude {
    pub use crate::extractor::TagExtractor;
    pub use crate::tagger::{HeuristicTagger, PosTag, TaggedWord, Tagger};
}
