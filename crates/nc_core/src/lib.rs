pub mod error;
pub mod language;
pub mod store;
pub mod types;

pub use error::Error;
pub use language::Language;
pub use store::ArticleStore;
pub use types::{tag_overlap, Article, NewArticle, SimilarArticle, TagCount};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::error::Error;
    pub use crate::language::Language;
    pub use crate::store::ArticleStore;
    pub use crate::types::{Article, NewArticle, SimilarArticle, TagCount};
    pub use crate::Result;
}
