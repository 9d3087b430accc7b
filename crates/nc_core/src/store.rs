use async_trait::async_trait;

use crate::types::{NewArticle, SimilarArticle, TagCount};
use crate::Result;

#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Insert or replace an article keyed by url, refreshing its timestamp
    /// and incrementing one tag counter per tag occurrence. The article
    /// write and all counter updates are applied atomically.
    async fn upsert(&self, article: &NewArticle) -> Result<()>;

    /// Articles sharing at least one tag with `tags`, ordered by shared tag
    /// count descending, then most recent first.
    async fn similar(&self, tags: &[String], limit: usize) -> Result<Vec<SimilarArticle>>;

    /// Tag counters ordered by count descending.
    async fn popular_tags(&self, limit: usize) -> Result<Vec<TagCount>>;
}
