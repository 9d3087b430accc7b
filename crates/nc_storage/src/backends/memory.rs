use async_trait::async_trait;
use chrono::Utc;
use nc_core::{tag_overlap, Article, ArticleStore, NewArticle, Result, SimilarArticle, TagCount};
use tokio::sync::RwLock;

struct MemoryInner {
    articles: Vec<Article>,
    counters: Vec<TagCount>,
    next_id: i64,
}

/// In-memory store, mostly for tests and API-less runs. A single write
/// lock region per upsert keeps the article write and the counter updates
/// atomic with respect to readers.
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemoryInner {
                articles: Vec::new(),
                counters: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleStore for MemoryStore {
    async fn upsert(&self, article: &NewArticle) -> Result<()> {
        let mut inner = self.inner.write().await;
        let timestamp = Utc::now();

        match inner.articles.iter().position(|a| a.url == article.url) {
            Some(index) => {
                let existing = &mut inner.articles[index];
                existing.title = article.title.clone();
                existing.content = article.content.clone();
                existing.summary = article.summary.clone();
                existing.tags = article.tags.clone();
                existing.timestamp = timestamp;
            }
            None => {
                let id = inner.next_id;
                inner.next_id += 1;
                inner.articles.push(Article {
                    id,
                    url: article.url.clone(),
                    title: article.title.clone(),
                    content: article.content.clone(),
                    summary: article.summary.clone(),
                    tags: article.tags.clone(),
                    timestamp,
                });
            }
        }

        // Every occurrence counts, including repeats within one call.
        for tag in &article.tags {
            match inner.counters.iter().position(|c| c.name == *tag) {
                Some(index) => inner.counters[index].count += 1,
                None => inner.counters.push(TagCount {
                    name: tag.clone(),
                    count: 1,
                }),
            }
        }

        Ok(())
    }

    async fn similar(&self, tags: &[String], limit: usize) -> Result<Vec<SimilarArticle>> {
        let inner = self.inner.read().await;
        let mut matches: Vec<SimilarArticle> = inner
            .articles
            .iter()
            .filter_map(|article| {
                let relevance = tag_overlap(tags, &article.tags);
                (relevance > 0).then(|| SimilarArticle {
                    id: article.id,
                    url: article.url.clone(),
                    title: article.title.clone(),
                    summary: article.summary.clone(),
                    tags: article.tags.clone(),
                    timestamp: article.timestamp,
                    relevance,
                })
            })
            .collect();

        matches.sort_by(|a, b| {
            b.relevance
                .cmp(&a.relevance)
                .then(b.timestamp.cmp(&a.timestamp))
        });
        matches.truncate(limit);
        Ok(matches)
    }

    async fn popular_tags(&self, limit: usize) -> Result<Vec<TagCount>> {
        let inner = self.inner.read().await;
        let mut counters = inner.counters.clone();
        counters.sort_by(|a, b| b.count.cmp(&a.count));
        counters.truncate(limit);
        Ok(counters)
    }
}
