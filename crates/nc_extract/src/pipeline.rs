use std::sync::Arc;

use futures::future::join_all;
use nc_analyze::TagExtractor;
use nc_core::{ArticleStore, Error, Language, NewArticle, Result, SimilarArticle, TagCount};
use nc_inference::{Session, Summarizer};
use serde::Serialize;
use tracing::{info, warn};

use crate::fetch::Fetcher;
use crate::scan;
use crate::select;
use crate::title;

/// Minimum length for pasted-text input.
const MIN_TEXT_CHARS: usize = 50;
const TOP_TAGS: usize = 5;
const RELATED_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct ProcessedNews {
    pub url: String,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub stored: bool,
    pub related: Vec<SimilarArticle>,
}

/// Orchestrates extraction, tagging, summarization and persistence for one
/// submission. Extraction failures propagate so the caller can fall back to
/// manual entry; storage failures are absorbed here and reported as
/// `stored: false`.
pub struct Pipeline {
    fetcher: Fetcher,
    analyzer: TagExtractor,
    summarizer: Summarizer,
    store: Arc<dyn ArticleStore>,
}

impl Pipeline {
    pub fn new(
        analyzer: TagExtractor,
        summarizer: Summarizer,
        store: Arc<dyn ArticleStore>,
    ) -> Result<Self> {
        Ok(Self {
            fetcher: Fetcher::new()?,
            analyzer,
            summarizer,
            store,
        })
    }

    /// Process a URL or pasted article text into a stored, summarized
    /// article with related recommendations.
    pub async fn process(&self, input: &str, language: Language) -> Result<ProcessedNews> {
        let input = input.trim();

        let (url, title, content) = if input.starts_with("http://") || input.starts_with("https://")
        {
            info!("📰 Extracting article from {}", input);
            let markup = self.fetcher.fetch(input).await?;
            let body = select::select(&scan::scan(&markup));
            if body.is_empty() {
                return Err(Error::Extraction(format!(
                    "no article content found at {}",
                    input
                )));
            }
            (input.to_string(), title::extract_title(&markup), body)
        } else {
            if input.chars().count() < MIN_TEXT_CHARS {
                return Err(Error::Extraction(format!(
                    "input text too short, need at least {} characters",
                    MIN_TEXT_CHARS
                )));
            }
            (String::new(), String::new(), input.to_string())
        };

        let tags = self.analyzer.extract_tags(&content, &title, TOP_TAGS);

        let mut session = Session::new();
        let summary = self.summarizer.summarize(&content, language, &mut session).await;

        let article = NewArticle {
            url,
            title,
            content,
            summary,
            tags,
        };
        let stored = match self.store.upsert(&article).await {
            Ok(()) => true,
            Err(e) => {
                warn!("failed to store article: {}", e);
                false
            }
        };

        let related: Vec<SimilarArticle> = self
            .recommendations(&article.tags, RELATED_LIMIT)
            .await
            .into_iter()
            .filter(|a| a.url != article.url)
            .collect();

        Ok(ProcessedNews {
            url: article.url,
            title: article.title,
            content: article.content,
            summary: article.summary,
            tags: article.tags,
            stored,
            related,
        })
    }

    /// Process several submissions concurrently. Each input succeeds or
    /// fails on its own.
    pub async fn process_many(
        &self,
        inputs: &[String],
        language: Language,
    ) -> Vec<Result<ProcessedNews>> {
        let futures: Vec<_> = inputs
            .iter()
            .map(|input| self.process(input, language))
            .collect();
        join_all(futures).await
    }

    /// Stored articles sharing tags with the query. Storage errors are
    /// logged and surfaced as an empty list.
    pub async fn recommendations(&self, tags: &[String], limit: usize) -> Vec<SimilarArticle> {
        if tags.is_empty() {
            return Vec::new();
        }
        match self.store.similar(tags, limit).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!("failed to query similar articles: {}", e);
                Vec::new()
            }
        }
    }

    /// Most frequent tags. Storage errors are logged and surfaced as an
    /// empty list.
    pub async fn popular_tags(&self, limit: usize) -> Vec<TagCount> {
        match self.store.popular_tags(limit).await {
            Ok(tags) => tags,
            Err(e) => {
                warn!("failed to query popular tags: {}", e);
                Vec::new()
            }
        }
    }
}
