use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A stored article as the storage layer returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Input record for an upsert. The store assigns id and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewArticle {
    pub url: String,
    pub title: String,
    pub content: String,
    pub summary: String,
    pub tags: Vec<String>,
}

/// A similarity query result. `relevance` is the number of tags shared
/// with the query tag set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarArticle {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub timestamp: DateTime<Utc>,
    pub relevance: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub count: u64,
}

/// Number of tags shared between a query tag set and an article's tags.
/// Set semantics: repeated tags on either side count once.
pub fn tag_overlap(query: &[String], tags: &[String]) -> usize {
    let query: HashSet<&str> = query.iter().map(|t| t.as_str()).collect();
    let tags: HashSet<&str> = tags.iter().map(|t| t.as_str()).collect();
    query.intersection(&tags).count()
}
