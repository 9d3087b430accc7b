use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use nc_core::{tag_overlap, ArticleStore, Error, NewArticle, Result, SimilarArticle, TagCount};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use sqlx::Row;

const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS articles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        url TEXT UNIQUE,
        title TEXT,
        content TEXT,
        summary TEXT,
        tags TEXT,
        timestamp TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS tags (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT UNIQUE,
        count INTEGER DEFAULT 1
    )
    "#,
];

/// SQLite-backed store. Tags are held as a JSON array column; the counter
/// table mirrors every tag occurrence across upserts.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn new_with_path(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| Error::Storage(format!("failed to open database: {}", e)))?;

        for (i, migration) in MIGRATIONS.iter().enumerate() {
            sqlx::query(migration)
                .execute(&pool)
                .await
                .map_err(|e| Error::Storage(format!("failed to run migration {}: {}", i, e)))?;
        }

        Ok(Self { pool })
    }
}

#[async_trait]
impl ArticleStore for SqliteStore {
    async fn upsert(&self, article: &NewArticle) -> Result<()> {
        let tags = serde_json::to_string(&article.tags)?;
        let timestamp = Utc::now().to_rfc3339();

        // One transaction covers the article row and every counter update.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Error::Storage(format!("failed to begin transaction: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO articles (url, title, content, summary, tags, timestamp)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(url) DO UPDATE SET
                title = excluded.title,
                content = excluded.content,
                summary = excluded.summary,
                tags = excluded.tags,
                timestamp = excluded.timestamp
            "#,
        )
        .bind(&article.url)
        .bind(&article.title)
        .bind(&article.content)
        .bind(&article.summary)
        .bind(&tags)
        .bind(&timestamp)
        .execute(&mut *tx)
        .await
        .map_err(|e| Error::Storage(format!("failed to store article: {}", e)))?;

        for tag in &article.tags {
            sqlx::query(
                "INSERT INTO tags (name) VALUES (?) ON CONFLICT(name) DO UPDATE SET count = count + 1",
            )
            .bind(tag)
            .execute(&mut *tx)
            .await
            .map_err(|e| Error::Storage(format!("failed to update tag counter: {}", e)))?;
        }

        tx.commit()
            .await
            .map_err(|e| Error::Storage(format!("failed to commit upsert: {}", e)))?;

        Ok(())
    }

    async fn similar(&self, tags: &[String], limit: usize) -> Result<Vec<SimilarArticle>> {
        let rows = sqlx::query("SELECT id, url, title, summary, tags, timestamp FROM articles")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Error::Storage(format!("failed to query articles: {}", e)))?;

        let mut matches = Vec::new();
        for row in rows {
            let tags_json: String = row.get("tags");
            let article_tags: Vec<String> = serde_json::from_str(&tags_json)?;
            let relevance = tag_overlap(tags, &article_tags);
            if relevance == 0 {
                continue;
            }

            let timestamp: String = row.get("timestamp");
            let timestamp = DateTime::parse_from_rfc3339(&timestamp)
                .map_err(|e| Error::Storage(format!("failed to parse timestamp: {}", e)))?
                .with_timezone(&Utc);

            matches.push(SimilarArticle {
                id: row.get("id"),
                url: row.get("url"),
                title: row.get("title"),
                summary: row.get("summary"),
                tags: article_tags,
                timestamp,
                relevance,
            });
        }

        matches.sort_by(|a, b| {
            b.relevance
                .cmp(&a.relevance)
                .then(b.timestamp.cmp(&a.timestamp))
        });
        matches.truncate(limit);
        Ok(matches)
    }

    async fn popular_tags(&self, limit: usize) -> Result<Vec<TagCount>> {
        let rows = sqlx::query("SELECT name, count FROM tags ORDER BY count DESC LIMIT ?")
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Error::Storage(format!("failed to query tags: {}", e)))?;

        Ok(rows
            .into_iter()
            .map(|row| TagCount {
                name: row.get("name"),
                count: row.get::<i64, _>("count") as u64,
            })
            .collect())
    }
}
