use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use nc_core::{Language, SimilarArticle, TagCount};
use nc_extract::ProcessedNews;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::AppState;

const DEFAULT_SIMILAR_LIMIT: usize = 5;
const DEFAULT_TAG_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    pub input: String,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Process a URL or pasted text. Extraction failures come back as 422 with
/// an error body, so the client can fall back to manual entry.
pub async fn process_news(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProcessRequest>,
) -> Result<Json<ProcessedNews>, (StatusCode, Json<ErrorBody>)> {
    let language = Language::from_code(request.language.as_deref().unwrap_or_default());
    match state.pipeline.process(&request.input, language).await {
        Ok(processed) => Ok(Json(processed)),
        Err(e) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorBody {
                error: e.to_string(),
            }),
        )),
    }
}

#[derive(Debug, Deserialize)]
pub struct SimilarParams {
    /// Comma-separated tag list.
    pub tags: String,
    pub limit: Option<usize>,
}

pub async fn similar_news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SimilarParams>,
) -> Json<Vec<SimilarArticle>> {
    let tags: Vec<String> = params
        .tags
        .split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect();
    let limit = params.limit.unwrap_or(DEFAULT_SIMILAR_LIMIT);
    Json(state.pipeline.recommendations(&tags, limit).await)
}

#[derive(Debug, Deserialize)]
pub struct TagParams {
    pub limit: Option<usize>,
}

pub async fn popular_tags(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TagParams>,
) -> Json<Vec<TagCount>> {
    let limit = params.limit.unwrap_or(DEFAULT_TAG_LIMIT);
    Json(state.pipeline.popular_tags(limit).await)
}
