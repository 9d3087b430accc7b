use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/news", post(handlers::process_news))
        .route("/api/news/similar", get(handlers::similar_news))
        .route("/api/tags/popular", get(handlers::popular_tags))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::create_app;
    pub use crate::AppState;
    pub use nc_core::{Error, Result};
}
