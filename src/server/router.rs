//! Route table for the blog API

use super::handlers::{
    AppState, blog_summary, create_blog, delete_blog, get_blog, list_blogs, update_blog,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Build the blog routes
///
/// - GET    /api/blogs          - List all blogs
/// - POST   /api/blogs          - Add a blog
/// - GET    /api/blogs/summary  - Aggregate statistics over all blogs
/// - GET    /api/blogs/{id}     - Get a blog
/// - PUT    /api/blogs/{id}     - Replace a blog
/// - DELETE /api/blogs/{id}     - Delete a blog
pub fn build_blog_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/blogs", get(list_blogs).post(create_blog))
        .route("/api/blogs/summary", get(blog_summary))
        .route(
            "/api/blogs/{id}",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
        .with_state(state)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "bloglist"
    }))
}
