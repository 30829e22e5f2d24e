//! Blog HTTP handlers

use super::extractor::ValidatedJson;
use crate::core::{
    Blog, BlogError, BlogResult, BlogService, BlogSummary, NewBlog, ValidationError, aggregate,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use uuid::Uuid;

/// Shared state for the blog routes
#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<dyn BlogService>,
}

impl AppState {
    pub fn new(blog_service: Arc<dyn BlogService>) -> Self {
        Self { blog_service }
    }
}

fn parse_id(raw: &str) -> BlogResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| {
        ValidationError::InvalidUuid {
            value: raw.to_string(),
        }
        .into()
    })
}

/// GET /api/blogs
pub async fn list_blogs(State(state): State<AppState>) -> BlogResult<Json<Vec<Blog>>> {
    Ok(Json(state.blog_service.list().await?))
}

/// GET /api/blogs/{id}
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> BlogResult<Json<Blog>> {
    let id = parse_id(&id)?;
    state
        .blog_service
        .get(&id)
        .await?
        .map(Json)
        .ok_or(BlogError::NotFound { id })
}

/// POST /api/blogs
pub async fn create_blog(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewBlog>,
) -> BlogResult<(StatusCode, Json<Blog>)> {
    let blog = state.blog_service.create(Blog::from_new(payload)).await?;
    tracing::info!(id = %blog.id, title = %blog.title, "blog added");
    Ok((StatusCode::CREATED, Json(blog)))
}

/// PUT /api/blogs/{id}
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<NewBlog>,
) -> BlogResult<Json<Blog>> {
    let id = parse_id(&id)?;

    let mut blog = state
        .blog_service
        .get(&id)
        .await?
        .ok_or(BlogError::NotFound { id })?;
    blog.apply(payload);

    Ok(Json(state.blog_service.update(&id, blog).await?))
}

/// DELETE /api/blogs/{id}
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> BlogResult<StatusCode> {
    let id = parse_id(&id)?;
    state.blog_service.delete(&id).await?;
    tracing::info!(id = %id, "blog deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/blogs/summary
pub async fn blog_summary(State(state): State<AppState>) -> BlogResult<Json<BlogSummary>> {
    let blogs = state.blog_service.list().await?;
    Ok(Json(aggregate::summarize(&blogs)))
}
