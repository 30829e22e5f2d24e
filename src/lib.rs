//! # bloglist
//!
//! A small blog-list REST service with aggregation helpers.
//!
//! ## Features
//!
//! - **Aggregation**: total likes, favorite blog, author with most blogs,
//!   author with most likes ([`core::aggregate`])
//! - **CRUD API**: `/api/blogs` routes on axum with validated payloads
//! - **Pluggable storage**: any [`core::BlogService`]; an in-memory one ships
//! - **Typed errors**: every failure maps to an HTTP status and JSON body
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bloglist::prelude::*;
//!
//! let service = InMemoryBlogService::new();
//! service.create(Blog::from_new(NewBlog::new(
//!     "React patterns",
//!     "Michael Chan",
//!     "https://reactpatterns.com/",
//!     7,
//! ))).await?;
//!
//! ServerBuilder::new()
//!     .with_blog_service(service)
//!     .serve("127.0.0.1:3003")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod logging;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        AuthorBlogs, AuthorLikes, Blog, BlogError, BlogResult, BlogService, BlogSummary,
        FavoriteBlog, Likeable, NewBlog, aggregate,
        aggregate::{favorite_blog, most_blogs, most_likes, summarize, total_likes},
    };

    // === Storage ===
    pub use crate::storage::InMemoryBlogService;

    // === Config ===
    pub use crate::config::{AppConfig, LogConfig, ServerConfig};
    pub use crate::logging::init_tracing;

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder, ValidatedJson};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use uuid::Uuid;
}
