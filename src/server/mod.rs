//! HTTP server for the blog API
//!
//! `ServerBuilder` wires a [`BlogService`](crate::core::BlogService) into:
//! - CRUD routes under `/api/blogs`
//! - the `/api/blogs/summary` aggregate route
//! - health check routes

pub mod builder;
pub mod extractor;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use extractor::ValidatedJson;
pub use handlers::AppState;
