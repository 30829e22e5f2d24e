//! Blog-list server
//!
//! Loads `bloglist.yaml` (or the path given as first argument) when present,
//! seeds the in-memory store and serves the API.
//!
//! ```text
//! cargo run --example blog_server -- demos/blog_server/bloglist.yaml
//! ```

use anyhow::Result;
use bloglist::prelude::*;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("bloglist.yaml"));

    let config = if path.exists() {
        AppConfig::from_yaml_file(&path)?
    } else {
        AppConfig::default()
    }
    .with_env_overrides()?;

    init_tracing(&config.log);

    let service = InMemoryBlogService::with_blogs(config.seed.iter().cloned().map(Blog::from_new));
    let blogs = service.list().await?;
    tracing::info!(
        blogs = blogs.len(),
        total_likes = total_likes(&blogs),
        "seeded blog store"
    );

    ServerBuilder::new()
        .with_blog_service(service)
        .serve(&config.addr())
        .await
}
