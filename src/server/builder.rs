//! ServerBuilder for fluent API to build HTTP servers

use super::handlers::AppState;
use super::router::{build_blog_routes, health_routes};
use crate::core::BlogService;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builder for the blog-list HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_blog_service(InMemoryBlogService::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    blog_service: Option<Arc<dyn BlogService>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            blog_service: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the blog service (required)
    pub fn with_blog_service(mut self, service: impl BlogService + 'static) -> Self {
        self.blog_service = Some(Arc::new(service));
        self
    }

    /// Add custom routes to the server
    ///
    /// Use this for endpoints outside the blog CRUD, such as a login route
    /// backed by an external credential service.
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the final router
    ///
    /// Health routes, blog routes and custom routes, all wrapped in a
    /// request-logging `TraceLayer`.
    pub fn build(self) -> Result<Router> {
        let blog_service = self
            .blog_service
            .ok_or_else(|| anyhow::anyhow!("BlogService is required. Call .with_blog_service()"))?;

        let mut app = health_routes().merge(build_blog_routes(AppState::new(blog_service)));
        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds `addr` and serves until SIGTERM or Ctrl+C.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
