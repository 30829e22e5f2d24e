//! Service trait for blog record storage

use crate::core::blog::Blog;
use crate::core::error::BlogResult;
use async_trait::async_trait;
use uuid::Uuid;

/// Service trait for managing blog records
///
/// Implementations provide CRUD operations over [`Blog`]s. The HTTP layer is
/// agnostic to the underlying storage mechanism.
#[async_trait]
pub trait BlogService: Send + Sync {
    /// Store a new blog
    async fn create(&self, blog: Blog) -> BlogResult<Blog>;

    /// Get a blog by ID
    async fn get(&self, id: &Uuid) -> BlogResult<Option<Blog>>;

    /// List all blogs, in insertion order
    async fn list(&self) -> BlogResult<Vec<Blog>>;

    /// Replace an existing blog
    ///
    /// The stored record keeps `id`; whatever id `blog` carries is overwritten.
    /// Fails with [`BlogError::NotFound`](crate::core::BlogError::NotFound)
    /// when no blog has this id.
    async fn update(&self, id: &Uuid, blog: Blog) -> BlogResult<Blog>;

    /// Delete a blog
    ///
    /// Fails with [`BlogError::NotFound`](crate::core::BlogError::NotFound)
    /// when no blog has this id.
    async fn delete(&self, id: &Uuid) -> BlogResult<()>;
}
