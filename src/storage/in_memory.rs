//! In-memory implementation of BlogService for testing and development

use crate::core::{Blog, BlogError, BlogResult, BlogService, StorageError};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

const BACKEND: &str = "in-memory";

/// In-memory blog service implementation
///
/// Uses RwLock for thread-safe access. Records keep their insertion order so
/// listings, and the aggregates computed from them, are stable.
#[derive(Clone)]
pub struct InMemoryBlogService {
    blogs: Arc<RwLock<IndexMap<Uuid, Blog>>>,
}

impl InMemoryBlogService {
    /// Create an empty in-memory blog service
    pub fn new() -> Self {
        Self {
            blogs: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a service pre-populated with `blogs`
    pub fn with_blogs(blogs: impl IntoIterator<Item = Blog>) -> Self {
        let map = blogs.into_iter().map(|blog| (blog.id, blog)).collect();
        Self {
            blogs: Arc::new(RwLock::new(map)),
        }
    }

    fn read(&self) -> BlogResult<RwLockReadGuard<'_, IndexMap<Uuid, Blog>>> {
        self.blogs.read().map_err(|e| {
            StorageError::LockPoisoned {
                backend: BACKEND.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    fn write(&self) -> BlogResult<RwLockWriteGuard<'_, IndexMap<Uuid, Blog>>> {
        self.blogs.write().map_err(|e| {
            StorageError::LockPoisoned {
                backend: BACKEND.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for InMemoryBlogService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogService for InMemoryBlogService {
    async fn create(&self, blog: Blog) -> BlogResult<Blog> {
        let mut blogs = self.write()?;
        blogs.insert(blog.id, blog.clone());
        tracing::debug!(id = %blog.id, title = %blog.title, "blog created");
        Ok(blog)
    }

    async fn get(&self, id: &Uuid) -> BlogResult<Option<Blog>> {
        Ok(self.read()?.get(id).cloned())
    }

    async fn list(&self) -> BlogResult<Vec<Blog>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn update(&self, id: &Uuid, mut updated: Blog) -> BlogResult<Blog> {
        let mut blogs = self.write()?;
        let slot = blogs.get_mut(id).ok_or(BlogError::NotFound { id: *id })?;
        // the map key is authoritative
        updated.id = *id;
        *slot = updated.clone();
        tracing::debug!(id = %id, "blog updated");
        Ok(updated)
    }

    async fn delete(&self, id: &Uuid) -> BlogResult<()> {
        let mut blogs = self.write()?;
        // shift_remove keeps the remaining records in insertion order
        blogs
            .shift_remove(id)
            .ok_or(BlogError::NotFound { id: *id })?;
        tracing::debug!(id = %id, "blog deleted");
        Ok(())
    }
}
