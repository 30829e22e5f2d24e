//! Core types: the blog record, the aggregation helpers, errors and the
//! storage trait

pub mod aggregate;
pub mod blog;
pub mod error;
pub mod service;

pub use aggregate::{AuthorBlogs, AuthorLikes, AuthorTally, BlogSummary, FavoriteBlog};
pub use blog::{Blog, Likeable, NewBlog};
pub use error::{
    BlogError, BlogResult, ConfigError, ErrorResponse, FieldValidationError, StorageError,
    ValidationError,
};
pub use service::BlogService;
