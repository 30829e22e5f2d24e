//! Storage implementations for the blog service

pub mod in_memory;

pub use in_memory::InMemoryBlogService;
