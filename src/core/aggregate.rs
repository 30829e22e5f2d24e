//! Summary statistics over a list of blogs
//!
//! All helpers are pure and total: they never fail, and "no result" (empty
//! input) is always `None`. When several candidates share the maximum, the
//! first one encountered wins.
//!
//! ```rust
//! use bloglist::core::{NewBlog, aggregate};
//!
//! let blogs = vec![
//!     NewBlog::new("React patterns", "Michael Chan", "https://reactpatterns.com/", 7),
//!     NewBlog::new("Go To", "Edsger W. Dijkstra", "http://example.com/goto", 5),
//!     NewBlog::new("Canonical string reduction", "Edsger W. Dijkstra", "http://example.com/ewd", 12),
//! ];
//!
//! assert_eq!(aggregate::total_likes(&blogs), 24);
//! assert_eq!(aggregate::most_likes(&blogs).unwrap().likes, 17);
//! ```

use crate::core::blog::Likeable;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The favorite blog projected to the fields worth reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteBlog {
    pub title: String,
    pub author: String,
    pub likes: u64,
}

/// Author with the most blogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorBlogs {
    pub author: String,
    pub blogs: u64,
}

/// Author with the most likes across all their blogs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: u64,
}

/// All four statistics in one response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogSummary {
    pub count: usize,
    pub total_likes: u64,
    pub favorite_blog: Option<FavoriteBlog>,
    pub most_blogs: Option<AuthorBlogs>,
    pub most_likes: Option<AuthorLikes>,
}

/// Per-author running tallies, in first-occurrence order
#[derive(Debug, Default)]
pub struct AuthorTally<'a> {
    tallies: IndexMap<&'a str, u64>,
}

impl<'a> AuthorTally<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to `author`'s tally, registering the author if unseen
    pub fn add(&mut self, author: &'a str, amount: u64) {
        let tally = self.tallies.entry(author).or_insert(0);
        *tally = tally.saturating_add(amount);
    }

    /// The author with the highest tally; earliest-seen author on ties
    pub fn leader(&self) -> Option<(&'a str, u64)> {
        let mut leader: Option<(&'a str, u64)> = None;
        for (&author, &tally) in &self.tallies {
            match leader {
                Some((_, best)) if tally <= best => {}
                _ => leader = Some((author, tally)),
            }
        }
        leader
    }
}

/// Sum of likes over all blogs
pub fn total_likes<B: Likeable>(blogs: &[B]) -> u64 {
    blogs
        .iter()
        .fold(0u64, |acc, blog| acc.saturating_add(blog.likes()))
}

/// The blog with the most likes
pub fn favorite_blog<B: Likeable>(blogs: &[B]) -> Option<FavoriteBlog> {
    let mut favorite: Option<&B> = None;
    for blog in blogs {
        match favorite {
            Some(best) if blog.likes() <= best.likes() => {}
            _ => favorite = Some(blog),
        }
    }

    favorite.map(|blog| FavoriteBlog {
        title: blog.title().to_string(),
        author: blog.author().to_string(),
        likes: blog.likes(),
    })
}

/// The author who wrote the most blogs
pub fn most_blogs<B: Likeable>(blogs: &[B]) -> Option<AuthorBlogs> {
    let mut tally = AuthorTally::new();
    for blog in blogs {
        tally.add(blog.author(), 1);
    }

    tally.leader().map(|(author, blogs)| AuthorBlogs {
        author: author.to_string(),
        blogs,
    })
}

/// The author whose blogs have the most likes in total
pub fn most_likes<B: Likeable>(blogs: &[B]) -> Option<AuthorLikes> {
    let mut tally = AuthorTally::new();
    for blog in blogs {
        tally.add(blog.author(), blog.likes());
    }

    tally.leader().map(|(author, likes)| AuthorLikes {
        author: author.to_string(),
        likes,
    })
}

/// Compute every statistic at once
pub fn summarize<B: Likeable>(blogs: &[B]) -> BlogSummary {
    BlogSummary {
        count: blogs.len(),
        total_likes: total_likes(blogs),
        favorite_blog: favorite_blog(blogs),
        most_blogs: most_blogs(blogs),
        most_likes: most_likes(blogs),
    }
}
