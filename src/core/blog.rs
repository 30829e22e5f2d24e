//! Blog record and request payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Read access to the fields the aggregator cares about.
///
/// Implemented by both the stored [`Blog`] and the [`NewBlog`] payload so the
/// helpers in [`aggregate`](crate::core::aggregate) work on either.
pub trait Likeable {
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn likes(&self) -> u64;
}

/// A stored blog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    /// Build a stored record from a validated payload, assigning a fresh id
    pub fn from_new(new: NewBlog) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: new.title,
            author: new.author,
            url: new.url,
            likes: new.likes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields, keeping id and creation time
    pub fn apply(&mut self, new: NewBlog) {
        self.title = new.title;
        self.author = new.author;
        self.url = new.url;
        self.likes = new.likes;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Likeable for Blog {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn likes(&self) -> u64 {
        self.likes
    }
}

/// Payload for creating or replacing a blog.
///
/// `title` and `url` are required; a missing field deserializes to an empty
/// string and is then rejected by validation. `likes` defaults to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewBlog {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "url is required"))]
    pub url: String,

    #[serde(default)]
    pub likes: u64,
}

impl NewBlog {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
        likes: u64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url: url.into(),
            likes,
        }
    }
}

impl Likeable for NewBlog {
    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn likes(&self) -> u64 {
        self.likes
    }
}
