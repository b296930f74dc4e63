use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Storage-assigned post identifier.
pub type PostId = i64;

/// A blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// Set on creation and refreshed on every edit.
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Human readable timestamp used by the list page.
    pub fn created_at_label(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Form payload shared by the create and edit routes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostInput {
    pub title: String,
    pub content: String,
}

impl PostInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
