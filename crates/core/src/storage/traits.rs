use async_trait::async_trait;

use crate::post::{Post, PostId, PostInput};

use super::Result;

/// Repository for blog post operations.
///
/// Each method is a single statement against the backing store.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Lists every post, newest first.
    async fn list_posts(&self) -> Result<Vec<Post>>;

    /// Gets a post by its ID.
    async fn get_post(&self, id: PostId) -> Result<Option<Post>>;

    /// Creates a post stamped with the current time and returns it with its
    /// assigned ID.
    async fn create_post(&self, input: &PostInput) -> Result<Post>;

    /// Overwrites title, content and timestamp of an existing post.
    ///
    /// Returns `false` when no post has the given ID.
    async fn update_post(&self, id: PostId, input: &PostInput) -> Result<bool>;

    /// Deletes a post by its ID.
    ///
    /// Returns `false` when no post has the given ID.
    async fn delete_post(&self, id: PostId) -> Result<bool>;
}
