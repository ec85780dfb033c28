use crate::domain::post::{PostFilter, UpdatePostRequest};
use crate::domain::{DomainError, Post};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fails with `AuthorNotFound` when `post.author_id` names no user.
    async fn create(&self, post: Post) -> Result<Post, DomainError>;
    /// Increments `views` and returns the updated post.
    async fn record_view(&self, id: Uuid) -> Result<Post, DomainError>;
    async fn update(&self, id: Uuid, req: UpdatePostRequest) -> Result<Post, DomainError>;
    /// Removes the post together with its comments. Returns how many comments went with it.
    async fn delete(&self, id: Uuid) -> Result<usize, DomainError>;
    async fn increment_likes(&self, id: Uuid) -> Result<Post, DomainError>;
    async fn list(
        &self,
        filter: &PostFilter,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Post>, DomainError>;
    /// `needle` must be lowercase.
    async fn search(
        &self,
        needle: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Post>, DomainError>;
}
