use crate::domain::{Comment, DomainError};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Fails with `PostNotFound` or `AuthorNotFound` when a reference is dangling.
    async fn create(&self, comment: Comment) -> Result<Comment, DomainError>;
    async fn list_for_post(
        &self,
        post_id: Uuid,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Comment>, DomainError>;
}
