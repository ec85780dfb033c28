use crate::domain::{DomainError, User};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: User) -> Result<User, DomainError>;
    async fn find_by_id(&self, id: Uuid) -> Result<User, DomainError>;
    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<User>, DomainError>;
}
