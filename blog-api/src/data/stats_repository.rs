use crate::domain::{BlogCounts, DomainError};
use async_trait::async_trait;

#[async_trait]
pub trait StatsRepository: Send + Sync {
    async fn counts(&self) -> Result<BlogCounts, DomainError>;
}
