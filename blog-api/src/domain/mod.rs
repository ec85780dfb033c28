pub mod comment;
pub mod error;
pub mod pagination;
pub mod post;
pub mod stats;
pub mod user;

pub use comment::Comment;
pub use error::DomainError;
pub use pagination::Pagination;
pub use post::Post;
pub use stats::{BlogCounts, StatsResponse};
pub use user::User;
