pub mod comment_repository;
pub mod memory;
pub mod post_repository;
pub mod stats_repository;
pub mod store;
pub mod user_repository;

pub use comment_repository::CommentRepository;
pub use memory::InMemoryDatabase;
pub use post_repository::PostRepository;
pub use stats_repository::StatsRepository;
pub use store::{Collection, InMemoryCollection, Record};
pub use user_repository::UserRepository;
