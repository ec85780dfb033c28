//! In-memory blog API: users, posts and comments with search and statistics,
//! served over HTTP by actix-web.

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
