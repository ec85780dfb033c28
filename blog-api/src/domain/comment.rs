use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentRequest {
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
}

pub type CommentResponse = Comment;

impl Comment {
    pub fn new(id: Uuid, req: CreateCommentRequest) -> Self {
        Self {
            id,
            post_id: req.post_id,
            author_id: req.author_id,
            content: req.content,
            created_at: Utc::now(),
        }
    }
}
