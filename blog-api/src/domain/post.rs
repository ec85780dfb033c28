use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub author_id: Uuid,
    pub views: u64,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author_id: Uuid,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Filters for post listings; both set means both must hold.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub tag: Option<String>,
    pub author_id: Option<Uuid>,
}

pub type PostResponse = Post;

impl Post {
    pub fn new(id: Uuid, req: CreatePostRequest) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: req.title,
            content: req.content,
            tags: req.tags,
            author_id: req.author_id,
            views: 0,
            likes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies the supplied fields only and bumps `updated_at`.
    pub fn apply(&mut self, req: UpdatePostRequest) {
        if let Some(title) = req.title {
            self.title = title;
        }
        if let Some(content) = req.content {
            self.content = content;
        }
        if let Some(tags) = req.tags {
            self.tags = tags;
        }
        self.updated_at = Utc::now();
    }

    pub fn matches(&self, filter: &PostFilter) -> bool {
        let tag_ok = filter
            .tag
            .as_ref()
            .map_or(true, |tag| self.tags.iter().any(|t| t == tag));
        let author_ok = filter.author_id.map_or(true, |id| self.author_id == id);
        tag_ok && author_ok
    }

    /// Case-insensitive substring match over title, content and tags.
    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}
