use serde::{Deserialize, Serialize};

/// Raw totals taken from one consistent snapshot of the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlogCounts {
    pub users: u64,
    pub posts: u64,
    pub comments: u64,
    pub views: u64,
    pub likes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_users: u64,
    pub total_posts: u64,
    pub total_comments: u64,
    pub total_views: u64,
    pub total_likes: u64,
    pub average_views_per_post: f64,
    pub average_likes_per_post: f64,
    pub average_comments_per_post: f64,
}

impl From<BlogCounts> for StatsResponse {
    fn from(counts: BlogCounts) -> Self {
        let per_post = |total: u64| {
            if counts.posts == 0 {
                0.0
            } else {
                total as f64 / counts.posts as f64
            }
        };

        Self {
            total_users: counts.users,
            total_posts: counts.posts,
            total_comments: counts.comments,
            total_views: counts.views,
            total_likes: counts.likes,
            average_views_per_post: per_post(counts.views),
            average_likes_per_post: per_post(counts.likes),
            average_comments_per_post: per_post(counts.comments),
        }
    }
}
