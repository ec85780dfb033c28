use crate::data::{
    CommentRepository, InMemoryDatabase, PostRepository, StatsRepository, UserRepository,
};
use crate::domain::comment::{CommentResponse, CreateCommentRequest};
use crate::domain::post::{CreatePostRequest, PostFilter, PostResponse, UpdatePostRequest};
use crate::domain::user::{CreateUserRequest, UserResponse};
use crate::domain::{Comment, DomainError, Pagination, Post, StatsResponse, User};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_page_size: i64,
    pub max_page_size: i64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: 100,
        }
    }
}

/// Every user, post and comment operation of the API. Owns id and
/// timestamp generation and input validation; storage is behind the
/// repository traits.
pub struct BlogService {
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    stats_repo: Arc<dyn StatsRepository>,
    config: ServiceConfig,
}

impl BlogService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        stats_repo: Arc<dyn StatsRepository>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            user_repo,
            post_repo,
            comment_repo,
            stats_repo,
            config,
        }
    }

    /// Service over a fresh, empty in-memory database.
    pub fn in_memory(config: ServiceConfig) -> Self {
        let db = Arc::new(InMemoryDatabase::new());
        Self::new(db.clone(), db.clone(), db.clone(), db, config)
    }

    // ============== Users ==============

    pub async fn create_user(&self, req: CreateUserRequest) -> Result<UserResponse, DomainError> {
        check_length("Username", &req.username, 3, Some(50))?;
        if let Some(full_name) = &req.full_name {
            check_length("Full name", full_name, 0, Some(100))?;
        }
        check_length("Password", &req.password, 6, None)?;

        let user = self.user_repo.create(User::new(Uuid::new_v4(), req)).await?;

        tracing::info!("User created: id={}, username={}", user.id, user.username);

        Ok(UserResponse::from(user))
    }

    pub async fn list_users(&self, page: Pagination) -> Result<Vec<UserResponse>, DomainError> {
        let (offset, limit) = self.resolve_page(page)?;
        let users = self.user_repo.list(offset, limit).await?;

        tracing::debug!("Listed {} users (skip={}, limit={})", users.len(), offset, limit);

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user(&self, id: Uuid) -> Result<UserResponse, DomainError> {
        let user = self.user_repo.find_by_id(id).await?;
        Ok(UserResponse::from(user))
    }

    // ============== Posts ==============

    pub async fn create_post(&self, req: CreatePostRequest) -> Result<PostResponse, DomainError> {
        check_title(&req.title)?;
        check_content(&req.content)?;

        let author_id = req.author_id;
        let post = self
            .post_repo
            .create(Post::new(Uuid::new_v4(), req))
            .await
            .inspect_err(|e| tracing::warn!("Post rejected: {}", e))?;

        tracing::info!("Post created: id={}, author_id={}", post.id, author_id);

        Ok(post)
    }

    /// Lists posts, optionally restricted by exact tag and by author. Empty
    /// filter values are ignored; an `author_id` that is not a valid id
    /// matches nothing.
    pub async fn list_posts(
        &self,
        tag: Option<String>,
        author_id: Option<String>,
        page: Pagination,
    ) -> Result<Vec<PostResponse>, DomainError> {
        let (offset, limit) = self.resolve_page(page)?;

        let tag = tag.filter(|t| !t.is_empty());
        let author_id = match author_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(Uuid::parse_str)
        {
            None => None,
            Some(Ok(id)) => Some(id),
            Some(Err(_)) => {
                tracing::debug!("Unparseable author_id filter, returning no posts");
                return Ok(Vec::new());
            }
        };

        let filter = PostFilter { tag, author_id };
        let posts = self.post_repo.list(&filter, offset, limit).await?;

        tracing::debug!(
            "Listed {} posts (tag={:?}, author_id={:?})",
            posts.len(),
            filter.tag,
            filter.author_id
        );

        Ok(posts)
    }

    /// Returns the post after counting this read as a view.
    pub async fn get_post(&self, id: Uuid) -> Result<PostResponse, DomainError> {
        let post = self.post_repo.record_view(id).await?;
        tracing::debug!("Post viewed: id={}, views={}", id, post.views);
        Ok(post)
    }

    pub async fn update_post(
        &self,
        id: Uuid,
        req: UpdatePostRequest,
    ) -> Result<PostResponse, DomainError> {
        if let Some(title) = &req.title {
            check_title(title)?;
        }
        if let Some(content) = &req.content {
            check_content(content)?;
        }

        let post = self.post_repo.update(id, req).await?;

        tracing::info!("Post updated: id={}", id);

        Ok(post)
    }

    pub async fn delete_post(&self, id: Uuid) -> Result<(), DomainError> {
        let removed_comments = self.post_repo.delete(id).await?;

        tracing::info!(
            "Post deleted: id={}, cascaded comments={}",
            id,
            removed_comments
        );

        Ok(())
    }

    pub async fn like_post(&self, id: Uuid) -> Result<PostResponse, DomainError> {
        let post = self.post_repo.increment_likes(id).await?;
        tracing::info!("Post liked: id={}, likes={}", id, post.likes);
        Ok(post)
    }

    // ============== Comments ==============

    pub async fn create_comment(
        &self,
        req: CreateCommentRequest,
    ) -> Result<CommentResponse, DomainError> {
        check_length("Comment", &req.content, 1, Some(500))?;

        let comment = self
            .comment_repo
            .create(Comment::new(Uuid::new_v4(), req))
            .await
            .inspect_err(|e| tracing::warn!("Comment rejected: {}", e))?;

        tracing::info!(
            "Comment created: id={}, post_id={}, author_id={}",
            comment.id,
            comment.post_id,
            comment.author_id
        );

        Ok(comment)
    }

    pub async fn list_comments_for_post(
        &self,
        post_id: Uuid,
        page: Pagination,
    ) -> Result<Vec<CommentResponse>, DomainError> {
        let (offset, limit) = self.resolve_page(page)?;
        self.comment_repo.list_for_post(post_id, offset, limit).await
    }

    // ============== Search & stats ==============

    /// Case-insensitive substring search over title, content and tags.
    /// A blank query yields no results.
    pub async fn search(
        &self,
        query: &str,
        page: Pagination,
    ) -> Result<Vec<PostResponse>, DomainError> {
        let (offset, limit) = self.resolve_page(page)?;

        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let needle = query.to_lowercase();
        let posts = self.post_repo.search(&needle, offset, limit).await?;

        tracing::debug!("Search {:?} matched {} posts", query, posts.len());

        Ok(posts)
    }

    pub async fn stats(&self) -> Result<StatsResponse, DomainError> {
        let counts = self.stats_repo.counts().await?;
        Ok(StatsResponse::from(counts))
    }

    fn resolve_page(&self, page: Pagination) -> Result<(usize, usize), DomainError> {
        let skip = page.skip.unwrap_or(0);
        let limit = page.limit.unwrap_or(self.config.default_page_size);

        if skip < 0 {
            return Err(DomainError::validation("Skip cannot be negative"));
        }
        if limit < 0 {
            return Err(DomainError::validation("Limit cannot be negative"));
        }

        // oversized pages are served at the configured maximum
        let limit = limit.min(self.config.max_page_size);

        Ok((skip as usize, limit as usize))
    }
}

fn check_title(title: &str) -> Result<(), DomainError> {
    check_length("Title", title, 5, Some(200))
}

fn check_content(content: &str) -> Result<(), DomainError> {
    check_length("Content", content, 10, None)
}

fn check_length(
    field: &str,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len < min {
        return Err(DomainError::ValidationError(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    if let Some(max) = max.filter(|&max| len > max) {
        return Err(DomainError::ValidationError(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}
