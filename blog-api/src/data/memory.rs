use crate::data::store::{Collection, InMemoryCollection};
use crate::data::{CommentRepository, PostRepository, StatsRepository, UserRepository};
use crate::domain::post::{PostFilter, UpdatePostRequest};
use crate::domain::{BlogCounts, Comment, DomainError, Post, User};
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

struct Tables {
    users: Box<dyn Collection<User>>,
    posts: Box<dyn Collection<Post>>,
    comments: Box<dyn Collection<Comment>>,
}

/// Process-local store for users, posts and comments.
///
/// A single lock guards all three collections, so every repository call is
/// atomic to other callers, including cascade deletes and the reference
/// checks done on insert.
pub struct InMemoryDatabase {
    tables: RwLock<Tables>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::with_collections(
            Box::new(InMemoryCollection::new()),
            Box::new(InMemoryCollection::new()),
            Box::new(InMemoryCollection::new()),
        )
    }

    pub fn with_collections(
        users: Box<dyn Collection<User>>,
        posts: Box<dyn Collection<Post>>,
        comments: Box<dyn Collection<Comment>>,
    ) -> Self {
        Self {
            tables: RwLock::new(Tables {
                users,
                posts,
                comments,
            }),
        }
    }
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self::new()
    }
}

fn page<'a, T: Clone + 'a>(
    items: impl Iterator<Item = &'a T>,
    offset: usize,
    limit: usize,
) -> Vec<T> {
    items.skip(offset).take(limit).cloned().collect()
}

#[async_trait]
impl UserRepository for InMemoryDatabase {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;
        tables.users.put(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<User, DomainError> {
        let tables = self.tables.read().await;
        tables
            .users
            .get(id)
            .cloned()
            .ok_or(DomainError::UserNotFound(id))
    }

    async fn list(&self, offset: usize, limit: usize) -> Result<Vec<User>, DomainError> {
        let tables = self.tables.read().await;
        Ok(page(tables.users.scan(), offset, limit))
    }
}

#[async_trait]
impl PostRepository for InMemoryDatabase {
    async fn create(&self, post: Post) -> Result<Post, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains(post.author_id) {
            return Err(DomainError::AuthorNotFound(post.author_id));
        }
        tables.posts.put(post.clone());
        Ok(post)
    }

    async fn record_view(&self, id: Uuid) -> Result<Post, DomainError> {
        let mut tables = self.tables.write().await;
        let post = tables
            .posts
            .get_mut(id)
            .ok_or(DomainError::PostNotFound(id))?;
        post.views += 1;
        Ok(post.clone())
    }

    async fn update(&self, id: Uuid, req: UpdatePostRequest) -> Result<Post, DomainError> {
        let mut tables = self.tables.write().await;
        let post = tables
            .posts
            .get_mut(id)
            .ok_or(DomainError::PostNotFound(id))?;
        post.apply(req);
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<usize, DomainError> {
        let mut tables = self.tables.write().await;
        tables
            .posts
            .delete(id)
            .ok_or(DomainError::PostNotFound(id))?;

        let orphaned: Vec<Uuid> = tables
            .comments
            .scan()
            .filter(|c| c.post_id == id)
            .map(|c| c.id)
            .collect();
        for comment_id in &orphaned {
            tables.comments.delete(*comment_id);
        }

        Ok(orphaned.len())
    }

    async fn increment_likes(&self, id: Uuid) -> Result<Post, DomainError> {
        let mut tables = self.tables.write().await;
        let post = tables
            .posts
            .get_mut(id)
            .ok_or(DomainError::PostNotFound(id))?;
        post.likes += 1;
        Ok(post.clone())
    }

    async fn list(
        &self,
        filter: &PostFilter,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Post>, DomainError> {
        let tables = self.tables.read().await;
        Ok(page(
            tables.posts.scan().filter(|p| p.matches(filter)),
            offset,
            limit,
        ))
    }

    async fn search(
        &self,
        needle: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Post>, DomainError> {
        let tables = self.tables.read().await;
        Ok(page(
            tables.posts.scan().filter(|p| p.mentions(needle)),
            offset,
            limit,
        ))
    }
}

#[async_trait]
impl CommentRepository for InMemoryDatabase {
    async fn create(&self, comment: Comment) -> Result<Comment, DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.posts.contains(comment.post_id) {
            return Err(DomainError::PostNotFound(comment.post_id));
        }
        if !tables.users.contains(comment.author_id) {
            return Err(DomainError::AuthorNotFound(comment.author_id));
        }
        tables.comments.put(comment.clone());
        Ok(comment)
    }

    async fn list_for_post(
        &self,
        post_id: Uuid,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Comment>, DomainError> {
        let tables = self.tables.read().await;
        if !tables.posts.contains(post_id) {
            return Err(DomainError::PostNotFound(post_id));
        }
        Ok(page(
            tables.comments.scan().filter(|c| c.post_id == post_id),
            offset,
            limit,
        ))
    }
}

#[async_trait]
impl StatsRepository for InMemoryDatabase {
    async fn counts(&self) -> Result<BlogCounts, DomainError> {
        let tables = self.tables.read().await;
        let (views, likes) = tables
            .posts
            .scan()
            .fold((0u64, 0u64), |(v, l), p| (v + p.views, l + p.likes));

        Ok(BlogCounts {
            users: tables.users.len() as u64,
            posts: tables.posts.len() as u64,
            comments: tables.comments.len() as u64,
            views,
            likes,
        })
    }
}
