use crate::application::BlogService;
use crate::domain::comment::CreateCommentRequest;
use crate::domain::post::{CreatePostRequest, UpdatePostRequest};
use crate::domain::user::CreateUserRequest;
use crate::domain::{DomainError, Pagination};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use uuid::Uuid;

#[derive(serde::Deserialize)]
pub struct ListPostsQuery {
    pub tag: Option<String>,
    pub author_id: Option<String>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(serde::Deserialize)]
pub struct SearchQuery {
    pub q: String,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

pub(crate) fn error_body(message: impl Into<String>) -> serde_json::Value {
    serde_json::json!({ "error": message.into() })
}

// Преобразование DomainError в HttpResponse
pub(crate) fn error_to_response(err: DomainError) -> HttpResponse {
    let status_code = err.to_status_code();
    let message = err.to_string();

    match status_code {
        404 => HttpResponse::NotFound().json(error_body(message)),
        _ => HttpResponse::UnprocessableEntity().json(error_body(message)),
    }
}

pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the Blog API!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "users": "/users",
            "posts": "/posts",
            "comments": "/comments",
            "search": "/search",
            "stats": "/stats",
        }
    }))
}

// ============== User Handlers ==============

pub async fn create_user(
    blog_service: web::Data<Arc<BlogService>>,
    req: web::Json<CreateUserRequest>,
) -> impl Responder {
    match blog_service.create_user(req.into_inner()).await {
        Ok(user) => HttpResponse::Created().json(user),
        Err(err) => error_to_response(err),
    }
}

pub async fn list_users(
    blog_service: web::Data<Arc<BlogService>>,
    query: web::Query<Pagination>,
) -> impl Responder {
    match blog_service.list_users(query.into_inner()).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(err) => error_to_response(err),
    }
}

pub async fn get_user(
    blog_service: web::Data<Arc<BlogService>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match blog_service.get_user(path.into_inner()).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(err) => error_to_response(err),
    }
}

// ============== Post Handlers ==============

pub async fn create_post(
    blog_service: web::Data<Arc<BlogService>>,
    post_data: web::Json<CreatePostRequest>,
) -> impl Responder {
    match blog_service.create_post(post_data.into_inner()).await {
        Ok(post) => HttpResponse::Created().json(post),
        Err(err) => error_to_response(err),
    }
}

pub async fn list_posts(
    blog_service: web::Data<Arc<BlogService>>,
    query: web::Query<ListPostsQuery>,
) -> impl Responder {
    let ListPostsQuery {
        tag,
        author_id,
        skip,
        limit,
    } = query.into_inner();

    match blog_service
        .list_posts(tag, author_id, Pagination { skip, limit })
        .await
    {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(err) => error_to_response(err),
    }
}

pub async fn get_post(
    blog_service: web::Data<Arc<BlogService>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let post_id = path.into_inner();

    tracing::debug!("Getting post with id={}", post_id);

    match blog_service.get_post(post_id).await {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => error_to_response(err),
    }
}

pub async fn update_post(
    blog_service: web::Data<Arc<BlogService>>,
    path: web::Path<Uuid>,
    post_data: web::Json<UpdatePostRequest>,
) -> impl Responder {
    match blog_service
        .update_post(path.into_inner(), post_data.into_inner())
        .await
    {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => error_to_response(err),
    }
}

pub async fn delete_post(
    blog_service: web::Data<Arc<BlogService>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match blog_service.delete_post(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_to_response(err),
    }
}

pub async fn like_post(
    blog_service: web::Data<Arc<BlogService>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match blog_service.like_post(path.into_inner()).await {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(err) => error_to_response(err),
    }
}

// ============== Comment Handlers ==============

pub async fn create_comment(
    blog_service: web::Data<Arc<BlogService>>,
    comment_data: web::Json<CreateCommentRequest>,
) -> impl Responder {
    match blog_service.create_comment(comment_data.into_inner()).await {
        Ok(comment) => HttpResponse::Created().json(comment),
        Err(err) => error_to_response(err),
    }
}

pub async fn list_post_comments(
    blog_service: web::Data<Arc<BlogService>>,
    path: web::Path<Uuid>,
    query: web::Query<Pagination>,
) -> impl Responder {
    match blog_service
        .list_comments_for_post(path.into_inner(), query.into_inner())
        .await
    {
        Ok(comments) => HttpResponse::Ok().json(comments),
        Err(err) => error_to_response(err),
    }
}

// ============== Search & Stats Handlers ==============

pub async fn search_posts(
    blog_service: web::Data<Arc<BlogService>>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let SearchQuery { q, skip, limit } = query.into_inner();

    match blog_service.search(&q, Pagination { skip, limit }).await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(err) => error_to_response(err),
    }
}

pub async fn stats(blog_service: web::Data<Arc<BlogService>>) -> impl Responder {
    match blog_service.stats().await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(err) => error_to_response(err),
    }
}
