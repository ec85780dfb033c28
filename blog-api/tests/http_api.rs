use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use blog_api::application::{BlogService, ServiceConfig};
use blog_api::domain::user::UserResponse;
use blog_api::domain::{Comment, Post, StatsResponse};
use blog_api::presentation;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

async fn app() -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
{
    let service = Arc::new(BlogService::in_memory(ServiceConfig::default()));
    test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(presentation::configure),
    )
    .await
}

async fn create_user<S>(app: &S, username: &str) -> UserResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "full_name": "Test User",
            "password": "hunter22",
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

async fn create_post<S>(app: &S, author_id: Uuid, title: &str, content: &str, tags: &[&str]) -> Post
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({
            "title": title,
            "content": content,
            "tags": tags,
            "author_id": author_id,
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

#[actix_rt::test]
async fn root_describes_the_api() {
    let app = app().await;
    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert!(body["message"].is_string());
    assert_eq!(body["endpoints"]["posts"], "/posts");
    assert_eq!(body["endpoints"]["stats"], "/stats");
}

#[actix_rt::test]
async fn user_roundtrip_hides_password() {
    let app = app().await;
    let user = create_user(&app, "alice").await;

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", user.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("password").is_none());
    assert_eq!(body["username"], "alice");
    assert_eq!(body["is_active"], true);

    let fetched: UserResponse = serde_json::from_value(body).unwrap();
    assert_eq!(fetched, user);
}

#[actix_rt::test]
async fn unknown_or_malformed_ids_are_404() {
    let app = app().await;

    for uri in [
        format!("/users/{}", Uuid::new_v4()),
        "/users/not-a-uuid".to_string(),
        format!("/posts/{}", Uuid::new_v4()),
        format!("/posts/{}/comments", Uuid::new_v4()),
    ] {
        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "GET {uri}");
    }

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{}/like", Uuid::new_v4()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{}", Uuid::new_v4()))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn malformed_input_is_422() {
    let app = app().await;

    let missing_fields = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "username": "bob" }))
        .to_request();
    assert_eq!(
        test::call_service(&app, missing_fields).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let short_password = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "123",
        }))
        .to_request();
    let resp = test::call_service(&app, short_password).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Password"));

    let negative_skip = test::TestRequest::get().uri("/users?skip=-1").to_request();
    assert_eq!(
        test::call_service(&app, negative_skip).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    let missing_query = test::TestRequest::get().uri("/search").to_request();
    assert_eq!(
        test::call_service(&app, missing_query).await.status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[actix_rt::test]
async fn list_users_is_paginated() {
    let app = app().await;
    for name in ["user0", "user1", "user2"] {
        create_user(&app, name).await;
    }

    let req = test::TestRequest::get()
        .uri("/users?skip=1&limit=1")
        .to_request();
    let users: Vec<UserResponse> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "user1");
}

#[actix_rt::test]
async fn post_with_unknown_author_is_404() {
    let app = app().await;
    let req = test::TestRequest::post()
        .uri("/posts")
        .set_json(json!({
            "title": "Orphan post",
            "content": "Nobody wrote this one",
            "author_id": Uuid::new_v4(),
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Author not found"));
}

#[actix_rt::test]
async fn list_posts_filters_by_tag_and_author() {
    let app = app().await;
    let alice = create_user(&app, "alice").await;
    let bob = create_user(&app, "bob").await;

    let a1 = create_post(&app, alice.id, "Alice tagged", "Valid content body", &["x"]).await;
    create_post(&app, bob.id, "Bob untagged", "Valid content body", &["y"]).await;
    let b2 = create_post(&app, bob.id, "Bob tagged", "Valid content body", &["y", "x"]).await;

    let req = test::TestRequest::get().uri("/posts?tag=x").to_request();
    let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        posts.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![a1.id, b2.id]
    );

    let req = test::TestRequest::get()
        .uri(&format!("/posts?tag=x&author_id={}", bob.id))
        .to_request();
    let posts: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(posts, vec![b2]);
}

#[actix_rt::test]
async fn update_post_is_partial() {
    let app = app().await;
    let alice = create_user(&app, "alice").await;
    let post = create_post(&app, alice.id, "First title", "Valid content body", &["x"]).await;

    let req = test::TestRequest::put()
        .uri(&format!("/posts/{}", post.id))
        .set_json(json!({ "title": "Second title" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Post = test::read_body_json(resp).await;
    assert_eq!(updated.title, "Second title");
    assert_eq!(updated.content, post.content);
    assert_eq!(updated.tags, post.tags);
}

#[actix_rt::test]
async fn search_is_case_insensitive() {
    let app = app().await;
    let alice = create_user(&app, "alice").await;
    let by_title = create_post(&app, alice.id, "Hello World", "Valid content body", &[]).await;
    let by_content = create_post(&app, alice.id, "Greetings", "I want to say hello", &[]).await;
    let by_tag = create_post(&app, alice.id, "Tagged post", "Valid content body", &["hello"]).await;
    create_post(&app, alice.id, "Unrelated", "Valid content body", &["misc"]).await;

    let req = test::TestRequest::get().uri("/search?q=HELLO").to_request();
    let found: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        found.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![by_title.id, by_content.id, by_tag.id]
    );

    let req = test::TestRequest::get().uri("/search?q=").to_request();
    let found: Vec<Post> = test::call_and_read_body_json(&app, req).await;
    assert!(found.is_empty());
}

#[actix_rt::test]
async fn stats_reflect_current_state() {
    let app = app().await;
    let alice = create_user(&app, "alice").await;

    for (i, views) in [0, 2, 5].into_iter().enumerate() {
        let title = format!("Post number {i}");
        let post = create_post(&app, alice.id, &title, "Valid content body", &[]).await;
        for _ in 0..views {
            let req = test::TestRequest::get()
                .uri(&format!("/posts/{}", post.id))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
        }
    }

    let req = test::TestRequest::get().uri("/stats").to_request();
    let stats: StatsResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats.total_users, 1);
    assert_eq!(stats.total_posts, 3);
    assert_eq!(stats.total_views, 7);
    assert_eq!(stats.total_likes, 0);
    assert_eq!(stats.average_views_per_post, 7.0 / 3.0);
    assert_eq!(stats.average_comments_per_post, 0.0);
}

#[actix_rt::test]
async fn post_lifecycle_end_to_end() {
    let app = app().await;
    let alice = create_user(&app, "alice").await;
    let post = create_post(&app, alice.id, "Lifecycle post", "Valid content body", &["x"]).await;

    let req = test::TestRequest::post()
        .uri("/comments")
        .set_json(json!({
            "post_id": post.id,
            "author_id": alice.id,
            "content": "First!",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let comment: Comment = test::read_body_json(resp).await;
    assert_eq!(comment.post_id, post.id);

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}/comments", post.id))
        .to_request();
    let comments: Vec<Comment> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(comments, vec![comment]);

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", post.id))
        .to_request();
    let viewed: Post = test::call_and_read_body_json(&app, req).await;
    assert_eq!(viewed.views, 1);

    let req = test::TestRequest::post()
        .uri(&format!("/posts/{}/like", post.id))
        .to_request();
    let liked: Post = test::call_and_read_body_json(&app, req).await;
    assert_eq!(liked.likes, 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/posts/{}", post.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}/comments", post.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/posts/{}", post.id))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/stats").to_request();
    let stats: StatsResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats.total_posts, 0);
    assert_eq!(stats.total_comments, 0);
}

#[actix_rt::test]
async fn empty_filters_and_large_limits_are_accepted() {
    let app = app().await;
    let alice = create_user(&app, "alice").await;
    let post = create_post(&app, alice.id, "Tagged post", "Valid content body", &["x"]).await;

    for uri in [
        "/posts?tag=",
        "/posts?author_id=",
        "/posts?tag=&author_id=",
        "/posts?limit=1000",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {uri}");
        let posts: Vec<Post> = test::read_body_json(resp).await;
        assert_eq!(posts, vec![post.clone()], "GET {uri}");
    }

    let req = test::TestRequest::get().uri("/users?limit=101").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
}
