use crate::presentation::http_handlers::{self, error_body};
use actix_web::{error, web, HttpResponse};

/// Route table and extractor settings for the whole API. Malformed bodies and
/// query strings are answered with 422; a path id that does not parse names
/// no entity and is answered with 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let body = error_body(format!("Invalid request body: {}", err));
        error::InternalError::from_response(err, HttpResponse::UnprocessableEntity().json(body))
            .into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        let body = error_body(format!("Invalid query parameters: {}", err));
        error::InternalError::from_response(err, HttpResponse::UnprocessableEntity().json(body))
            .into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        let body = error_body("Not found");
        error::InternalError::from_response(err, HttpResponse::NotFound().json(body)).into()
    }))
    .route("/", web::get().to(http_handlers::root))
    .service(
        web::resource("/users")
            .route(web::get().to(http_handlers::list_users))
            .route(web::post().to(http_handlers::create_user)),
    )
    .route("/users/{id}", web::get().to(http_handlers::get_user))
    .service(
        web::resource("/posts")
            .route(web::get().to(http_handlers::list_posts))
            .route(web::post().to(http_handlers::create_post)),
    )
    .service(
        web::resource("/posts/{id}")
            .route(web::get().to(http_handlers::get_post))
            .route(web::put().to(http_handlers::update_post))
            .route(web::delete().to(http_handlers::delete_post)),
    )
    .route("/posts/{id}/like", web::post().to(http_handlers::like_post))
    .route(
        "/posts/{id}/comments",
        web::get().to(http_handlers::list_post_comments),
    )
    .route("/comments", web::post().to(http_handlers::create_comment))
    .route("/search", web::get().to(http_handlers::search_posts))
    .route("/stats", web::get().to(http_handlers::stats));
}
