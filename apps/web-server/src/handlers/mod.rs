//! HTTP handlers and route configuration.

mod posts;
mod users;

#[cfg(test)]
mod tests;

use actix_web::http::header;
use actix_web::{HttpResponse, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().error_handler(|err, _req| {
        // a required form field is missing or malformed
        AppError::BadRequest(err.to_string()).into()
    }))
    .route("/", web::get().to(home))
    .service(
        web::scope("/posts")
            .route("", web::get().to(posts::list))
            .route("/{id}", web::get().to(posts::show))
            .route("/{id}/edit", web::get().to(posts::edit_form))
            .route("/{id}/edit", web::post().to(posts::update))
            .route("/{id}/delete", web::post().to(posts::delete)),
    )
    .service(
        web::scope("/users")
            .route("", web::get().to(users::list))
            .route("/new", web::get().to(users::new_form))
            .route("/new", web::post().to(users::create))
            .route("/{id}", web::get().to(users::show))
            .route("/{id}/edit", web::get().to(users::edit_form))
            .route("/{id}/edit", web::post().to(users::update))
            .route("/{id}/delete", web::post().to(users::delete))
            .route("/{user_id}/posts/new", web::get().to(posts::new_form))
            .route("/{user_id}/posts/new", web::post().to(posts::create)),
    );
}

/// GET / - the post list is the home page.
async fn home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/posts"))
        .finish()
}
