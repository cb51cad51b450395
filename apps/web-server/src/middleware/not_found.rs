//! The 404 page: every not-found response (unknown route, bad id, missing
//! record) is re-rendered here together with the most recent posts.

use actix_web::body::EitherBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::middleware::{ErrorHandlerResponse, ErrorHandlers};
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::Utc;
use tera::Context;

use crate::render;
use crate::state::AppState;
use crate::views::PostView;

/// Posts listed under the not-found message.
const NOT_FOUND_POSTS: u64 = 5;

/// Middleware that swaps every 404 body for the rendered 404 page.
pub fn error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::NOT_FOUND, render_not_found)
}

/// Fallback service for unmatched routes.
pub async fn default_service() -> HttpResponse {
    HttpResponse::NotFound().finish()
}

fn render_not_found<B: 'static>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (req, _) = res.into_parts();

    Ok(ErrorHandlerResponse::Future(Box::pin(async move {
        let response = match req.app_data::<web::Data<AppState>>().cloned() {
            Some(state) => not_found_page(&state, &req).await,
            None => HttpResponse::NotFound().finish(),
        };
        let res: ServiceResponse<EitherBody<B>> =
            ServiceResponse::new(req, response).map_into_right_body();
        Ok(res)
    })))
}

async fn not_found_page(state: &AppState, req: &HttpRequest) -> HttpResponse {
    tracing::debug!(path = %req.path(), "Rendering not-found page");

    let posts = match state.blog.list_recent_posts(NOT_FOUND_POSTS).await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!("Failed to load posts for the 404 page: {}", e);
            Vec::new()
        }
    };

    let mut ctx = Context::new();
    ctx.insert("posts", &PostView::list(&posts, Utc::now()));
    ctx.insert("requested_url", &req.uri().to_string());

    match render::page_with_status(state, req, StatusCode::NOT_FOUND, "404.html", ctx) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Failed to render the 404 page: {}", e);
            HttpResponse::NotFound().finish()
        }
    }
}
