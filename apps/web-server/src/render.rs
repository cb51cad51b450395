//! Page rendering through Tera.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse};
use tera::Context;

use blogly_shared::FlashView;

use crate::flash;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Render `template` with `ctx` and a 200 status.
pub fn page(
    state: &AppState,
    req: &HttpRequest,
    template: &str,
    ctx: Context,
) -> AppResult<HttpResponse> {
    page_with_status(state, req, StatusCode::OK, template, ctx)
}

/// Render `template`, showing and consuming any pending flash message.
pub fn page_with_status(
    state: &AppState,
    req: &HttpRequest,
    status: StatusCode,
    template: &str,
    mut ctx: Context,
) -> AppResult<HttpResponse> {
    let pending = flash::pending(req);
    if let Some(f) = pending {
        ctx.insert("flash", &FlashView::from(f));
    }

    let body = state.templates.render(template, &ctx)?;

    let mut response = HttpResponse::build(status);
    response.content_type(ContentType::html());
    if pending.is_some() {
        response.cookie(flash::removal());
    }
    Ok(response.body(body))
}
