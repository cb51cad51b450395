//! User pages.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::Utc;
use tera::Context;

use blogly_core::DomainError;
use blogly_core::domain::UserFields;
use blogly_shared::Flash;
use blogly_shared::dto::{EditUserForm, NewUserForm};

use crate::flash;
use crate::middleware::error::AppResult;
use crate::render;
use crate::state::AppState;
use crate::views::{PostView, UserView};

/// GET /users
pub async fn list(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    let users = state.blog.list_users().await?;
    let users: Vec<UserView> = users.iter().map(UserView::from).collect();

    let mut ctx = Context::new();
    ctx.insert("users", &users);
    render::page(&state, &req, "users.html", ctx)
}

/// GET /users/new
pub async fn new_form(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    render::page(&state, &req, "new_user.html", Context::new())
}

/// POST /users/new
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<NewUserForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    let fields = UserFields::new(
        &form.first_name,
        form.middle_name.as_deref(),
        &form.last_name,
        form.image_url.as_deref(),
    );

    let fields = match fields {
        Ok(fields) => fields,
        Err(DomainError::Validation(errors)) => {
            let mut ctx = Context::new();
            ctx.insert("form", &form);
            ctx.insert("errors", &errors);
            return render::page_with_status(
                &state,
                &req,
                StatusCode::UNPROCESSABLE_ENTITY,
                "new_user.html",
                ctx,
            );
        }
        Err(e) => return Err(e.into()),
    };

    state.blog.create_user(fields).await?;
    Ok(flash::redirect_with("/users", Flash::UserAdded))
}

/// GET /users/{id}
pub async fn show(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = state.blog.get_user(path.into_inner()).await?;
    let posts = state.blog.posts_by_user(user.id).await?;

    let mut ctx = Context::new();
    ctx.insert("user", &UserView::from(&user));
    ctx.insert("posts", &PostView::list(&posts, Utc::now()));
    render::page(&state, &req, "user_details.html", ctx)
}

/// GET /users/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = state.blog.get_user(path.into_inner()).await?;

    let mut ctx = Context::new();
    ctx.insert("user", &UserView::from(&user));
    render::page(&state, &req, "edit_user.html", ctx)
}

/// POST /users/{id}/edit
///
/// Blank first or last names are rejected and the form is shown again,
/// rather than storing placeholder text.
pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
    form: web::Form<EditUserForm>,
) -> AppResult<HttpResponse> {
    let user = state.blog.get_user(path.into_inner()).await?;
    let form = form.into_inner();

    let fields = UserFields::new(
        form.first_name.as_deref().unwrap_or_default(),
        form.middle_name.as_deref(),
        form.last_name.as_deref().unwrap_or_default(),
        form.image_url.as_deref(),
    );

    let fields = match fields {
        Ok(fields) => fields,
        Err(DomainError::Validation(errors)) => {
            tracing::debug!(user_id = user.id, ?errors, "Rejected user edit");
            let mut ctx = Context::new();
            ctx.insert("user", &UserView::from(&user));
            ctx.insert("errors", &errors);
            return render::page_with_status(
                &state,
                &req,
                StatusCode::UNPROCESSABLE_ENTITY,
                "edit_user.html",
                ctx,
            );
        }
        Err(e) => return Err(e.into()),
    };

    state.blog.update_user(user.id, fields).await?;
    Ok(flash::redirect_with("/users", Flash::UserModified))
}

/// POST /users/{id}/delete
///
/// Removes the user's posts along with the user.
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.blog.delete_user(path.into_inner()).await?;
    Ok(flash::redirect_with("/users", Flash::UserDeleted))
}
