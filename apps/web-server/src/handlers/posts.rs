//! Post pages.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::Utc;
use tera::Context;

use blogly_core::DomainError;
use blogly_core::domain::{NewPost, PostChanges};
use blogly_shared::Flash;
use blogly_shared::dto::PostForm;

use crate::flash;
use crate::middleware::error::AppResult;
use crate::render;
use crate::state::AppState;
use crate::views::{PostView, UserView};

/// GET /posts
pub async fn list(state: web::Data<AppState>, req: HttpRequest) -> AppResult<HttpResponse> {
    let posts = state.blog.list_recent_posts(state.recent_posts_limit).await?;

    let mut ctx = Context::new();
    ctx.insert("posts", &PostView::list(&posts, Utc::now()));
    render::page(&state, &req, "posts.html", ctx)
}

/// GET /posts/{id}
pub async fn show(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = state.blog.get_post(path.into_inner()).await?;
    let author = state.blog.get_user(post.user_id).await?;

    let mut ctx = Context::new();
    ctx.insert("post", &PostView::new(&post, Utc::now()));
    ctx.insert("user", &UserView::from(&author));
    render::page(&state, &req, "post.html", ctx)
}

/// GET /users/{user_id}/posts/new
pub async fn new_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = state.blog.get_user(path.into_inner()).await?;

    let mut ctx = Context::new();
    ctx.insert("user", &UserView::from(&user));
    render::page(&state, &req, "add_new_post.html", ctx)
}

/// POST /users/{user_id}/posts/new
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let user = state.blog.get_user(path.into_inner()).await?;
    let form = form.into_inner();

    let new_post = match NewPost::new(user.id, form.title.as_deref(), form.content.as_deref()) {
        Ok(post) => post,
        Err(DomainError::Validation(errors)) => {
            let mut ctx = Context::new();
            ctx.insert("user", &UserView::from(&user));
            ctx.insert("form", &form);
            ctx.insert("errors", &errors);
            return render::page_with_status(
                &state,
                &req,
                StatusCode::UNPROCESSABLE_ENTITY,
                "add_new_post.html",
                ctx,
            );
        }
        Err(e) => return Err(e.into()),
    };

    state.blog.create_post(new_post).await?;
    Ok(flash::redirect_with(
        &format!("/users/{}", user.id),
        Flash::PostAdded,
    ))
}

/// GET /posts/{id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = state.blog.get_post(path.into_inner()).await?;

    let mut ctx = Context::new();
    ctx.insert("post", &PostView::new(&post, Utc::now()));
    render::page(&state, &req, "edit_post.html", ctx)
}

/// POST /posts/{id}/edit
pub async fn update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i32>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let post = state.blog.get_post(path.into_inner()).await?;
    let form = form.into_inner();

    let changes = match PostChanges::new(form.title.as_deref(), form.content.as_deref()) {
        Ok(changes) => changes,
        Err(DomainError::Validation(errors)) => {
            let mut ctx = Context::new();
            ctx.insert("post", &PostView::new(&post, Utc::now()));
            ctx.insert("form", &form);
            ctx.insert("errors", &errors);
            return render::page_with_status(
                &state,
                &req,
                StatusCode::UNPROCESSABLE_ENTITY,
                "edit_post.html",
                ctx,
            );
        }
        Err(e) => return Err(e.into()),
    };

    let post = state.blog.update_post(post.id, changes).await?;
    Ok(flash::redirect_with(
        &format!("/posts/{}", post.id),
        Flash::PostModified,
    ))
}

/// POST /posts/{id}/delete
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.blog.delete_post(path.into_inner()).await?;
    Ok(flash::redirect_with("/posts", Flash::PostDeleted))
}
