use actix_web::cookie::Cookie;
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};

use blogly_core::BlogService;
use blogly_core::domain::{NewPost, Post, User, UserFields};
use blogly_infra::InMemoryBlogStore;

use crate::config::default_templates_dir;
use crate::flash::FLASH_COOKIE;
use crate::middleware::not_found;
use crate::state::{AppState, load_templates};

fn test_state() -> AppState {
    let (users, posts) = InMemoryBlogStore::shared();
    let templates = load_templates(&default_templates_dir()).unwrap();
    AppState::from_parts(BlogService::new(users, posts), templates, 5)
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .wrap(not_found::error_handlers())
                .app_data(web::Data::new($state.clone()))
                .configure(super::configure_routes)
                .default_service(web::to(not_found::default_service)),
        )
        .await
    };
}

/// Send `$req` and return the status with the body as text.
macro_rules! send {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }};
}

async fn seed(state: &AppState) -> (User, Post) {
    let user = state
        .blog
        .create_user(
            UserFields::new(
                "Tracy",
                None,
                "Rera",
                Some("https://via.placeholder.com/50"),
            )
            .unwrap(),
        )
        .await
        .unwrap();
    let post = state
        .blog
        .create_post(
            NewPost::new(
                user.id,
                Some("Mauris cursus mattis molestie"),
                Some("Lorem ipsum dolor sit amet consectetur"),
            )
            .unwrap(),
        )
        .await
        .unwrap();
    (user, post)
}

fn location<B>(resp: &actix_web::dev::ServiceResponse<B>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

#[actix_web::test]
async fn test_home_redirects_to_posts() {
    let state = test_state();
    let app = test_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/posts");
}

#[actix_web::test]
async fn test_show_post() {
    let state = test_state();
    let (user, post) = seed(&state).await;
    let app = test_app!(state);

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri(&format!("/posts/{}", post.id))
    );
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Mauris cursus mattis molestie"));
    assert!(body.contains("Lorem ipsum dolor sit amet consectetur"));
    assert!(body.contains(&format!("/users/{}", user.id)));
}

#[actix_web::test]
async fn test_malformed_post_id_renders_not_found_page() {
    let state = test_state();
    let (_, post) = seed(&state).await;
    let app = test_app!(state);

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri(&format!("/posts/{}ik", post.id))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found!"));
    assert!(body.contains("Mauris cursus mattis molestie"));
}

#[actix_web::test]
async fn test_missing_records_are_not_found() {
    let state = test_state();
    seed(&state).await;
    let app = test_app!(state);

    for uri in ["/posts/999", "/users/999", "/users/999/posts/new", "/nowhere"] {
        let (status, body) = send!(app, test::TestRequest::get().uri(uri));
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert!(body.contains("Page not found!"), "{uri}");
    }
}

#[actix_web::test]
async fn test_forms_render() {
    let state = test_state();
    let (user, _) = seed(&state).await;
    let app = test_app!(state);

    let (status, body) = send!(app, test::TestRequest::get().uri("/users/new"));
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("ADD USER"));

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri(&format!("/users/{}/posts/new", user.id))
    );
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("NEW POST"));
}

#[actix_web::test]
async fn test_create_post_then_delete_author() {
    let state = test_state();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/users/new")
            .set_form([
                ("first_name", "Harper"),
                ("middle_name", ""),
                ("last_name", "Lane"),
                ("image_url", ""),
            ])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/users");

    let user = state.blog.list_users().await.unwrap().remove(0);
    assert_eq!(user.full_name(), "Harper Lane");
    assert_eq!(user.image_url, "https://via.placeholder.com/30");

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/users/{}/posts/new", user.id))
            .set_form([("title", "Tuesday Thoughts"), ("content", "Coffee notes")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), format!("/users/{}", user.id));

    let post = state.blog.posts_by_user(user.id).await.unwrap().remove(0);
    let (status, body) = send!(
        app,
        test::TestRequest::get().uri(&format!("/posts/{}", post.id))
    );
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Tuesday Thoughts"));
    assert!(body.contains("Coffee notes"));

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/users/{}/delete", user.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    let (status, body) = send!(app, test::TestRequest::get().uri("/posts"));
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("Tuesday Thoughts"));
    assert!(state.blog.get_post(post.id).await.is_err());
}

#[actix_web::test]
async fn test_create_post_with_blank_fields_uses_placeholder() {
    let state = test_state();
    let (user, _) = seed(&state).await;
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/users/{}/posts/new", user.id))
            .set_form([("title", ""), ("content", "")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);

    let posts = state.blog.posts_by_user(user.id).await.unwrap();
    assert!(posts.iter().any(|p| p.title == "Lorem Ipsum" && p.content == "Lorem Ipsum"));
}

#[actix_web::test]
async fn test_edit_post() {
    let state = test_state();
    let (_, post) = seed(&state).await;
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/posts/{}/edit", post.id))
            .set_form([("title", "MODIFIEDTITLE"), ("content", "MODIFIEDCONTENT")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), format!("/posts/{}", post.id));

    let (status, body) = send!(app, test::TestRequest::get().uri("/posts"));
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("MODIFIEDTITLE"));
    assert!(body.contains("MODIFIEDCONTENT"));

    let edited = state.blog.get_post(post.id).await.unwrap();
    assert!(edited.modified_on.is_some());
}

#[actix_web::test]
async fn test_blank_post_edit_is_rejected() {
    let state = test_state();
    let (_, post) = seed(&state).await;
    let app = test_app!(state);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/posts/{}/edit", post.id))
            .set_form([("title", "  "), ("content", "my unsaved draft")])
    );
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("EDIT POST"));
    assert!(body.contains("my unsaved draft"));

    let unchanged = state.blog.get_post(post.id).await.unwrap();
    assert_eq!(unchanged.title, "Mauris cursus mattis molestie");
    assert!(unchanged.modified_on.is_none());
}

#[actix_web::test]
async fn test_delete_post() {
    let state = test_state();
    let (_, post) = seed(&state).await;
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/posts/{}/delete", post.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/posts");

    let (status, _) = send!(
        app,
        test::TestRequest::get().uri(&format!("/posts/{}", post.id))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_users_listed_by_last_name() {
    let state = test_state();
    let (user, _) = seed(&state).await;
    state
        .blog
        .create_user(UserFields::new("Anna", Some("B"), "Zed", None).unwrap())
        .await
        .unwrap();
    state
        .blog
        .create_user(UserFields::new("Mo", None, "Abel", None).unwrap())
        .await
        .unwrap();
    let app = test_app!(state);

    let (status, body) = send!(app, test::TestRequest::get().uri("/users"));
    assert_eq!(status, StatusCode::OK);
    let abel = body.find("Mo Abel").unwrap();
    let rera = body.find("Tracy Rera").unwrap();
    let zed = body.find("Anna B Zed").unwrap();
    assert!(abel < rera && rera < zed);

    let (status, body) = send!(
        app,
        test::TestRequest::get().uri(&format!("/users/{}", user.id))
    );
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h2>Tracy Rera</h2>"));
    assert!(body.contains("Mauris cursus mattis molestie"));
}

#[actix_web::test]
async fn test_missing_required_user_field_is_bad_request() {
    let state = test_state();
    let app = test_app!(state);

    let (status, _) = send!(
        app,
        test::TestRequest::post()
            .uri("/users/new")
            .set_form([("first_name", "Tracy")])
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(state.blog.list_users().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_blank_user_edit_is_rejected() {
    let state = test_state();
    let (user, _) = seed(&state).await;
    let app = test_app!(state);

    let (status, body) = send!(
        app,
        test::TestRequest::post()
            .uri(&format!("/users/{}/edit", user.id))
            .set_form([
                ("first_name", ""),
                ("middle_name", ""),
                ("last_name", "Rera"),
                ("image_url", ""),
            ])
    );
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("EDIT USER"));

    let unchanged = state.blog.get_user(user.id).await.unwrap();
    assert_eq!(unchanged.first_name, "Tracy");
}

#[actix_web::test]
async fn test_edit_user() {
    let state = test_state();
    let (user, _) = seed(&state).await;
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/users/{}/edit", user.id))
            .set_form([
                ("first_name", "Treyer"),
                ("middle_name", "Q"),
                ("last_name", "Rera"),
                ("image_url", ""),
            ])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(location(&resp), "/users");

    let (_, body) = send!(app, test::TestRequest::get().uri("/users"));
    assert!(body.contains("Treyer Q Rera"));
    assert!(!body.contains("Tracy Rera"));
}

#[actix_web::test]
async fn test_flash_is_shown_once() {
    let state = test_state();
    let app = test_app!(state);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/users/new")
            .set_form([("first_name", "Tracy"), ("last_name", "Rera")])
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    let flash = resp
        .response()
        .cookies()
        .find(|c| c.name() == FLASH_COOKIE)
        .unwrap()
        .value()
        .to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/users")
            .cookie(Cookie::new(FLASH_COOKIE, flash))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cleared = resp
        .response()
        .cookies()
        .find(|c| c.name() == FLASH_COOKIE)
        .unwrap();
    assert_eq!(cleared.value(), "");

    let body = test::read_body(resp).await;
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("New user added successfully!"));

    let (_, body) = send!(app, test::TestRequest::get().uri("/users"));
    assert!(!body.contains("New user added successfully!"));
}
