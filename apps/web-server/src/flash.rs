//! Flash messages carried across a redirect in a short-lived cookie.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};

use blogly_shared::Flash;

pub const FLASH_COOKIE: &str = "blogly_flash";

/// `302 Found` to `location`, leaving `flash` for the next page rendered.
pub fn redirect_with(location: &str, flash: Flash) -> HttpResponse {
    let cookie = Cookie::build(FLASH_COOKIE, flash.key())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();

    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .cookie(cookie)
        .finish()
}

/// The pending flash, if the request carries a valid one.
pub fn pending(req: &HttpRequest) -> Option<Flash> {
    req.cookie(FLASH_COOKIE)
        .and_then(|cookie| Flash::from_key(cookie.value()))
}

/// Cookie that clears the flash once it has been shown.
pub fn removal() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}
