//! Domain entities - the core business objects.

mod post;
mod user;
mod validate;

pub use post::{DEFAULT_POST_TEXT, MAX_CONTENT_LEN, MAX_TITLE_LEN, NewPost, Post, PostChanges};
pub use user::{DEFAULT_IMAGE_URL, MAX_IMAGE_URL_LEN, MAX_NAME_LEN, User, UserFields};
