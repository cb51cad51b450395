//! # Blogly Shared
//!
//! Types exchanged between the HTML pages and the server: form bodies and
//! flash messages.

pub mod dto;
pub mod flash;

pub use flash::{Flash, FlashView};
