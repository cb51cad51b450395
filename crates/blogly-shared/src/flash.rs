//! One-shot messages shown on the page after a redirect.

use serde::Serialize;

/// A confirmation shown once after a successful change.
///
/// Only the short [`key`](Flash::key) travels between requests, so the
/// message text cannot be forged by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    PostAdded,
    PostModified,
    PostDeleted,
    UserAdded,
    UserModified,
    UserDeleted,
}

impl Flash {
    const ALL: [Flash; 6] = [
        Flash::PostAdded,
        Flash::PostModified,
        Flash::PostDeleted,
        Flash::UserAdded,
        Flash::UserModified,
        Flash::UserDeleted,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Flash::PostAdded => "post-added",
            Flash::PostModified => "post-modified",
            Flash::PostDeleted => "post-deleted",
            Flash::UserAdded => "user-added",
            Flash::UserModified => "user-modified",
            Flash::UserDeleted => "user-deleted",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::PostAdded => "Post has been added to the list!",
            Flash::PostModified => "Post modified successfully!",
            Flash::PostDeleted => "Post deleted successfully!",
            Flash::UserAdded => "New user added successfully!",
            Flash::UserModified => "User modified successfully!",
            Flash::UserDeleted => "User deleted successfully!",
        }
    }
}

/// What a template receives for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct FlashView {
    pub category: &'static str,
    pub message: String,
}

impl From<Flash> for FlashView {
    fn from(flash: Flash) -> Self {
        Self {
            category: "success",
            message: flash.message().to_string(),
        }
    }
}
