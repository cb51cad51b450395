use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validate::Checks;
use crate::display::{Summary, friendly_since, prefix, summarize};
use crate::error::DomainError;

/// Title and content used when a post is created without them.
pub const DEFAULT_POST_TEXT: &str = "Lorem Ipsum";

pub const MAX_TITLE_LEN: usize = 128;
pub const MAX_CONTENT_LEN: usize = 65535;

/// Characters of title/content shown in the debug representation.
const REPR_PREVIEW_LEN: usize = 32;

/// Post entity - a blog post owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// `None` until the first edit.
    pub modified_on: Option<DateTime<Utc>>,
}

impl Post {
    pub fn from_new(id: i32, post: NewPost) -> Self {
        Self {
            id,
            user_id: post.user_id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            modified_on: None,
        }
    }

    /// Apply an edit. `created_at` is never touched.
    pub fn apply(&mut self, changes: PostChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        self.modified_on = Some(changes.modified_on);
    }

    /// Content as shown on the post list.
    pub fn summary(&self) -> Summary<'_> {
        summarize(&self.content)
    }

    pub fn friendly_created_at(&self, now: DateTime<Utc>) -> String {
        friendly_since(self.created_at, now)
    }

    pub fn friendly_modified_on(&self, now: DateTime<Utc>) -> Option<String> {
        self.modified_on.map(|at| friendly_since(at, now))
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cut = if self.content.chars().count() > REPR_PREVIEW_LEN {
            "[truncated]"
        } else {
            ""
        };
        write!(
            f,
            "<Post ID={} Title={} Content={}{} Created At={}>",
            self.id,
            prefix(&self.title, REPR_PREVIEW_LEN),
            cut,
            prefix(&self.content, REPR_PREVIEW_LEN),
            self.created_at.format("%Y-%m-%d %H:%M:%S"),
        )
    }
}

/// A validated post ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl NewPost {
    /// Validate a new post for `user_id`, stamped with the current UTC time.
    ///
    /// Missing or blank title/content fall back to [`DEFAULT_POST_TEXT`].
    pub fn new(
        user_id: i32,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Self, DomainError> {
        let mut checks = Checks::default();
        let title = checks
            .optional("Title", title, MAX_TITLE_LEN)
            .unwrap_or_else(|| DEFAULT_POST_TEXT.to_string());
        let content = checks
            .optional_text("Content", content, MAX_CONTENT_LEN)
            .unwrap_or_else(|| DEFAULT_POST_TEXT.to_string());
        checks.finish()?;

        Ok(Self {
            user_id,
            title,
            content,
            created_at: Utc::now(),
        })
    }

    /// Override the creation time, e.g. when seeding historical posts.
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }
}

/// A validated edit to an existing post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub modified_on: DateTime<Utc>,
}

impl PostChanges {
    /// Fields left as `None` are kept; fields given must be non-blank.
    /// The modification time is always bumped, even if nothing changed.
    pub fn new(title: Option<&str>, content: Option<&str>) -> Result<Self, DomainError> {
        let mut checks = Checks::default();
        let title = title.map(|t| checks.required("Title", t, MAX_TITLE_LEN));
        let content = content.map(|c| checks.required_text("Content", c, MAX_CONTENT_LEN));
        checks.finish()?;

        Ok(Self {
            title,
            content,
            modified_on: Utc::now(),
        })
    }
}
