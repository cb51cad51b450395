//! Template view models.
//!
//! Timestamps stay in UTC everywhere else; this is the only place they are
//! shown in the server's local zone.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use blogly_core::domain::{Post, User};

const TIMESTAMP_FORMAT: &str = "%a %b %-d %Y, %-I:%M %p";

#[derive(Debug, Serialize)]
pub struct PostView {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub homepage_content: String,
    pub homepage_minified: bool,
    pub created_at: String,
    pub friendly_created_at: String,
    pub modified_on: Option<String>,
    pub friendly_modified_on: Option<String>,
}

impl PostView {
    pub fn new(post: &Post, now: DateTime<Utc>) -> Self {
        let summary = post.summary();
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title.clone(),
            content: post.content.clone(),
            homepage_content: summary.text.to_string(),
            homepage_minified: summary.truncated,
            created_at: local_time(post.created_at),
            friendly_created_at: post.friendly_created_at(now),
            modified_on: post.modified_on.map(local_time),
            friendly_modified_on: post.friendly_modified_on(now),
        }
    }

    pub fn list(posts: &[Post], now: DateTime<Utc>) -> Vec<Self> {
        posts.iter().map(|p| Self::new(p, now)).collect()
    }
}

#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: i32,
    pub first_name: String,
    /// Empty when the user has no middle name, so forms can prefill it.
    pub middle_name: String,
    pub last_name: String,
    pub image_url: String,
    pub full_name: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            middle_name: user.middle_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone(),
            image_url: user.image_url.clone(),
            full_name: user.full_name(),
        }
    }
}

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogly_core::domain::{NewPost, UserFields};
    use chrono::Duration;

    #[test]
    fn test_post_view_derived_fields() {
        let now = Utc::now();
        let post = Post::from_new(
            1,
            NewPost::new(1, Some("Title"), Some(&"x".repeat(400)))
                .unwrap()
                .created_at(now - Duration::minutes(90)),
        );

        let view = PostView::new(&post, now);
        assert!(view.homepage_minified);
        assert_eq!(view.homepage_content.len(), 252);
        assert_eq!(view.friendly_created_at, "1 hour ago");
        assert_eq!(view.friendly_modified_on, None);
    }

    #[test]
    fn test_user_view_without_middle_name() {
        let user = User::from_fields(4, UserFields::new("Tracy", None, "Rera", None).unwrap());
        let view = UserView::from(&user);
        assert_eq!(view.middle_name, "");
        assert_eq!(view.full_name, "Tracy Rera");
    }
}
