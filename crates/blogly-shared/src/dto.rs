//! Data Transfer Objects - form bodies submitted by the HTML pages.

use serde::{Deserialize, Serialize};

/// Body of `POST /users/new`. First and last name must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserForm {
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body of `POST /users/{id}/edit`.
///
/// Every field may be missing; the domain layer decides what is acceptable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditUserForm {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body of the post create and edit forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}
