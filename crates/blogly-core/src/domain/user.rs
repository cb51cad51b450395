use std::fmt;

use serde::{Deserialize, Serialize};

use super::validate::Checks;
use crate::display::compose_full_name;
use crate::error::DomainError;

/// Image shown for users who did not supply one.
pub const DEFAULT_IMAGE_URL: &str = "https://via.placeholder.com/30";

pub const MAX_NAME_LEN: usize = 50;
pub const MAX_IMAGE_URL_LEN: usize = 255;

/// User entity - an author of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub image_url: String,
}

impl User {
    /// Build a user from stored fields.
    pub fn from_fields(id: i32, fields: UserFields) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            middle_name: fields.middle_name,
            last_name: fields.last_name,
            image_url: fields.image_url,
        }
    }

    /// "First [Middle ]Last".
    pub fn full_name(&self) -> String {
        compose_full_name(
            &self.first_name,
            self.middle_name.as_deref(),
            &self.last_name,
        )
    }

    fn has_middle_name(&self) -> bool {
        self.middle_name.as_deref().is_some_and(|m| !m.is_empty())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<User ID={} First Name={} ", self.id, self.first_name)?;
        if self.has_middle_name() {
            write!(f, "Middle Name={} ", self.middle_name.as_deref().unwrap_or_default())?;
        }
        write!(
            f,
            "Last Name={} Image URL={}>",
            self.last_name, self.image_url
        )
    }
}

/// Validated user fields, used both to create a user and to replace an
/// existing user's fields on edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub image_url: String,
}

impl UserFields {
    /// Validate raw form input.
    ///
    /// First and last name must be non-blank. A blank middle name is stored
    /// as absent, and a blank image URL falls back to [`DEFAULT_IMAGE_URL`].
    pub fn new(
        first_name: &str,
        middle_name: Option<&str>,
        last_name: &str,
        image_url: Option<&str>,
    ) -> Result<Self, DomainError> {
        let mut checks = Checks::default();

        let first_name = checks.required("First name", first_name, MAX_NAME_LEN);
        let middle_name = checks.optional("Middle name", middle_name, MAX_NAME_LEN);
        let last_name = checks.required("Last name", last_name, MAX_NAME_LEN);
        let image_url = checks
            .optional("Image URL", image_url, MAX_IMAGE_URL_LEN)
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());

        checks.finish()?;

        Ok(Self {
            first_name,
            middle_name,
            last_name,
            image_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracy(middle: Option<&str>) -> User {
        User::from_fields(
            1,
            UserFields::new("Tracy", middle, "Rera", Some("https://via.placeholder.com/50"))
                .unwrap(),
        )
    }

    #[test]
    fn test_full_name_without_middle() {
        assert_eq!(tracy(Some("")).full_name(), "Tracy Rera");
        assert_eq!(tracy(None).full_name(), "Tracy Rera");
    }

    #[test]
    fn test_full_name_with_middle() {
        assert_eq!(tracy(Some("A")).full_name(), "Tracy A Rera");
    }

    #[test]
    fn test_display_with_middle_name() {
        assert_eq!(
            tracy(Some("A")).to_string(),
            "<User ID=1 First Name=Tracy Middle Name=A Last Name=Rera \
             Image URL=https://via.placeholder.com/50>"
        );
    }

    #[test]
    fn test_display_omits_empty_middle_name() {
        let user = User::from_fields(1, UserFields::new("Alice", Some(""), "Smith", None).unwrap());
        assert_eq!(
            user.to_string(),
            "<User ID=1 First Name=Alice Last Name=Smith Image URL=https://via.placeholder.com/30>"
        );
    }

    #[test]
    fn test_blank_optional_fields_normalise() {
        let fields = UserFields::new("Treyer", Some("   "), "Darell", Some("")).unwrap();
        assert_eq!(fields.middle_name, None);
        assert_eq!(fields.image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let fields = UserFields::new("  Treyer ", Some(" B "), " Darell", None).unwrap();
        assert_eq!(fields.first_name, "Treyer");
        assert_eq!(fields.middle_name.as_deref(), Some("B"));
        assert_eq!(fields.last_name, "Darell");
    }

    #[test]
    fn test_blank_required_names_are_rejected() {
        let err = UserFields::new(" ", None, "", None).unwrap_err();
        match err {
            DomainError::Validation(messages) => {
                assert_eq!(messages.len(), 2);
                assert!(messages[0].contains("First name"));
                assert!(messages[1].contains("Last name"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_overlong_name_is_rejected() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            UserFields::new(&long, None, "Rera", None),
            Err(DomainError::Validation(_))
        ));
    }
}
