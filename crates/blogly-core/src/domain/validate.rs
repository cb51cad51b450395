//! Field checks shared by the record constructors.

use crate::error::DomainError;

/// Collects every field problem so a form can show them all at once.
#[derive(Debug, Default)]
pub(crate) struct Checks {
    messages: Vec<String>,
}

impl Checks {
    /// A field that must be present and non-blank. Returns the trimmed value.
    pub(crate) fn required(&mut self, label: &str, value: &str, max_len: usize) -> String {
        let value = value.trim();
        if value.is_empty() {
            self.messages.push(format!("{label} must not be blank"));
        } else {
            self.max_len(label, value, max_len);
        }
        value.to_string()
    }

    /// A field where blank means "not given".
    pub(crate) fn optional(
        &mut self,
        label: &str,
        value: Option<&str>,
        max_len: usize,
    ) -> Option<String> {
        let value = value.map(str::trim).filter(|v| !v.is_empty())?;
        self.max_len(label, value, max_len);
        Some(value.to_string())
    }

    /// Like [`required`](Self::required), but the text is kept as written.
    pub(crate) fn required_text(&mut self, label: &str, value: &str, max_len: usize) -> String {
        if value.trim().is_empty() {
            self.messages.push(format!("{label} must not be blank"));
        } else {
            self.max_len(label, value, max_len);
        }
        value.to_string()
    }

    /// Like [`optional`](Self::optional), but the text is kept as written.
    pub(crate) fn optional_text(
        &mut self,
        label: &str,
        value: Option<&str>,
        max_len: usize,
    ) -> Option<String> {
        let value = value.filter(|v| !v.trim().is_empty())?;
        self.max_len(label, value, max_len);
        Some(value.to_string())
    }

    fn max_len(&mut self, label: &str, value: &str, max_len: usize) {
        if value.chars().count() > max_len {
            self.messages
                .push(format!("{label} must be at most {max_len} characters"));
        }
    }

    pub(crate) fn finish(self) -> Result<(), DomainError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self.messages))
        }
    }
}
