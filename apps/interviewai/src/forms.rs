//! Form payloads.

use serde::Deserialize;

use crate::error::AppError;

/// Fields of the upload form. Missing fields arrive as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UploadForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl UploadForm {
    /// Required-field checks, matching what the browser enforces on the
    /// `required` / `type="email"` inputs.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Please enter your full name.".into()));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(AppError::Validation("Please enter your email.".into()));
        }
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(AppError::Validation(
                "Please enter a valid email address.".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str) -> UploadForm {
        UploadForm {
            name: name.into(),
            email: email.into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(form("Ada Lovelace", "ada@example.com").validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = form("   ", "ada@example.com").validate();
        assert!(matches!(err, Err(AppError::Validation(msg)) if msg.contains("name")));
    }

    #[test]
    fn blank_or_malformed_email_is_rejected() {
        assert!(form("Ada", "").validate().is_err());
        assert!(form("Ada", "ada.example.com").validate().is_err());
        assert!(form("Ada", "@example.com").validate().is_err());
        assert!(form("Ada", "ada@").validate().is_err());
    }
}
