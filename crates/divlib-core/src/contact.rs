//! Contact form validation
//!
//! Local-only: the form is validated and acknowledged in place, nothing
//! is ever submitted anywhere.

use crate::error::{SiteError, SiteResult};

/// Inline status shown when a required field is missing
pub const CONTACT_MISSING_FIELDS: &str = "Пожалуйста, заполните все поля.";

/// Inline acknowledgment shown after a valid "send"
pub const CONTACT_THANKS: &str = "Спасибо! Ваше сообщение отправлено.";

/// How long the acknowledgment stays on screen
pub const CONTACT_THANKS_TTL: std::time::Duration = std::time::Duration::from_secs(4);

/// Raw contact form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Require a non-blank name, email and message.
pub fn validate(form: &ContactMessage) -> SiteResult<()> {
    let filled = [&form.name, &form.email, &form.message]
        .iter()
        .all(|field| !field.trim().is_empty());
    if filled {
        Ok(())
    } else {
        Err(SiteError::Validation(CONTACT_MISSING_FIELDS.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactMessage {
        ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_all_fields_present() {
        assert!(validate(&form("Иван", "ivan@mail.ru", "Здравствуйте")).is_ok());
    }

    #[test]
    fn test_any_blank_field_fails() {
        let cases = [
            form("", "ivan@mail.ru", "Здравствуйте"),
            form("Иван", "", "Здравствуйте"),
            form("Иван", "ivan@mail.ru", ""),
            form("   ", "ivan@mail.ru", "Здравствуйте"),
        ];
        for case in cases {
            let err = validate(&case).unwrap_err();
            assert_eq!(format!("{err}"), CONTACT_MISSING_FIELDS);
        }
    }
}
