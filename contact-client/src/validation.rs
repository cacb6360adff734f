use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("phone pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required")]
    EmptyField,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// Checks one field value. Format checks only apply to non-empty values.
pub fn validate(kind: FieldKind, required: bool, value: &str) -> Result<(), FieldError> {
    let value = value.trim();

    if value.is_empty() {
        return if required {
            Err(FieldError::EmptyField)
        } else {
            Ok(())
        };
    }

    match kind {
        FieldKind::Email if !EMAIL_PATTERN.is_match(value) => Err(FieldError::InvalidEmail),
        FieldKind::Tel if !PHONE_PATTERN.is_match(value) => Err(FieldError::InvalidPhone),
        _ => Ok(()),
    }
}
