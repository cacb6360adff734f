use serde::Serialize;

use std::collections::BTreeMap;

use crate::validation::{self, FieldError, FieldKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Phone,
    Service,
    Message,
}

impl Field {
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Service,
        Self::Message,
    ];

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Email => FieldKind::Email,
            Self::Phone => FieldKind::Tel,
            Self::Name | Self::Service | Self::Message => FieldKind::Text,
        }
    }

    pub const fn required(self) -> bool {
        !matches!(self, Self::Phone)
    }
}

/// JSON body posted to the relay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Service => &mut self.service,
            Field::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Form-level message shown under the submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

/// View state for one contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub fields: ContactFields,
    errors: BTreeMap<Field, FieldError>,
    busy: bool,
    banner: Option<Banner>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Typing into a field clears its inline error.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        self.clear_field_error(field);
    }

    pub fn clear_field_error(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn validate_field(&mut self, field: Field) -> bool {
        self.clear_field_error(field);

        match validation::validate(field.kind(), field.required(), self.fields.get(field)) {
            Ok(()) => true,
            Err(e) => {
                self.errors.insert(field, e);
                false
            }
        }
    }

    /// Runs every validator so each failing field gets its inline error.
    pub fn validate_all(&mut self) -> bool {
        Field::ALL
            .into_iter()
            .fold(true, |valid, field| self.validate_field(field) && valid)
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    pub(crate) fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub const fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub(crate) fn show(&mut self, kind: BannerKind, text: impl Into<String>) {
        self.banner = Some(Banner {
            kind,
            text: text.into(),
        });
    }

    /// Clears values and inline errors; the banner stays visible.
    pub fn reset(&mut self) {
        self.fields = ContactFields::default();
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Jane Doe");
        form.set(Field::Email, "jane@example.com");
        form.set(Field::Service, "Premises Licence");
        form.set(Field::Message, "Need help");
        form
    }

    #[test]
    fn valid_form_has_no_errors() {
        let mut form = filled();
        assert!(form.validate_all());
        assert!(Field::ALL.into_iter().all(|f| form.error(f).is_none()));
    }

    #[test]
    fn every_failing_field_gets_an_inline_error() {
        let mut form = ContactForm::new();
        form.set(Field::Email, "jane@");
        form.set(Field::Phone, "123");

        assert!(!form.validate_all());
        assert_eq!(form.error(Field::Name), Some(FieldError::EmptyField));
        assert_eq!(form.error(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(form.error(Field::Phone), Some(FieldError::InvalidPhone));
        assert_eq!(form.error(Field::Service), Some(FieldError::EmptyField));
        assert_eq!(form.error(Field::Message), Some(FieldError::EmptyField));
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = ContactForm::new();
        assert!(!form.validate_field(Field::Name));
        assert!(form.error(Field::Name).is_some());

        form.set(Field::Name, "J");
        assert_eq!(form.error(Field::Name), None);
        assert!(form.validate_field(Field::Name));
    }

    #[test]
    fn reset_clears_values_but_keeps_banner() {
        let mut form = filled();
        form.show(BannerKind::Success, "sent");
        form.reset();

        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(form.banner().map(|b| b.text.as_str()), Some("sent"));
    }

    #[test]
    fn serializes_as_flat_json() {
        let json = serde_json::to_value(&filled().fields).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane Doe",
                "email": "jane@example.com",
                "phone": "",
                "service": "Premises Licence",
                "message": "Need help"
            })
        );
    }
}
