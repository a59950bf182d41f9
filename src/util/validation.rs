//! Client-side lead validation.
//!
//! Turns the raw form values into a [`LeadSubmission`] or the full set of
//! field errors. Runs synchronously before any network access; every failing
//! field is reported in the same pass.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::{Genre, LEAD_SOURCE, LeadSubmission};

pub const NAME_MIN_CHARS: usize = 2;

pub const NAME_TOO_SHORT: &str = "Имя должно содержать минимум 2 символа";
pub const PHONE_FORMAT: &str = "Введите телефон в формате +7 (999) 999-99-99";
pub const STYLE_REQUIRED: &str = "Выберите музыкальный стиль";
pub const TEXT_DESCRIPTION_REQUIRED: &str = "Опишите, о чём должна быть песня";
/// Shown in the phone error slot whenever there is no phone error.
pub const PHONE_HINT: &str = "Формат: +7 (999) 999-99-99";
/// Summary banner for a submit blocked by field errors.
pub const FORM_HAS_ERRORS: &str = "Пожалуйста, исправьте ошибки в форме";

/// `+7`, a three-digit area code (optionally parenthesized), then 3-2-2
/// digits; single spaces or dashes allowed between groups. Digits are ASCII
/// only: `\d` in `regex` would also match other scripts' digits.
static PHONE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^\+7[\s\-]?\(?[0-9]{3}\)?[\s\-]?[0-9]{3}[\s\-]?[0-9]{2}[\s\-]?[0-9]{2}$").ok()
});

/// Raw form values as typed, before trimming.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub style: String,
    pub has_text: bool,
    pub text_description: String,
    pub message: String,
}

/// Form fields that can carry an inline error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Style,
    TextDescription,
}

/// Inline error message per field; `None` means the field passed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub style: Option<&'static str>,
    pub text_description: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.style.is_none() && self.text_description.is_none()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Phone => self.phone,
            Field::Style => self.style,
            Field::TextDescription => self.text_description,
        }
    }

    /// Text for the phone slot, which doubles as the format hint.
    #[must_use]
    pub fn phone_slot(&self) -> &'static str {
        self.phone.unwrap_or(PHONE_HINT)
    }
}

#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    name.trim().chars().count() >= NAME_MIN_CHARS
}

#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(phone.trim()))
}

/// Parse the shared style field. Empty and unknown values both fail.
#[must_use]
pub fn parse_style(style: &str) -> Option<Genre> {
    style.trim().parse().ok()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Validate a draft and build the submission payload.
///
/// # Errors
///
/// Returns every failing field at once; the caller must not send anything.
pub fn validate_lead(draft: &LeadDraft) -> Result<LeadSubmission, FieldErrors> {
    let mut errors = FieldErrors::default();

    if !is_valid_name(&draft.name) {
        errors.name = Some(NAME_TOO_SHORT);
    }
    if !is_valid_phone(&draft.phone) {
        errors.phone = Some(PHONE_FORMAT);
    }
    let style = parse_style(&draft.style);
    if style.is_none() {
        errors.style = Some(STYLE_REQUIRED);
    }
    let text_description = draft
        .has_text
        .then(|| draft.text_description.trim().to_owned());
    if text_description.as_deref().is_some_and(str::is_empty) {
        errors.text_description = Some(TEXT_DESCRIPTION_REQUIRED);
    }

    match style {
        Some(style) if errors.is_empty() => Ok(LeadSubmission {
            name: draft.name.trim().to_owned(),
            email: draft.email.trim().to_owned(),
            phone: draft.phone.trim().to_owned(),
            style,
            has_text: draft.has_text,
            text_description,
            message: non_empty(&draft.message),
            source: LEAD_SOURCE,
        }),
        _ => Err(errors),
    }
}
