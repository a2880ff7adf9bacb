//! Field validators for the RFQ form

use crate::rfq::{RfqForm, RfqSubmission};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Check an email address against the basic `local@domain.tld` shape
pub fn validate_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// A required field is valid when it has non-whitespace content
pub fn validate_required(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Form fields that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RfqField {
    Name,
    Email,
    Country,
    Message,
}

impl std::fmt::Display for RfqField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RfqField::Name => write!(f, "name"),
            RfqField::Email => write!(f, "email"),
            RfqField::Country => write!(f, "country"),
            RfqField::Message => write!(f, "message"),
        }
    }
}

/// Per-field validation messages, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<RfqField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: RfqField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: RfqField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: RfqField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First message in field order, for single-line banners
    pub fn first_message(&self) -> Option<&str> {
        self.0.values().next().map(String::as_str)
    }
}

pub const NAME_REQUIRED: &str = "Please enter your name";
pub const EMAIL_REQUIRED: &str = "Please enter your email";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";

/// Validate the raw form and produce a trimmed submission.
///
/// Name and email are required; country and message are optional and
/// collapse to `None` when blank.
pub fn validate_form(form: &RfqForm, source: &str) -> Result<RfqSubmission, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = form.name.trim();
    let email = form.email.trim();

    if !validate_required(name) {
        errors.insert(RfqField::Name, NAME_REQUIRED);
    }

    if !validate_required(email) {
        errors.insert(RfqField::Email, EMAIL_REQUIRED);
    } else if !validate_email(email) {
        errors.insert(RfqField::Email, EMAIL_INVALID);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(RfqSubmission {
        name: name.to_string(),
        email: email.to_string(),
        country: non_blank(&form.country),
        message: non_blank(&form.message),
        source: source.to_string(),
    })
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
