//! Common field rules shared across the application's forms.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::FieldRule;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 \-()]{6,19}$").expect("phone pattern is valid"));

static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d{1,2})?$").expect("amount pattern is valid"));

/// Rule for a required email address field.
pub fn email() -> FieldRule {
    FieldRule::new()
        .required("Email is required")
        .pattern(&EMAIL_RE, "Enter a valid email address")
}

/// Rule for an optional phone number field.
pub fn phone() -> FieldRule {
    FieldRule::new().pattern(&PHONE_RE, "Enter a valid phone number")
}

/// Rule for a required monetary amount field (up to two decimal places).
pub fn amount() -> FieldRule {
    FieldRule::new()
        .required("Amount is required")
        .pattern(&AMOUNT_RE, "Enter a valid amount")
}

/// Rule for a required person or company name field.
pub fn person_name() -> FieldRule {
    FieldRule::new()
        .required("Name is required")
        .min_length(2, "Name must be at least 2 characters")
        .max_length(100, "Name must be at most 100 characters")
}
