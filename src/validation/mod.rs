//! Form validation helpers.
//!
//! This module provides the declarative field rules used by the
//! application's input forms. Each field is checked in a fixed order:
//! required, then (only when a value is present) minimum and maximum
//! length, pattern, and finally a custom validator. The first failing
//! check wins for that field. Fields with no error are absent from the
//! result; an empty error map signals a valid form.
//!
//! # Example
//!
//! ```
//! use books_engine::validation::{FormRules, common, validate_form};
//! use std::collections::HashMap;
//!
//! let rules = FormRules::new().field("email", common::email());
//!
//! let mut data = HashMap::new();
//! data.insert("email".to_string(), "not-an-email".to_string());
//! let errors = validate_form(&data, &rules);
//! assert!(errors.contains_key("email"));
//!
//! data.insert("email".to_string(), "a@b.com".to_string());
//! let errors = validate_form(&data, &rules);
//! assert!(errors.is_empty());
//! ```

pub mod common;
mod rules;

pub use rules::{CustomValidator, FieldRule, FormRules, ValidationErrors, ensure_valid, validate_form};
