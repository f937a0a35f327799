//! Field rules and form validation.

use std::collections::{BTreeMap, HashMap};

use regex::Regex;

use crate::error::{EngineError, EngineResult};

/// A custom validation callback.
///
/// Receives the trimmed field value and returns an error message when the
/// value is invalid, `None` when it passes.
pub type CustomValidator = fn(&str) -> Option<String>;

/// The validation checks declared for one form field.
///
/// Checks run in declaration-independent fixed order: required, minimum
/// length, maximum length, pattern, custom. The first failure produces the
/// field's error and the remaining checks are skipped; a field that is
/// absent or blank and not required passes without running any check.
#[derive(Debug, Clone, Default)]
pub struct FieldRule {
    required: Option<String>,
    min_length: Option<(usize, String)>,
    max_length: Option<(usize, String)>,
    pattern: Option<(Regex, String)>,
    custom: Option<CustomValidator>,
}

impl FieldRule {
    /// Creates a rule with no checks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with `message` when the field is absent or blank after trimming.
    pub fn required(mut self, message: &str) -> Self {
        self.required = Some(message.to_string());
        self
    }

    /// Fails with `message` when a present value is shorter than `min`
    /// characters.
    pub fn min_length(mut self, min: usize, message: &str) -> Self {
        self.min_length = Some((min, message.to_string()));
        self
    }

    /// Fails with `message` when a present value is longer than `max`
    /// characters.
    pub fn max_length(mut self, max: usize, message: &str) -> Self {
        self.max_length = Some((max, message.to_string()));
        self
    }

    /// Fails with `message` when a present value does not match the pattern.
    pub fn pattern(mut self, pattern: &Regex, message: &str) -> Self {
        self.pattern = Some((pattern.clone(), message.to_string()));
        self
    }

    /// Runs a custom validator against a present value after the built-in
    /// checks pass.
    pub fn custom(mut self, validator: CustomValidator) -> Self {
        self.custom = Some(validator);
        self
    }

    /// Returns the first failing check's message for a raw field value.
    fn first_error(&self, raw: Option<&str>) -> Option<String> {
        let value = raw.map(str::trim).unwrap_or("");
        if value.is_empty() {
            return self.required.clone();
        }
        if let Some((min, message)) = &self.min_length {
            if value.chars().count() < *min {
                return Some(message.clone());
            }
        }
        if let Some((max, message)) = &self.max_length {
            if value.chars().count() > *max {
                return Some(message.clone());
            }
        }
        if let Some((pattern, message)) = &self.pattern {
            if !pattern.is_match(value) {
                return Some(message.clone());
            }
        }
        if let Some(validator) = self.custom {
            return validator(value);
        }
        None
    }
}

/// The rules for a whole form, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct FormRules {
    rules: Vec<(String, FieldRule)>,
}

impl FormRules {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a rule for a field. Declaration order is the order fields
    /// are checked in.
    pub fn field(mut self, name: &str, rule: FieldRule) -> Self {
        self.rules.push((name.to_string(), rule));
        self
    }
}

/// Field name to first error message; fields with no error are absent.
pub type ValidationErrors = BTreeMap<String, String>;

/// Validates form data against a rule set.
///
/// Every declared field is checked independently; a failure on one field
/// never stops the checks on another. The result maps each failing field
/// to its first error message.
///
/// # Examples
///
/// ```
/// use books_engine::validation::{FieldRule, FormRules, validate_form};
/// use std::collections::HashMap;
///
/// let rules = FormRules::new()
///     .field("name", FieldRule::new().required("Name is required"))
///     .field("notes", FieldRule::new().max_length(10, "Notes too long"));
///
/// let mut data = HashMap::new();
/// data.insert("notes".to_string(), "short".to_string());
///
/// let errors = validate_form(&data, &rules);
/// assert_eq!(errors.get("name").unwrap(), "Name is required");
/// assert!(!errors.contains_key("notes"));
/// ```
pub fn validate_form(data: &HashMap<String, String>, rules: &FormRules) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for (name, rule) in &rules.rules {
        if let Some(message) = rule.first_error(data.get(name).map(String::as_str)) {
            errors.insert(name.clone(), message);
        }
    }
    errors
}

/// Validates form data, failing with [`EngineError::ValidationFailed`] when
/// any field has an error.
pub fn ensure_valid(data: &HashMap<String, String>, rules: &FormRules) -> EngineResult<()> {
    let errors = validate_form(data, rules);
    if errors.is_empty() {
        Ok(())
    } else {
        let fields = errors.keys().cloned().collect::<Vec<_>>().join(", ");
        Err(EngineError::ValidationFailed { fields })
    }
}
