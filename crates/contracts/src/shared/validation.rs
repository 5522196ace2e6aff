//! Field validation for create/update forms

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Field key used for errors that are not tied to a single input
pub const FORM_FIELD: &str = "_form";

/// Date format accepted by the API and produced by `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One error shown next to an input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Collected errors of one form submission
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(FORM_FIELD, message);
        errors
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// First message for a field; the form shows one error per input
    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_length(self, min: usize, max: usize) -> Self {
        Self {
            min_length: Some(min),
            max_length: Some(max),
            ..self
        }
    }

    pub const fn with_max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub fn with_range(self, min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..self
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(());
        }

        let length = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!("{} must be at least {} characters", field_label, min));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!("{} must not exceed {} characters", field_label, max));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: Option<f64>, field_label: &str) -> Result<(), String> {
        let Some(value) = value else {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(());
        };

        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must not exceed {}", field_label, max));
            }
        }

        Ok(())
    }

    /// Run `validate_string` and record the error under `field`
    pub fn check_string(
        &self,
        errors: &mut ValidationErrors,
        field: &str,
        field_label: &str,
        value: &str,
    ) {
        if let Err(message) = self.validate_string(value, field_label) {
            errors.push(field, message);
        }
    }

    pub fn check_number(
        &self,
        errors: &mut ValidationErrors,
        field: &str,
        field_label: &str,
        value: Option<f64>,
    ) {
        if let Err(message) = self.validate_number(value, field_label) {
            errors.push(field, message);
        }
    }
}

/// Loose e-mail shape check: one `@`, non-empty local part, dotted domain
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain
            .split('.')
            .filter(|part| !part.is_empty())
            .count()
            >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn check_email(errors: &mut ValidationErrors, field: &str, value: &str, required: bool) {
    if value.trim().is_empty() {
        if required {
            errors.push(field, "Email is required");
        }
    } else if !is_valid_email(value) {
        errors.push(field, "Email address is not valid");
    }
}

pub fn check_date(
    errors: &mut ValidationErrors,
    field: &str,
    field_label: &str,
    value: Option<&str>,
    required: bool,
) {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None if required => errors.push(field, format!("{} is required", field_label)),
        None => {}
        Some(v) if parse_date(v).is_none() => {
            errors.push(field, format!("{} must be a date (YYYY-MM-DD)", field_label))
        }
        Some(_) => {}
    }
}

/// Check that an optional value is one of the allowed options
pub fn check_one_of(
    errors: &mut ValidationErrors,
    field: &str,
    field_label: &str,
    value: Option<&str>,
    allowed: &[&str],
) {
    if let Some(v) = value.map(str::trim).filter(|v| !v.is_empty()) {
        if !allowed.contains(&v) {
            errors.push(
                field,
                format!("{} must be one of: {}", field_label, allowed.join(", ")),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required().with_max_length(5);
        assert!(rules.validate_string("  ", "Name").is_err());
        assert!(rules.validate_string("Ann", "Name").is_ok());
        assert_eq!(
            rules.validate_string("Annabelle", "Name"),
            Err("Name must not exceed 5 characters".to_string())
        );
    }

    #[test]
    fn test_optional_empty_string_passes_length_rules() {
        let rules = ValidationRules::none().with_length(3, 10);
        assert!(rules.validate_string("", "Code").is_ok());
        assert!(rules.validate_string("AB", "Code").is_err());
    }

    #[test]
    fn test_number_range() {
        let rules = ValidationRules::none().with_range(1.0, 100.0);
        assert!(rules.validate_number(None, "Capacity").is_ok());
        assert!(rules.validate_number(Some(0.0), "Capacity").is_err());
        assert!(rules.validate_number(Some(100.0), "Capacity").is_ok());
        assert!(ValidationRules::required().validate_number(None, "Marks").is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("teacher@school.edu"));
        assert!(!is_valid_email("teacher@school"));
        assert!(!is_valid_email("@school.edu"));
        assert!(!is_valid_email("a b@school.edu"));
        assert!(!is_valid_email("a@@school.edu"));
    }

    #[test]
    fn test_first_error_per_field() {
        let mut errors = ValidationErrors::new();
        errors.push("email", "first");
        errors.push("email", "second");
        assert_eq!(errors.for_field("email"), Some("first"));
        assert_eq!(errors.for_field("name"), None);
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_check_date() {
        let mut errors = ValidationErrors::new();
        check_date(&mut errors, "exam_date", "Exam date", Some("2024-02-30"), true);
        check_date(&mut errors, "hire_date", "Hire date", None, false);
        check_date(&mut errors, "dob", "Date of birth", Some("2010-05-01"), true);
        assert_eq!(errors.len(), 1);
        assert!(errors.for_field("exam_date").is_some());
    }
}
