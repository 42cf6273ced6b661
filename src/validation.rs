//! Input validation for timetable requests.
//!
//! Checks the section identifier list before generation. Detects:
//! - An empty request
//! - Blank identifiers
//! - Duplicate identifiers

use std::collections::HashSet;
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No sections were requested.
    EmptyRequest,
    /// An identifier is empty or whitespace.
    EmptyIdentifier,
    /// Two sections share an identifier.
    DuplicateIdentifier,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a list of section identifiers.
///
/// Checks:
/// 1. At least one section is requested
/// 2. No identifier is blank
/// 3. No identifier appears twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_sections<S: AsRef<str>>(sections: &[S]) -> ValidationResult {
    let mut errors = Vec::new();

    if sections.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRequest,
            "No sections requested",
        ));
    }

    let mut seen = HashSet::new();
    for (position, id) in sections.iter().map(|s| s.as_ref()).enumerate() {
        if id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyIdentifier,
                format!("Section identifier at position {position} is blank"),
            ));
            continue;
        }
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateIdentifier,
                format!("Duplicate section identifier: {id}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_sections() {
        assert!(validate_sections(&["A", "B", "10C"]).is_ok());
    }

    #[test]
    fn test_empty_request() {
        let errors = validate_sections::<&str>(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyRequest);
    }

    #[test]
    fn test_blank_identifier() {
        let errors = validate_sections(&["A", "  "]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyIdentifier && e.message.contains("1")));
    }

    #[test]
    fn test_duplicate_identifier() {
        let errors = validate_sections(&["A", "B", "A"]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateIdentifier));
    }

    #[test]
    fn test_case_sensitive_identifiers() {
        assert!(validate_sections(&["a", "A"]).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let errors = validate_sections(&["", "B", "B"]).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
