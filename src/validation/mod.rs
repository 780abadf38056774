//! Validation helpers for fixomax.
//!
//! These routines enforce submission constraints and return structured
//! validation errors without touching storage.

use crate::error::ValidationError;
use crate::model::NewIssue;

/// Validates citizen submissions before they reach the store.
pub struct SubmissionValidator;

impl SubmissionValidator {
    /// Validate a submission and return all validation errors found.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any validation rules are violated.
    pub fn validate(submission: &NewIssue) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        // Title: Required, max 500 chars.
        if submission.title.trim().is_empty() {
            errors.push(ValidationError::new("title", "cannot be empty"));
        }
        if submission.title.len() > 500 {
            errors.push(ValidationError::new("title", "exceeds 500 characters"));
        }

        // Location: Required, max 200 chars.
        if submission.location.trim().is_empty() {
            errors.push(ValidationError::new("location", "cannot be empty"));
        }
        if submission.location.len() > 200 {
            errors.push(ValidationError::new("location", "exceeds 200 characters"));
        }

        // Description: Optional, max 100KB.
        if submission.description.len() > 102_400 {
            errors.push(ValidationError::new("description", "exceeds 100KB"));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    fn submission(title: &str, location: &str) -> NewIssue {
        NewIssue {
            title: title.to_string(),
            description: String::new(),
            location: location.to_string(),
            priority: Priority::Medium,
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(SubmissionValidator::validate(&submission("Pothole", "5th Ave")).is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let errors = SubmissionValidator::validate(&submission("  ", "5th Ave")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn test_empty_location_rejected() {
        let errors = SubmissionValidator::validate(&submission("Pothole", "")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "location");
    }

    #[test]
    fn test_all_errors_collected() {
        let errors = SubmissionValidator::validate(&submission("", "")).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_oversize_title_rejected() {
        let long = "x".repeat(501);
        let errors = SubmissionValidator::validate(&submission(&long, "5th Ave")).unwrap_err();
        assert_eq!(errors[0].field, "title");
    }
}
