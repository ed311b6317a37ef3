//! Validation utilities.

use crate::GymError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `GymError` on failure.
    fn validate_request(&self) -> Result<(), GymError> {
        self.validate().map_err(validation_errors_to_gym_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `GymError`.
#[must_use]
pub fn validation_errors_to_gym_error(errors: ValidationErrors) -> GymError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string);
                format!("{}: {}", field, message)
            })
        })
        .collect();
    messages.sort();

    GymError::Validation(messages.join("; "))
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Maximum length of a first or last name.
    pub const MAX_NAME_LENGTH: usize = 64;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates a person's first or last name used as a username seed.
    ///
    /// Names may not be blank and may not exceed [`MAX_NAME_LENGTH`]
    /// characters. The character set is not restricted.
    pub fn person_name(value: &str) -> Result<(), ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new("name_blank"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(ValidationError::new("name_too_long"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;

    #[derive(Validate)]
    struct NameForm {
        #[validate(custom(function = "person_name"))]
        first_name: String,
        #[validate(length(min = 1, message = "must not be empty"))]
        last_name: String,
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hello").is_ok());
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
    }

    #[test]
    fn test_person_name() {
        assert!(person_name("John").is_ok());
        assert!(person_name("  Anne-Marie ").is_ok());
        assert!(person_name("").is_err());
        assert!(person_name("   ").is_err());
        assert!(person_name("Van Dyke").is_ok());
        assert!(person_name("St. James").is_ok());
        assert!(person_name(&"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_request_collects_field_errors() {
        let form = NameForm {
            first_name: String::new(),
            last_name: String::new(),
        };

        match form.validate_request() {
            Err(GymError::Validation(message)) => {
                assert!(message.contains("first_name: name_blank"));
                assert!(message.contains("last_name: must not be empty"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_request_ok() {
        let form = NameForm {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
        };
        assert!(form.validate_request().is_ok());
    }
}
