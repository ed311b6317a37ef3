//! Trainee DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use gym_core::rules::person_name;
use gym_core::TraineeId;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Request to register a new trainee.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RegisterTraineeRequest {
    #[validate(custom(function = "person_name", message = "Invalid first name"))]
    pub first_name: String,

    #[validate(custom(function = "person_name", message = "Invalid last name"))]
    pub last_name: String,

    /// Plaintext password; checked against the password policy and hashed.
    pub password: String,

    pub date_of_birth: Option<NaiveDate>,

    #[validate(length(max = 255, message = "Address cannot exceed 255 characters"))]
    pub address: Option<String>,
}

impl fmt::Debug for RegisterTraineeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterTraineeRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("date_of_birth", &self.date_of_birth)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

/// Request to update a trainee's personal details.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTraineeRequest {
    #[validate(custom(function = "person_name", message = "Invalid first name"))]
    pub first_name: String,

    #[validate(custom(function = "person_name", message = "Invalid last name"))]
    pub last_name: String,

    pub date_of_birth: Option<NaiveDate>,

    #[validate(length(max = 255, message = "Address cannot exceed 255 characters"))]
    pub address: Option<String>,
}

/// Trainee response DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraineeResponse {
    pub id: TraineeId,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub is_active: bool,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gym_core::{GymError, ValidateExt};

    fn register_request(first: &str, last: &str) -> RegisterTraineeRequest {
        RegisterTraineeRequest {
            first_name: first.to_string(),
            last_name: last.to_string(),
            password: "Secret123".to_string(),
            date_of_birth: None,
            address: None,
        }
    }

    #[test]
    fn test_valid_register_request() {
        assert!(register_request("John", "Smith").validate_request().is_ok());
    }

    #[test]
    fn test_blank_names_rejected() {
        let result = register_request("", "Smith").validate_request();
        match result {
            Err(GymError::Validation(message)) => assert!(message.contains("first_name")),
            other => panic!("Expected Validation, got {:?}", other),
        }
        assert!(register_request("John", "   ").validate_request().is_err());
    }

    #[test]
    fn test_names_with_spaces_and_dots_accepted() {
        assert!(register_request("Mary Ann", "Lee").validate_request().is_ok());
        assert!(register_request("John", "St. James").validate_request().is_ok());
        assert!(register_request("Jean", "Van Dyke").validate_request().is_ok());
    }

    #[test]
    fn test_address_length() {
        let mut request = register_request("John", "Smith");
        request.address = Some("x".repeat(256));
        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let debug = format!("{:?}", register_request("John", "Smith"));
        assert!(!debug.contains("Secret123"));
    }
}
