//! Trainer DTOs.

use chrono::{DateTime, Utc};
use gym_core::rules::person_name;
use gym_core::{TrainerId, TrainingType};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Request to register a new trainer.
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RegisterTrainerRequest {
    #[validate(custom(function = "person_name", message = "Invalid first name"))]
    pub first_name: String,

    #[validate(custom(function = "person_name", message = "Invalid last name"))]
    pub last_name: String,

    /// Plaintext password; checked against the password policy and hashed.
    pub password: String,

    pub specialization: TrainingType,
}

impl fmt::Debug for RegisterTrainerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterTrainerRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("specialization", &self.specialization)
            .finish_non_exhaustive()
    }
}

/// Request to update a trainer's details.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTrainerRequest {
    #[validate(custom(function = "person_name", message = "Invalid first name"))]
    pub first_name: String,

    #[validate(custom(function = "person_name", message = "Invalid last name"))]
    pub last_name: String,

    pub specialization: TrainingType,
}

/// Trainer response DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerResponse {
    pub id: TrainerId,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub is_active: bool,
    pub specialization: TrainingType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
