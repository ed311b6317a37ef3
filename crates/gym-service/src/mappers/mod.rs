//! Entity-DTO mappers.
//!
//! One `From` impl per entity/view pair. Responses are built field by field
//! so the password hash can never reach a DTO.

use crate::dto::{RegistrationResponse, TraineeResponse, TrainerResponse};
use gym_core::{Trainee, Trainer};

impl From<Trainee> for TraineeResponse {
    fn from(trainee: Trainee) -> Self {
        Self {
            id: trainee.id,
            first_name: trainee.profile.first_name,
            last_name: trainee.profile.last_name,
            username: trainee.profile.username,
            is_active: trainee.profile.is_active,
            date_of_birth: trainee.date_of_birth,
            address: trainee.address,
            created_at: trainee.created_at,
            updated_at: trainee.updated_at,
        }
    }
}

impl From<Trainer> for TrainerResponse {
    fn from(trainer: Trainer) -> Self {
        Self {
            id: trainer.id,
            first_name: trainer.profile.first_name,
            last_name: trainer.profile.last_name,
            username: trainer.profile.username,
            is_active: trainer.profile.is_active,
            specialization: trainer.specialization,
            created_at: trainer.created_at,
            updated_at: trainer.updated_at,
        }
    }
}

impl From<&Trainee> for RegistrationResponse {
    fn from(trainee: &Trainee) -> Self {
        Self {
            id: trainee.id.into_inner(),
            username: trainee.profile.username.clone(),
        }
    }
}

impl From<&Trainer> for RegistrationResponse {
    fn from(trainer: &Trainer) -> Self {
        Self {
            id: trainer.id.into_inner(),
            username: trainer.profile.username.clone(),
        }
    }
}
