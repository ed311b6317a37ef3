//! Trainer service trait definition.

use crate::dto::{
    ChangePasswordRequest, LoginRequest, RegisterTrainerRequest, RegistrationResponse, TrainerResponse,
    UpdateTrainerRequest,
};
use async_trait::async_trait;
use gym_core::{GymResult, Interface, TrainerId};

/// Trainer service trait.
#[async_trait]
pub trait TrainerService: Interface + Send + Sync {
    /// Registers a new trainer with a generated username.
    async fn register(&self, request: RegisterTrainerRequest) -> GymResult<RegistrationResponse>;

    /// Gets a trainer by ID.
    async fn get(&self, id: TrainerId) -> GymResult<TrainerResponse>;

    /// Gets a trainer by username.
    async fn get_by_username(&self, username: &str) -> GymResult<TrainerResponse>;

    /// Lists all trainers.
    async fn list(&self) -> GymResult<Vec<TrainerResponse>>;

    /// Updates a trainer's details.
    async fn update(&self, id: TrainerId, request: UpdateTrainerRequest) -> GymResult<TrainerResponse>;

    /// Changes a trainer's password after checking the old one.
    async fn change_password(&self, request: ChangePasswordRequest) -> GymResult<()>;

    /// Checks a trainer's username and password.
    async fn authenticate(&self, request: LoginRequest) -> GymResult<TrainerResponse>;

    /// Activates a trainer account.
    async fn activate(&self, id: TrainerId) -> GymResult<()>;

    /// Deactivates a trainer account.
    async fn deactivate(&self, id: TrainerId) -> GymResult<()>;

    /// Lists trainers not yet assigned to the given trainee.
    async fn list_unassigned_for_trainee(&self, trainee_username: &str) -> GymResult<Vec<TrainerResponse>>;
}
