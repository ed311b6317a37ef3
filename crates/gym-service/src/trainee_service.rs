//! Trainee service trait definition.

use crate::dto::{
    ChangePasswordRequest, LoginRequest, RegisterTraineeRequest, RegistrationResponse, TraineeResponse,
    UpdateTraineeRequest,
};
use async_trait::async_trait;
use gym_core::{GymResult, Interface, TraineeId};

/// Trainee service trait.
#[async_trait]
pub trait TraineeService: Interface + Send + Sync {
    /// Registers a new trainee with a generated username.
    async fn register(&self, request: RegisterTraineeRequest) -> GymResult<RegistrationResponse>;

    /// Gets a trainee by ID.
    async fn get(&self, id: TraineeId) -> GymResult<TraineeResponse>;

    /// Gets a trainee by username.
    async fn get_by_username(&self, username: &str) -> GymResult<TraineeResponse>;

    /// Lists all trainees.
    async fn list(&self) -> GymResult<Vec<TraineeResponse>>;

    /// Updates a trainee's personal details.
    async fn update(&self, id: TraineeId, request: UpdateTraineeRequest) -> GymResult<TraineeResponse>;

    /// Changes a trainee's password after checking the old one.
    async fn change_password(&self, request: ChangePasswordRequest) -> GymResult<()>;

    /// Checks a trainee's username and password.
    async fn authenticate(&self, request: LoginRequest) -> GymResult<TraineeResponse>;

    /// Activates a trainee account.
    async fn activate(&self, id: TraineeId) -> GymResult<()>;

    /// Deactivates a trainee account.
    async fn deactivate(&self, id: TraineeId) -> GymResult<()>;

    /// Deletes a trainee.
    async fn delete(&self, id: TraineeId) -> GymResult<()>;

    /// Deletes a trainee by username.
    async fn delete_by_username(&self, username: &str) -> GymResult<()>;

    /// Assigns a trainer to a trainee, both identified by username.
    async fn assign_trainer(&self, trainee_username: &str, trainer_username: &str) -> GymResult<()>;
}
