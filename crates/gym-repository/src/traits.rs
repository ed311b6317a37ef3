//! Repository trait definitions.

use async_trait::async_trait;
use gym_core::{GymResult, Interface, Trainee, TraineeId, Trainer, TrainerId};

/// Identity-wide account lookups.
///
/// Backed by the single username index shared by trainees and trainers, so
/// one query answers "is this username taken?" for the whole identity space.
#[async_trait]
pub trait UserAccountRepository: Interface + Send + Sync {
    /// Checks if a username exists among trainees or trainers.
    async fn exists_by_username(&self, username: &str) -> GymResult<bool>;
}

/// Trainee repository trait.
#[async_trait]
pub trait TraineeRepository: Interface + Send + Sync {
    /// Finds a trainee by ID.
    async fn find_by_id(&self, id: TraineeId) -> GymResult<Option<Trainee>>;

    /// Finds a trainee by username.
    async fn find_by_username(&self, username: &str) -> GymResult<Option<Trainee>>;

    /// Finds all trainees.
    async fn find_all(&self) -> GymResult<Vec<Trainee>>;

    /// Saves a new trainee.
    ///
    /// Fails with `GymError::Conflict` if the username is already taken by
    /// any trainee or trainer.
    async fn save(&self, trainee: &Trainee) -> GymResult<Trainee>;

    /// Updates personal details. Username and password hash are not written.
    async fn update(&self, trainee: &Trainee) -> GymResult<Trainee>;

    /// Replaces the stored password hash in a single write.
    async fn update_password(&self, id: TraineeId, password_hash: &str) -> GymResult<()>;

    /// Sets the active flag.
    async fn set_active(&self, id: TraineeId, active: bool) -> GymResult<()>;

    /// Deletes a trainee by ID. Returns `true` if deleted.
    async fn delete(&self, id: TraineeId) -> GymResult<bool>;

    /// Assigns a trainer to a trainee. Assigning twice is a no-op.
    async fn assign_trainer(&self, trainee_id: TraineeId, trainer_id: TrainerId) -> GymResult<()>;
}

/// Trainer repository trait.
#[async_trait]
pub trait TrainerRepository: Interface + Send + Sync {
    /// Finds a trainer by ID.
    async fn find_by_id(&self, id: TrainerId) -> GymResult<Option<Trainer>>;

    /// Finds a trainer by username.
    async fn find_by_username(&self, username: &str) -> GymResult<Option<Trainer>>;

    /// Finds all trainers.
    async fn find_all(&self) -> GymResult<Vec<Trainer>>;

    /// Saves a new trainer.
    ///
    /// Fails with `GymError::Conflict` if the username is already taken by
    /// any trainee or trainer.
    async fn save(&self, trainer: &Trainer) -> GymResult<Trainer>;

    /// Updates personal details and specialization.
    async fn update(&self, trainer: &Trainer) -> GymResult<Trainer>;

    /// Replaces the stored password hash in a single write.
    async fn update_password(&self, id: TrainerId, password_hash: &str) -> GymResult<()>;

    /// Sets the active flag.
    async fn set_active(&self, id: TrainerId, active: bool) -> GymResult<()>;

    /// Finds trainers not yet assigned to the given trainee.
    async fn find_not_assigned_to_trainee(&self, trainee_username: &str) -> GymResult<Vec<Trainer>>;
}
