//! Trainer service implementation.

use crate::credentials::{self, CredentialSettings};
use crate::dto::{
    ChangePasswordRequest, LoginRequest, RegisterTrainerRequest, RegistrationResponse, TrainerResponse,
    UpdateTrainerRequest,
};
use crate::trainer_service::TrainerService;
use async_trait::async_trait;
use gym_core::{GymError, GymResult, Trainer, TrainerId, UserProfile, ValidateExt};
use gym_repository::{TraineeRepository, TrainerRepository, UserAccountRepository};
use gym_security::PasswordHasherInterface;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Trainer service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = TrainerService)]
pub struct TrainerServiceImpl {
    #[shaku(inject)]
    trainer_repository: Arc<dyn TrainerRepository>,
    #[shaku(inject)]
    trainee_repository: Arc<dyn TraineeRepository>,
    #[shaku(inject)]
    account_repository: Arc<dyn UserAccountRepository>,
    #[shaku(inject)]
    password_hasher: Arc<dyn PasswordHasherInterface>,
    settings: CredentialSettings,
}

impl TrainerServiceImpl {
    /// Creates a new trainer service.
    pub fn new(
        trainer_repository: Arc<dyn TrainerRepository>,
        trainee_repository: Arc<dyn TraineeRepository>,
        account_repository: Arc<dyn UserAccountRepository>,
        password_hasher: Arc<dyn PasswordHasherInterface>,
        settings: CredentialSettings,
    ) -> Self {
        Self {
            trainer_repository,
            trainee_repository,
            account_repository,
            password_hasher,
            settings,
        }
    }

    async fn require(&self, id: TrainerId) -> GymResult<Trainer> {
        self.trainer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| GymError::not_found("Trainer", id))
    }
}

#[async_trait]
impl TrainerService for TrainerServiceImpl {
    async fn register(&self, request: RegisterTrainerRequest) -> GymResult<RegistrationResponse> {
        debug!("Registering trainer: {} {}", request.first_name, request.last_name);

        request.validate_request()?;

        let password_hash =
            credentials::hash_new_password(self.password_hasher.as_ref(), &self.settings.policy, &request.password)?;

        let first_name = request.first_name.trim();
        let last_name = request.last_name.trim();
        let specialization = request.specialization;

        let saved = credentials::register_with_retry(
            self.account_repository.as_ref(),
            first_name,
            last_name,
            self.settings.max_registration_attempts,
            |username| {
                let trainer = Trainer::new(
                    UserProfile::new(first_name, last_name, username, password_hash.as_str()),
                    specialization,
                );
                let repository = &self.trainer_repository;
                async move { repository.save(&trainer).await }
            },
        )
        .await?;

        info!(
            "Trainer registered: {} ({})",
            saved.profile.username,
            saved.specialization.as_str()
        );
        Ok(RegistrationResponse::from(&saved))
    }

    async fn get(&self, id: TrainerId) -> GymResult<TrainerResponse> {
        debug!("Getting trainer: {}", id);
        Ok(TrainerResponse::from(self.require(id).await?))
    }

    async fn get_by_username(&self, username: &str) -> GymResult<TrainerResponse> {
        debug!("Getting trainer by username: {}", username);

        let trainer = self
            .trainer_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| GymError::not_found("Trainer", username))?;

        Ok(TrainerResponse::from(trainer))
    }

    async fn list(&self) -> GymResult<Vec<TrainerResponse>> {
        let trainers = self.trainer_repository.find_all().await?;
        Ok(trainers.into_iter().map(TrainerResponse::from).collect())
    }

    async fn update(&self, id: TrainerId, request: UpdateTrainerRequest) -> GymResult<TrainerResponse> {
        debug!("Updating trainer: {}", id);

        request.validate_request()?;

        let mut trainer = self.require(id).await?;
        trainer.update_details(
            request.first_name.trim().to_string(),
            request.last_name.trim().to_string(),
            request.specialization,
        );

        let updated = self.trainer_repository.update(&trainer).await?;

        info!("Trainer updated: {}", id);
        Ok(TrainerResponse::from(updated))
    }

    async fn change_password(&self, request: ChangePasswordRequest) -> GymResult<()> {
        debug!("Changing password for trainer: {}", request.username);

        request.validate_request()?;

        let trainer = self.trainer_repository.find_by_username(&request.username).await?;

        let new_hash = credentials::rotate_password(
            self.password_hasher.as_ref(),
            &self.settings.policy,
            trainer.as_ref(),
            &request.old_password,
            &request.new_password,
        )
        .inspect_err(|e| warn!("Password change rejected for {}: {}", request.username, e.error_code()))?;

        let id = trainer.map(|t| t.id).ok_or(GymError::InvalidCredentials)?;
        self.trainer_repository.update_password(id, &new_hash).await?;

        info!("Password changed for trainer: {}", request.username);
        Ok(())
    }

    async fn authenticate(&self, request: LoginRequest) -> GymResult<TrainerResponse> {
        debug!("Authenticating trainer: {}", request.username);

        request.validate_request()?;

        let trainer = self.trainer_repository.find_by_username(&request.username).await?;

        credentials::verify_credentials(self.password_hasher.as_ref(), trainer.as_ref(), &request.password)
            .inspect_err(|_| warn!("Failed login for trainer: {}", request.username))?;

        trainer
            .map(TrainerResponse::from)
            .ok_or(GymError::InvalidCredentials)
    }

    async fn activate(&self, id: TrainerId) -> GymResult<()> {
        self.trainer_repository.set_active(id, true).await?;
        info!("Trainer activated: {}", id);
        Ok(())
    }

    async fn deactivate(&self, id: TrainerId) -> GymResult<()> {
        self.trainer_repository.set_active(id, false).await?;
        info!("Trainer deactivated: {}", id);
        Ok(())
    }

    async fn list_unassigned_for_trainee(&self, trainee_username: &str) -> GymResult<Vec<TrainerResponse>> {
        if self.trainee_repository.find_by_username(trainee_username).await?.is_none() {
            return Err(GymError::not_found("Trainee", trainee_username));
        }

        let trainers = self
            .trainer_repository
            .find_not_assigned_to_trainee(trainee_username)
            .await?;

        Ok(trainers.into_iter().map(TrainerResponse::from).collect())
    }
}

impl std::fmt::Debug for TrainerServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrainerServiceImpl")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
