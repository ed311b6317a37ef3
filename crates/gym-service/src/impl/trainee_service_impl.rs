//! Trainee service implementation.

use crate::credentials::{self, CredentialSettings};
use crate::dto::{
    ChangePasswordRequest, LoginRequest, RegisterTraineeRequest, RegistrationResponse, TraineeResponse,
    UpdateTraineeRequest,
};
use crate::trainee_service::TraineeService;
use async_trait::async_trait;
use gym_core::{GymError, GymResult, Trainee, TraineeId, UserProfile, ValidateExt};
use gym_repository::{TraineeRepository, TrainerRepository, UserAccountRepository};
use gym_security::PasswordHasherInterface;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Trainee service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = TraineeService)]
pub struct TraineeServiceImpl {
    #[shaku(inject)]
    trainee_repository: Arc<dyn TraineeRepository>,
    #[shaku(inject)]
    trainer_repository: Arc<dyn TrainerRepository>,
    #[shaku(inject)]
    account_repository: Arc<dyn UserAccountRepository>,
    #[shaku(inject)]
    password_hasher: Arc<dyn PasswordHasherInterface>,
    settings: CredentialSettings,
}

impl TraineeServiceImpl {
    /// Creates a new trainee service.
    pub fn new(
        trainee_repository: Arc<dyn TraineeRepository>,
        trainer_repository: Arc<dyn TrainerRepository>,
        account_repository: Arc<dyn UserAccountRepository>,
        password_hasher: Arc<dyn PasswordHasherInterface>,
        settings: CredentialSettings,
    ) -> Self {
        Self {
            trainee_repository,
            trainer_repository,
            account_repository,
            password_hasher,
            settings,
        }
    }

    async fn require_by_username(&self, username: &str) -> GymResult<Trainee> {
        self.trainee_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| GymError::not_found("Trainee", username))
    }
}

#[async_trait]
impl TraineeService for TraineeServiceImpl {
    async fn register(&self, request: RegisterTraineeRequest) -> GymResult<RegistrationResponse> {
        debug!("Registering trainee: {} {}", request.first_name, request.last_name);

        request.validate_request()?;

        let password_hash =
            credentials::hash_new_password(self.password_hasher.as_ref(), &self.settings.policy, &request.password)?;

        let first_name = request.first_name.trim();
        let last_name = request.last_name.trim();

        let saved = credentials::register_with_retry(
            self.account_repository.as_ref(),
            first_name,
            last_name,
            self.settings.max_registration_attempts,
            |username| {
                let trainee = Trainee::new(
                    UserProfile::new(first_name, last_name, username, password_hash.as_str()),
                    request.date_of_birth,
                    request.address.clone(),
                );
                let repository = &self.trainee_repository;
                async move { repository.save(&trainee).await }
            },
        )
        .await?;

        info!("Trainee registered: {}", saved.profile.username);
        Ok(RegistrationResponse::from(&saved))
    }

    async fn get(&self, id: TraineeId) -> GymResult<TraineeResponse> {
        debug!("Getting trainee: {}", id);

        let trainee = self
            .trainee_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| GymError::not_found("Trainee", id))?;

        Ok(TraineeResponse::from(trainee))
    }

    async fn get_by_username(&self, username: &str) -> GymResult<TraineeResponse> {
        debug!("Getting trainee by username: {}", username);

        let trainee = self.require_by_username(username).await?;
        Ok(TraineeResponse::from(trainee))
    }

    async fn list(&self) -> GymResult<Vec<TraineeResponse>> {
        let trainees = self.trainee_repository.find_all().await?;
        debug!("Listing {} trainees", trainees.len());
        Ok(trainees.into_iter().map(TraineeResponse::from).collect())
    }

    async fn update(&self, id: TraineeId, request: UpdateTraineeRequest) -> GymResult<TraineeResponse> {
        debug!("Updating trainee: {}", id);

        request.validate_request()?;

        let mut trainee = self
            .trainee_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| GymError::not_found("Trainee", id))?;

        trainee.update_details(
            request.first_name.trim().to_string(),
            request.last_name.trim().to_string(),
            request.date_of_birth,
            request.address,
        );

        let updated = self.trainee_repository.update(&trainee).await?;

        info!("Trainee updated: {}", id);
        Ok(TraineeResponse::from(updated))
    }

    async fn change_password(&self, request: ChangePasswordRequest) -> GymResult<()> {
        debug!("Changing password for trainee: {}", request.username);

        request.validate_request()?;

        let trainee = self.trainee_repository.find_by_username(&request.username).await?;

        let new_hash = credentials::rotate_password(
            self.password_hasher.as_ref(),
            &self.settings.policy,
            trainee.as_ref(),
            &request.old_password,
            &request.new_password,
        )
        .inspect_err(|e| warn!("Password change rejected for {}: {}", request.username, e.error_code()))?;

        let id = trainee.map(|t| t.id).ok_or(GymError::InvalidCredentials)?;
        self.trainee_repository.update_password(id, &new_hash).await?;

        info!("Password changed for trainee: {}", request.username);
        Ok(())
    }

    async fn authenticate(&self, request: LoginRequest) -> GymResult<TraineeResponse> {
        debug!("Authenticating trainee: {}", request.username);

        request.validate_request()?;

        let trainee = self.trainee_repository.find_by_username(&request.username).await?;

        credentials::verify_credentials(self.password_hasher.as_ref(), trainee.as_ref(), &request.password)
            .inspect_err(|_| warn!("Failed login for trainee: {}", request.username))?;

        trainee
            .map(TraineeResponse::from)
            .ok_or(GymError::InvalidCredentials)
    }

    async fn activate(&self, id: TraineeId) -> GymResult<()> {
        self.trainee_repository.set_active(id, true).await?;
        info!("Trainee activated: {}", id);
        Ok(())
    }

    async fn deactivate(&self, id: TraineeId) -> GymResult<()> {
        self.trainee_repository.set_active(id, false).await?;
        info!("Trainee deactivated: {}", id);
        Ok(())
    }

    async fn delete(&self, id: TraineeId) -> GymResult<()> {
        debug!("Deleting trainee: {}", id);

        if !self.trainee_repository.delete(id).await? {
            return Err(GymError::not_found("Trainee", id));
        }

        info!("Trainee deleted: {}", id);
        Ok(())
    }

    async fn delete_by_username(&self, username: &str) -> GymResult<()> {
        debug!("Deleting trainee by username: {}", username);

        let trainee = self.require_by_username(username).await?;
        self.delete(trainee.id).await
    }

    async fn assign_trainer(&self, trainee_username: &str, trainer_username: &str) -> GymResult<()> {
        let trainee = self.require_by_username(trainee_username).await?;
        let trainer = self
            .trainer_repository
            .find_by_username(trainer_username)
            .await?
            .ok_or_else(|| GymError::not_found("Trainer", trainer_username))?;

        self.trainee_repository.assign_trainer(trainee.id, trainer.id).await?;

        info!("Trainer {} assigned to trainee {}", trainer_username, trainee_username);
        Ok(())
    }
}

impl std::fmt::Debug for TraineeServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraineeServiceImpl")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockAccountRepository, MockTraineeRepo, MockTrainerRepo};
    use gym_repository::InMemoryIdentityStore;
    use gym_security::PasswordHasher;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn hasher() -> Arc<PasswordHasher> {
        Arc::new(PasswordHasher::with_cost(1))
    }

    fn service_over(store: &Arc<InMemoryIdentityStore>) -> TraineeServiceImpl {
        TraineeServiceImpl::new(
            store.clone(),
            store.clone(),
            store.clone(),
            hasher(),
            CredentialSettings::default(),
        )
    }

    fn register_request(first: &str, last: &str, password: &str) -> RegisterTraineeRequest {
        RegisterTraineeRequest {
            first_name: first.to_string(),
            last_name: last.to_string(),
            password: password.to_string(),
            date_of_birth: None,
            address: Some("1 Gym Street".to_string()),
        }
    }

    fn change_request(username: &str, old: &str, new: &str) -> ChangePasswordRequest {
        ChangePasswordRequest {
            username: username.to_string(),
            old_password: old.to_string(),
            new_password: new.to_string(),
        }
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_generates_username() {
        let store = Arc::new(InMemoryIdentityStore::new());
        let service = service_over(&store);

        let first = service.register(register_request("John", "Smith", "Secret123")).await.unwrap();
        let second = service.register(register_request("John", "Smith", "Secret123")).await.unwrap();

        assert_eq!(first.username, "John.Smith");
        assert_eq!(second.username, "John.Smith1");
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let store = Arc::new(InMemoryIdentityStore::new());
        let service = service_over(&store);

        service.register(register_request("John", "Smith", "Secret123")).await.unwrap();

        let stored = TraineeRepository::find_by_username(store.as_ref(), "John.Smith")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(stored.profile.password_hash, "Secret123");
        assert!(stored.profile.password_hash.starts_with("$argon2id$"));
        assert_eq!(stored.address.as_deref(), Some("1 Gym Street"));
    }

    #[tokio::test]
    async fn test_register_rejects_weak_password_before_any_other_work() {
        // Mocks without expectations panic if touched.
        let service = TraineeServiceImpl::new(
            Arc::new(MockTraineeRepo::new()),
            Arc::new(MockTrainerRepo::new()),
            Arc::new(MockAccountRepository::new()),
            hasher(),
            CredentialSettings::default(),
        );

        let result = service.register(register_request("John", "Smith", "abc")).await;
        assert!(matches!(result, Err(GymError::PolicyViolation(_))));
    }

    #[tokio::test]
    async fn test_register_accepts_multi_word_names() {
        let store = Arc::new(InMemoryIdentityStore::new());
        let service = service_over(&store);

        let mary = service.register(register_request("Mary Ann", "Lee", "Secret123")).await.unwrap();
        let john = service.register(register_request("John", "St. James", "Secret123")).await.unwrap();
        let again = service.register(register_request("Mary Ann", " Lee ", "Secret123")).await.unwrap();

        assert_eq!(mary.username, "Mary Ann.Lee");
        assert_eq!(john.username, "John.St. James");
        assert_eq!(again.username, "Mary Ann.Lee1");
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_names() {
        let store = Arc::new(InMemoryIdentityStore::new());
        let service = service_over(&store);

        let result = service.register(register_request("  ", "Smith", "Secret123")).await;
        assert!(matches!(result, Err(GymError::Validation(_))));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_register_retries_after_persist_conflict() {
        let mut accounts = MockAccountRepository::new();
        accounts.expect_exists_by_username().returning(|_| Ok(false));

        let attempts = Arc::new(AtomicU32::new(0));
        let counter = attempts.clone();
        let mut trainees = MockTraineeRepo::new();
        trainees.expect_save().times(2).returning(move |trainee| {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(GymError::conflict("Duplicate entry 'John.Smith' for key 'username'"))
            } else {
                Ok(trainee.clone())
            }
        });

        let service = TraineeServiceImpl::new(
            Arc::new(trainees),
            Arc::new(MockTrainerRepo::new()),
            Arc::new(accounts),
            hasher(),
            CredentialSettings::default(),
        );

        let response = service.register(register_request("John", "Smith", "Secret123")).await.unwrap();
        assert_eq!(response.username, "John.Smith1");
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_register_surfaces_conflict_after_max_attempts() {
        let mut accounts = MockAccountRepository::new();
        accounts.expect_exists_by_username().returning(|_| Ok(false));

        let mut trainees = MockTraineeRepo::new();
        trainees
            .expect_save()
            .times(3)
            .returning(|_| Err(GymError::conflict("Duplicate entry")));

        let service = TraineeServiceImpl::new(
            Arc::new(trainees),
            Arc::new(MockTrainerRepo::new()),
            Arc::new(accounts),
            hasher(),
            CredentialSettings::default(),
        );

        let result = service.register(register_request("John", "Smith", "Secret123")).await;
        assert!(matches!(result, Err(GymError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_register_propagates_oracle_failure() {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_exists_by_username()
            .returning(|_| Err(GymError::Database("connection refused".to_string())));

        let service = TraineeServiceImpl::new(
            Arc::new(MockTraineeRepo::new()),
            Arc::new(MockTrainerRepo::new()),
            Arc::new(accounts),
            hasher(),
            CredentialSettings::default(),
        );

        let result = service.register(register_request("John", "Smith", "Secret123")).await;
        assert!(matches!(result, Err(GymError::Database(_))));
    }

    #[tokio::test]
    async fn test_change_password_with_correct_old_password() {
        let store = Arc::new(InMemoryIdentityStore::new());
        let service = service_over(&store);
        let username = service
            .register(register_request("John", "Smith", "OldPass123"))
            .await
            .unwrap()
            .username;

        service
            .change_password(change_request(&username, "OldPass123", "NewPass456"))
            .await
            .unwrap();

        assert!(service.authenticate(login(&username, "NewPass456")).await.is_ok());
        assert!(matches!(
            service.authenticate(login(&username, "OldPass123")).await,
            Err(GymError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_change_password_with_wrong_old_password_keeps_hash() {
        let store = Arc::new(InMemoryIdentityStore::new());
        let service = service_over(&store);
        let username = service
            .register(register_request("John", "Smith", "OldPass123"))
            .await
            .unwrap()
            .username;
        let before = TraineeRepository::find_by_username(store.as_ref(), &username)
            .await
            .unwrap()
            .unwrap()
            .profile
            .password_hash;

        let result = service
            .change_password(change_request(&username, "WrongPass1", "NewPass456"))
            .await;
        assert!(matches!(result, Err(GymError::InvalidCredentials)));

        let after = TraineeRepository::find_by_username(store.as_ref(), &username)
            .await
            .unwrap()
            .unwrap()
            .profile
            .password_hash;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_change_password_rejects_weak_new_password() {
        let store = Arc::new(InMemoryIdentityStore::new());
        let service = service_over(&store);
        let username = service
            .register(register_request("John", "Smith", "OldPass123"))
            .await
            .unwrap()
            .username;

        let result = service.change_password(change_request(&username, "OldPass123", "short")).await;
        assert!(matches!(result, Err(GymError::PolicyViolation(_))));
        assert!(service.authenticate(login(&username, "OldPass123")).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_user_looks_like_wrong_password() {
        let store = Arc::new(InMemoryIdentityStore::new());
        let service = service_over(&store);

        let change = service
            .change_password(change_request("No.Body", "Whatever1", "NewPass456"))
            .await;
        assert!(matches!(change, Err(GymError::InvalidCredentials)));

        let auth = service.authenticate(login("No.Body", "Whatever1")).await;
        assert!(matches!(auth, Err(GymError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_update_keeps_username() {
        let store = Arc::new(InMemoryIdentityStore::new());
        let service = service_over(&store);
        let registered = service
            .register(register_request("John", "Smith", "Secret123"))
            .await
            .unwrap();
        let id = TraineeId::from_uuid(registered.id);

        let updated = service
            .update(
                id,
                UpdateTraineeRequest {
                    first_name: "Jonathan".to_string(),
                    last_name: "Smith".to_string(),
                    date_of_birth: None,
                    address: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Jonathan");
        assert_eq!(updated.username, "John.Smith");
        assert!(updated.address.is_none());
    }

    #[tokio::test]
    async fn test_activate_and_deactivate() {
        let store = Arc::new(InMemoryIdentityStore::new());
        let service = service_over(&store);
        let registered = service
            .register(register_request("John", "Smith", "Secret123"))
            .await
            .unwrap();
        let id = TraineeId::from_uuid(registered.id);

        service.deactivate(id).await.unwrap();
        assert!(!service.get(id).await.unwrap().is_active);

        service.activate(id).await.unwrap();
        assert!(service.get(id).await.unwrap().is_active);

        let missing = service.activate(TraineeId::new()).await;
        assert!(matches!(missing, Err(GymError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_by_username() {
        let store = Arc::new(InMemoryIdentityStore::new());
        let service = service_over(&store);
        service
            .register(register_request("John", "Smith", "Secret123"))
            .await
            .unwrap();

        service.delete_by_username("John.Smith").await.unwrap();
        assert!(matches!(
            service.get_by_username("John.Smith").await,
            Err(GymError::NotFound { .. })
        ));

        let again = service.delete_by_username("John.Smith").await;
        assert!(matches!(again, Err(GymError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_and_get() {
        let store = Arc::new(InMemoryIdentityStore::new());
        let service = service_over(&store);
        service.register(register_request("Ann", "Lee", "Secret123")).await.unwrap();
        service.register(register_request("Bob", "Ray", "Secret123")).await.unwrap();

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(service.get_by_username("Bob.Ray").await.unwrap().first_name, "Bob");
        assert!(matches!(service.get(TraineeId::new()).await, Err(GymError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_assign_trainer_requires_both_sides() {
        let store = Arc::new(InMemoryIdentityStore::new());
        let service = service_over(&store);
        service.register(register_request("Ann", "Lee", "Secret123")).await.unwrap();

        let result = service.assign_trainer("Ann.Lee", "No.Trainer").await;
        assert!(matches!(result, Err(GymError::NotFound { resource_type: "Trainer", .. })));

        let result = service.assign_trainer("No.Trainee", "No.Trainer").await;
        assert!(matches!(result, Err(GymError::NotFound { resource_type: "Trainee", .. })));
    }
}
