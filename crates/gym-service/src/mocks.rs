//! Repository mocks for service unit tests.

use async_trait::async_trait;
use gym_core::{GymResult, Trainee, TraineeId, Trainer, TrainerId};
use gym_repository::{TraineeRepository, TrainerRepository, UserAccountRepository};
use mockall::mock;

mock! {
    pub AccountRepository {}

    #[async_trait]
    impl UserAccountRepository for AccountRepository {
        async fn exists_by_username(&self, username: &str) -> GymResult<bool>;
    }
}

mock! {
    pub TraineeRepo {}

    #[async_trait]
    impl TraineeRepository for TraineeRepo {
        async fn find_by_id(&self, id: TraineeId) -> GymResult<Option<Trainee>>;
        async fn find_by_username(&self, username: &str) -> GymResult<Option<Trainee>>;
        async fn find_all(&self) -> GymResult<Vec<Trainee>>;
        async fn save(&self, trainee: &Trainee) -> GymResult<Trainee>;
        async fn update(&self, trainee: &Trainee) -> GymResult<Trainee>;
        async fn update_password(&self, id: TraineeId, password_hash: &str) -> GymResult<()>;
        async fn set_active(&self, id: TraineeId, active: bool) -> GymResult<()>;
        async fn delete(&self, id: TraineeId) -> GymResult<bool>;
        async fn assign_trainer(&self, trainee_id: TraineeId, trainer_id: TrainerId) -> GymResult<()>;
    }
}

mock! {
    pub TrainerRepo {}

    #[async_trait]
    impl TrainerRepository for TrainerRepo {
        async fn find_by_id(&self, id: TrainerId) -> GymResult<Option<Trainer>>;
        async fn find_by_username(&self, username: &str) -> GymResult<Option<Trainer>>;
        async fn find_all(&self) -> GymResult<Vec<Trainer>>;
        async fn save(&self, trainer: &Trainer) -> GymResult<Trainer>;
        async fn update(&self, trainer: &Trainer) -> GymResult<Trainer>;
        async fn update_password(&self, id: TrainerId, password_hash: &str) -> GymResult<()>;
        async fn set_active(&self, id: TrainerId, active: bool) -> GymResult<()>;
        async fn find_not_assigned_to_trainee(&self, trainee_username: &str) -> GymResult<Vec<Trainer>>;
    }
}
