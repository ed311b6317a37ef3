//! In-memory identity store.
//!
//! Implements all three repository traits over one shared state so that
//! trainees and trainers draw usernames from a single namespace, exactly as
//! the `users.username` unique index does in MySQL. Used by service tests and
//! for running without a database.

use crate::traits::{TraineeRepository, TrainerRepository, UserAccountRepository};
use async_trait::async_trait;
use gym_core::{GymError, GymResult, Trainee, TraineeId, Trainer, TrainerId};
use std::collections::{HashMap, HashSet};
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Default)]
struct StoreState {
    trainees: HashMap<TraineeId, Trainee>,
    trainers: HashMap<TrainerId, Trainer>,
    usernames: HashSet<String>,
    assignments: HashSet<(TraineeId, TrainerId)>,
}

impl StoreState {
    fn claim_username(&mut self, username: &str) -> GymResult<()> {
        if !self.usernames.insert(username.to_string()) {
            return Err(GymError::conflict(format!("Duplicate entry '{}' for key 'username'", username)));
        }
        Ok(())
    }
}

/// In-memory implementation of the identity repositories.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    state: Mutex<StoreState>,
}

impl InMemoryIdentityStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored identities of both kinds.
    pub async fn len(&self) -> usize {
        self.state.lock().await.usernames.len()
    }

    /// Returns true if no identity is stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserAccountRepository for InMemoryIdentityStore {
    async fn exists_by_username(&self, username: &str) -> GymResult<bool> {
        Ok(self.state.lock().await.usernames.contains(username))
    }
}

#[async_trait]
impl TraineeRepository for InMemoryIdentityStore {
    async fn find_by_id(&self, id: TraineeId) -> GymResult<Option<Trainee>> {
        Ok(self.state.lock().await.trainees.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> GymResult<Option<Trainee>> {
        Ok(self
            .state
            .lock()
            .await
            .trainees
            .values()
            .find(|t| t.profile.username == username)
            .cloned())
    }

    async fn find_all(&self) -> GymResult<Vec<Trainee>> {
        let mut trainees: Vec<Trainee> = self.state.lock().await.trainees.values().cloned().collect();
        trainees.sort_by(|a, b| a.profile.username.cmp(&b.profile.username));
        Ok(trainees)
    }

    async fn save(&self, trainee: &Trainee) -> GymResult<Trainee> {
        let mut state = self.state.lock().await;
        state.claim_username(&trainee.profile.username)?;
        state.trainees.insert(trainee.id, trainee.clone());
        debug!("Stored trainee: {}", trainee.profile.username);
        Ok(trainee.clone())
    }

    async fn update(&self, trainee: &Trainee) -> GymResult<Trainee> {
        let mut state = self.state.lock().await;
        let stored = state
            .trainees
            .get_mut(&trainee.id)
            .ok_or_else(|| GymError::not_found("Trainee", trainee.id))?;

        stored.profile.first_name.clone_from(&trainee.profile.first_name);
        stored.profile.last_name.clone_from(&trainee.profile.last_name);
        stored.date_of_birth = trainee.date_of_birth;
        stored.address.clone_from(&trainee.address);
        stored.updated_at = trainee.updated_at;
        Ok(stored.clone())
    }

    async fn update_password(&self, id: TraineeId, password_hash: &str) -> GymResult<()> {
        let mut state = self.state.lock().await;
        let stored = state
            .trainees
            .get_mut(&id)
            .ok_or_else(|| GymError::not_found("Trainee", id))?;
        stored.update_password(password_hash.to_string());
        Ok(())
    }

    async fn set_active(&self, id: TraineeId, active: bool) -> GymResult<()> {
        let mut state = self.state.lock().await;
        let stored = state
            .trainees
            .get_mut(&id)
            .ok_or_else(|| GymError::not_found("Trainee", id))?;
        stored.set_active(active);
        Ok(())
    }

    async fn delete(&self, id: TraineeId) -> GymResult<bool> {
        let mut state = self.state.lock().await;
        let Some(removed) = state.trainees.remove(&id) else {
            return Ok(false);
        };
        state.usernames.remove(&removed.profile.username);
        state.assignments.retain(|(trainee_id, _)| *trainee_id != id);
        Ok(true)
    }

    async fn assign_trainer(&self, trainee_id: TraineeId, trainer_id: TrainerId) -> GymResult<()> {
        let mut state = self.state.lock().await;
        if !state.trainees.contains_key(&trainee_id) {
            return Err(GymError::not_found("Trainee", trainee_id));
        }
        if !state.trainers.contains_key(&trainer_id) {
            return Err(GymError::not_found("Trainer", trainer_id));
        }
        state.assignments.insert((trainee_id, trainer_id));
        Ok(())
    }
}

#[async_trait]
impl TrainerRepository for InMemoryIdentityStore {
    async fn find_by_id(&self, id: TrainerId) -> GymResult<Option<Trainer>> {
        Ok(self.state.lock().await.trainers.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> GymResult<Option<Trainer>> {
        Ok(self
            .state
            .lock()
            .await
            .trainers
            .values()
            .find(|t| t.profile.username == username)
            .cloned())
    }

    async fn find_all(&self) -> GymResult<Vec<Trainer>> {
        let mut trainers: Vec<Trainer> = self.state.lock().await.trainers.values().cloned().collect();
        trainers.sort_by(|a, b| a.profile.username.cmp(&b.profile.username));
        Ok(trainers)
    }

    async fn save(&self, trainer: &Trainer) -> GymResult<Trainer> {
        let mut state = self.state.lock().await;
        state.claim_username(&trainer.profile.username)?;
        state.trainers.insert(trainer.id, trainer.clone());
        debug!("Stored trainer: {}", trainer.profile.username);
        Ok(trainer.clone())
    }

    async fn update(&self, trainer: &Trainer) -> GymResult<Trainer> {
        let mut state = self.state.lock().await;
        let stored = state
            .trainers
            .get_mut(&trainer.id)
            .ok_or_else(|| GymError::not_found("Trainer", trainer.id))?;

        stored.profile.first_name.clone_from(&trainer.profile.first_name);
        stored.profile.last_name.clone_from(&trainer.profile.last_name);
        stored.specialization = trainer.specialization;
        stored.updated_at = trainer.updated_at;
        Ok(stored.clone())
    }

    async fn update_password(&self, id: TrainerId, password_hash: &str) -> GymResult<()> {
        let mut state = self.state.lock().await;
        let stored = state
            .trainers
            .get_mut(&id)
            .ok_or_else(|| GymError::not_found("Trainer", id))?;
        stored.update_password(password_hash.to_string());
        Ok(())
    }

    async fn set_active(&self, id: TrainerId, active: bool) -> GymResult<()> {
        let mut state = self.state.lock().await;
        let stored = state
            .trainers
            .get_mut(&id)
            .ok_or_else(|| GymError::not_found("Trainer", id))?;
        stored.set_active(active);
        Ok(())
    }

    async fn find_not_assigned_to_trainee(&self, trainee_username: &str) -> GymResult<Vec<Trainer>> {
        let state = self.state.lock().await;
        let trainee_id = state
            .trainees
            .values()
            .find(|t| t.profile.username == trainee_username)
            .map(|t| t.id);

        let mut trainers: Vec<Trainer> = state
            .trainers
            .values()
            .filter(|trainer| match trainee_id {
                Some(id) => !state.assignments.contains(&(id, trainer.id)),
                None => true,
            })
            .cloned()
            .collect();
        trainers.sort_by(|a, b| a.profile.username.cmp(&b.profile.username));
        Ok(trainers)
    }
}
