//! Trainer entity.

use super::super::value_objects::TrainingType;
use super::UserProfile;
use crate::{Entity, Identity, TrainerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A gym employee who runs trainings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainer {
    /// Unique identifier for the trainer.
    pub id: TrainerId,

    /// Identity and credential data.
    #[serde(flatten)]
    pub profile: UserProfile,

    /// Training type the trainer specializes in.
    pub specialization: TrainingType,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Trainer {
    /// Creates a new trainer.
    #[must_use]
    pub fn new(profile: UserProfile, specialization: TrainingType) -> Self {
        let now = Utc::now();
        Self {
            id: TrainerId::new(),
            profile,
            specialization,
            created_at: now,
            updated_at: now,
        }
    }

    /// Updates the mutable details. Username and password are untouched.
    pub fn update_details(&mut self, first_name: String, last_name: String, specialization: TrainingType) {
        self.profile.first_name = first_name;
        self.profile.last_name = last_name;
        self.specialization = specialization;
        self.updated_at = Utc::now();
    }

    /// Replaces the password hash.
    pub fn update_password(&mut self, password_hash: String) {
        self.profile.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Activates or deactivates the account.
    pub fn set_active(&mut self, active: bool) {
        self.profile.is_active = active;
        self.updated_at = Utc::now();
    }
}

impl Entity<TrainerId> for Trainer {
    fn id(&self) -> &TrainerId {
        &self.id
    }
}

impl Identity for Trainer {
    fn username(&self) -> &str {
        &self.profile.username
    }

    fn password_hash(&self) -> &str {
        &self.profile.password_hash
    }

    fn is_active(&self) -> bool {
        self.profile.is_active
    }
}
