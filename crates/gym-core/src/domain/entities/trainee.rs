//! Trainee entity.

use super::UserProfile;
use crate::{Entity, Identity, TraineeId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A gym member who attends trainings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trainee {
    /// Unique identifier for the trainee.
    pub id: TraineeId,

    /// Identity and credential data.
    #[serde(flatten)]
    pub profile: UserProfile,

    /// Date of birth.
    pub date_of_birth: Option<NaiveDate>,

    /// Postal address.
    pub address: Option<String>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Trainee {
    /// Creates a new trainee.
    #[must_use]
    pub fn new(profile: UserProfile, date_of_birth: Option<NaiveDate>, address: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TraineeId::new(),
            profile,
            date_of_birth,
            address,
            created_at: now,
            updated_at: now,
        }
    }

    /// Updates the mutable personal details. Username and password are untouched.
    pub fn update_details(
        &mut self,
        first_name: String,
        last_name: String,
        date_of_birth: Option<NaiveDate>,
        address: Option<String>,
    ) {
        self.profile.first_name = first_name;
        self.profile.last_name = last_name;
        self.date_of_birth = date_of_birth;
        self.address = address;
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

impl Entity<TraineeId> for Trainee {
    fn id(&self) -> &TraineeId {
        &self.id
    }
}

impl Identity for Trainee {
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
