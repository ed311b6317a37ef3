//! MySQL trainee repository implementation.

use super::parse_uuid;
use crate::{traits::TraineeRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use gym_core::{GymError, GymResult, Trainee, TraineeId, TrainerId, UserProfile};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, info};

const SELECT_TRAINEE: &str = r#"
    SELECT u.id, u.first_name, u.last_name, u.username, u.password_hash, u.is_active,
           t.date_of_birth, t.address, u.created_at, u.updated_at
    FROM trainees t
    JOIN users u ON u.id = t.user_id
"#;

/// MySQL trainee repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = TraineeRepository)]
pub struct MySqlTraineeRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlTraineeRepository {
    /// Creates a new MySQL trainee repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a trainee joined with its user row.
#[derive(Debug, FromRow)]
struct TraineeRow {
    id: String, // CHAR(36)
    first_name: String,
    last_name: String,
    username: String,
    password_hash: String,
    is_active: bool,
    date_of_birth: Option<NaiveDate>,
    address: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TraineeRow> for Trainee {
    type Error = GymError;

    fn try_from(row: TraineeRow) -> Result<Self, Self::Error> {
        let mut profile = UserProfile::new(row.first_name, row.last_name, row.username, row.password_hash);
        profile.is_active = row.is_active;

        Ok(Trainee {
            id: TraineeId::from_uuid(parse_uuid(&row.id)?),
            profile,
            date_of_birth: row.date_of_birth,
            address: row.address,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TraineeRepository for MySqlTraineeRepository {
    async fn find_by_id(&self, id: TraineeId) -> GymResult<Option<Trainee>> {
        debug!("Finding trainee by id: {}", id);

        let sql = format!("{SELECT_TRAINEE} WHERE u.id = ?");
        let row = sqlx::query_as::<_, TraineeRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Trainee::try_from).transpose()
    }

    async fn find_by_username(&self, username: &str) -> GymResult<Option<Trainee>> {
        debug!("Finding trainee by username: {}", username);

        let sql = format!("{SELECT_TRAINEE} WHERE u.username = ?");
        let row = sqlx::query_as::<_, TraineeRow>(&sql)
            .bind(username)
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Trainee::try_from).transpose()
    }

    async fn find_all(&self) -> GymResult<Vec<Trainee>> {
        debug!("Finding all trainees");

        let sql = format!("{SELECT_TRAINEE} ORDER BY u.username");
        let rows = sqlx::query_as::<_, TraineeRow>(&sql)
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(Trainee::try_from).collect()
    }

    async fn save(&self, trainee: &Trainee) -> GymResult<Trainee> {
        debug!("Saving new trainee: {}", trainee.profile.username);

        let id_str = trainee.id.to_string();
        let mut tx = self.pool.inner().begin().await?;

        // The unique index on users.username rejects duplicates across
        // trainees and trainers alike.
        sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, username, password_hash,
                               is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id_str)
        .bind(&trainee.profile.first_name)
        .bind(&trainee.profile.last_name)
        .bind(&trainee.profile.username)
        .bind(&trainee.profile.password_hash)
        .bind(trainee.profile.is_active)
        .bind(trainee.created_at)
        .bind(trainee.updated_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO trainees (user_id, date_of_birth, address) VALUES (?, ?, ?)")
            .bind(&id_str)
            .bind(trainee.date_of_birth)
            .bind(&trainee.address)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        info!("Saved trainee: {}", trainee.profile.username);

        self.find_by_id(trainee.id)
            .await?
            .ok_or_else(|| GymError::Internal("Failed to fetch inserted trainee".to_string()))
    }

    async fn update(&self, trainee: &Trainee) -> GymResult<Trainee> {
        debug!("Updating trainee: {}", trainee.id);

        let result = sqlx::query(
            r#"
            UPDATE users u
            JOIN trainees t ON t.user_id = u.id
            SET u.first_name = ?, u.last_name = ?, u.updated_at = ?,
                t.date_of_birth = ?, t.address = ?
            WHERE u.id = ?
            "#,
        )
        .bind(&trainee.profile.first_name)
        .bind(&trainee.profile.last_name)
        .bind(trainee.updated_at)
        .bind(trainee.date_of_birth)
        .bind(&trainee.address)
        .bind(trainee.id.to_string())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(GymError::not_found("Trainee", trainee.id));
        }

        self.find_by_id(trainee.id)
            .await?
            .ok_or_else(|| GymError::Internal("Failed to fetch updated trainee".to_string()))
    }

    async fn update_password(&self, id: TraineeId, password_hash: &str) -> GymResult<()> {
        debug!("Updating password for trainee: {}", id);

        let result = sqlx::query(
            r#"
            UPDATE users u
            JOIN trainees t ON t.user_id = u.id
            SET u.password_hash = ?, u.updated_at = ?
            WHERE u.id = ?
            "#,
        )
        .bind(password_hash)
        .bind(Utc::now())
        .bind(id.to_string())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(GymError::not_found("Trainee", id));
        }
        Ok(())
    }

    async fn set_active(&self, id: TraineeId, active: bool) -> GymResult<()> {
        debug!("Setting trainee {} active={}", id, active);

        let result = sqlx::query(
            r#"
            UPDATE users u
            JOIN trainees t ON t.user_id = u.id
            SET u.is_active = ?, u.updated_at = ?
            WHERE u.id = ?
            "#,
        )
        .bind(active)
        .bind(Utc::now())
        .bind(id.to_string())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(GymError::not_found("Trainee", id));
        }
        Ok(())
    }

    async fn delete(&self, id: TraineeId) -> GymResult<bool> {
        debug!("Deleting trainee: {}", id);

        // Cascades to the trainees row and its trainer assignments.
        let result = sqlx::query("DELETE FROM users WHERE id = ? AND id IN (SELECT user_id FROM trainees)")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn assign_trainer(&self, trainee_id: TraineeId, trainer_id: TrainerId) -> GymResult<()> {
        debug!("Assigning trainer {} to trainee {}", trainer_id, trainee_id);

        sqlx::query("INSERT IGNORE INTO trainee_trainers (trainee_id, trainer_id) VALUES (?, ?)")
            .bind(trainee_id.to_string())
            .bind(trainer_id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }
}

impl std::fmt::Debug for MySqlTraineeRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlTraineeRepository").finish_non_exhaustive()
    }
}
