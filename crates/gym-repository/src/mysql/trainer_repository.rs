//! MySQL trainer repository implementation.

use super::parse_uuid;
use crate::{traits::TrainerRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gym_core::{GymError, GymResult, Trainer, TrainerId, TrainingType, UserProfile};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, info};

const SELECT_TRAINER: &str = r#"
    SELECT u.id, u.first_name, u.last_name, u.username, u.password_hash, u.is_active,
           r.specialization, u.created_at, u.updated_at
    FROM trainers r
    JOIN users u ON u.id = r.user_id
"#;

/// MySQL trainer repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = TrainerRepository)]
pub struct MySqlTrainerRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlTrainerRepository {
    /// Creates a new MySQL trainer repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct TrainerRow {
    id: String,
    first_name: String,
    last_name: String,
    username: String,
    password_hash: String,
    is_active: bool,
    specialization: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<TrainerRow> for Trainer {
    type Error = GymError;

    fn try_from(row: TrainerRow) -> Result<Self, Self::Error> {
        let specialization: TrainingType = row
            .specialization
            .parse()
            .map_err(|e| GymError::Internal(format!("Invalid specialization in database: {}", e)))?;

        let mut profile = UserProfile::new(row.first_name, row.last_name, row.username, row.password_hash);
        profile.is_active = row.is_active;

        Ok(Trainer {
            id: TrainerId::from_uuid(parse_uuid(&row.id)?),
            profile,
            specialization,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl TrainerRepository for MySqlTrainerRepository {
    async fn find_by_id(&self, id: TrainerId) -> GymResult<Option<Trainer>> {
        debug!("Finding trainer by id: {}", id);

        let sql = format!("{SELECT_TRAINER} WHERE u.id = ?");
        let row = sqlx::query_as::<_, TrainerRow>(&sql)
            .bind(id.to_string())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Trainer::try_from).transpose()
    }

    async fn find_by_username(&self, username: &str) -> GymResult<Option<Trainer>> {
        debug!("Finding trainer by username: {}", username);

        let sql = format!("{SELECT_TRAINER} WHERE u.username = ?");
        let row = sqlx::query_as::<_, TrainerRow>(&sql)
            .bind(username)
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Trainer::try_from).transpose()
    }

    async fn find_all(&self) -> GymResult<Vec<Trainer>> {
        debug!("Finding all trainers");

        let sql = format!("{SELECT_TRAINER} ORDER BY u.username");
        let rows = sqlx::query_as::<_, TrainerRow>(&sql)
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(Trainer::try_from).collect()
    }

    async fn save(&self, trainer: &Trainer) -> GymResult<Trainer> {
        debug!("Saving new trainer: {}", trainer.profile.username);

        let id_str = trainer.id.to_string();
        let mut tx = self.pool.inner().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, username, password_hash,
                               is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id_str)
        .bind(&trainer.profile.first_name)
        .bind(&trainer.profile.last_name)
        .bind(&trainer.profile.username)
        .bind(&trainer.profile.password_hash)
        .bind(trainer.profile.is_active)
        .bind(trainer.created_at)
        .bind(trainer.updated_at)
        .execute(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO trainers (user_id, specialization) VALUES (?, ?)")
            .bind(&id_str)
            .bind(trainer.specialization.as_str())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        info!("Saved trainer: {}", trainer.profile.username);

        self.find_by_id(trainer.id)
            .await?
            .ok_or_else(|| GymError::Internal("Failed to fetch inserted trainer".to_string()))
    }

    async fn update(&self, trainer: &Trainer) -> GymResult<Trainer> {
        debug!("Updating trainer: {}", trainer.id);

        let result = sqlx::query(
            r#"
            UPDATE users u
            JOIN trainers r ON r.user_id = u.id
            SET u.first_name = ?, u.last_name = ?, u.updated_at = ?,
                r.specialization = ?
            WHERE u.id = ?
            "#,
        )
        .bind(&trainer.profile.first_name)
        .bind(&trainer.profile.last_name)
        .bind(trainer.updated_at)
        .bind(trainer.specialization.as_str())
        .bind(trainer.id.to_string())
        .execute(self.pool.inner())
        .await?;

        if result.rows_affected() == 0 {
            return Err(GymError::not_found("Trainer", trainer.id));
        }

        self.find_by_id(trainer.id)
            .await?
            .ok_or_else(|| GymError::Internal("Failed to fetch updated trainer".to_string()))
    }

    async fn update_password(&self, id: TrainerId, password_hash: &str) -> GymResult<()> {
        debug!("Updating password for trainer: {}", id);

        let result = sqlx::query(
            r#"
            UPDATE users u
            JOIN trainers r ON r.user_id = u.id
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
            return Err(GymError::not_found("Trainer", id));
        }
        Ok(())
    }

    async fn set_active(&self, id: TrainerId, active: bool) -> GymResult<()> {
        debug!("Setting trainer {} active={}", id, active);

        let result = sqlx::query(
            r#"
            UPDATE users u
            JOIN trainers r ON r.user_id = u.id
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
            return Err(GymError::not_found("Trainer", id));
        }
        Ok(())
    }

    async fn find_not_assigned_to_trainee(&self, trainee_username: &str) -> GymResult<Vec<Trainer>> {
        debug!("Finding trainers not assigned to trainee: {}", trainee_username);

        let sql = format!(
            r#"{SELECT_TRAINER}
            WHERE r.user_id NOT IN (
                SELECT tt.trainer_id
                FROM trainee_trainers tt
                JOIN users tu ON tu.id = tt.trainee_id
                WHERE tu.username = ?
            )
            ORDER BY u.username"#
        );
        let rows = sqlx::query_as::<_, TrainerRow>(&sql)
            .bind(trainee_username)
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(Trainer::try_from).collect()
    }
}

impl std::fmt::Debug for MySqlTrainerRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlTrainerRepository").finish_non_exhaustive()
    }
}
