//! MySQL identity-wide account lookups.

use crate::{traits::UserAccountRepository, DatabasePoolInterface};
use async_trait::async_trait;
use gym_core::GymResult;
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// MySQL account repository over the shared `users` table.
#[derive(Component, Clone)]
#[shaku(interface = UserAccountRepository)]
pub struct MySqlUserAccountRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlUserAccountRepository {
    /// Creates a new MySQL account repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserAccountRepository for MySqlUserAccountRepository {
    async fn exists_by_username(&self, username: &str) -> GymResult<bool> {
        debug!("Checking username availability: {}", username);

        let result: Option<i64> = sqlx::query_scalar("SELECT 1 FROM users WHERE username = ? LIMIT 1")
            .bind(username)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(result.is_some())
    }
}

impl std::fmt::Debug for MySqlUserAccountRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserAccountRepository").finish_non_exhaustive()
    }
}
