//! Credential flows shared by trainee and trainer services.
//!
//! Registration, password rotation and authentication are written once over
//! the [`Identity`] trait so both person kinds follow the same rules.

use gym_config::AppConfig;
use gym_core::{GymError, GymResult, Identity};
use gym_repository::UserAccountRepository;
use gym_security::{PasswordHasherInterface, PasswordPolicy, UsernameGenerator};
use std::collections::HashSet;
use std::future::Future;
use tracing::{debug, warn};

/// Default number of persist attempts for one registration.
pub const DEFAULT_MAX_REGISTRATION_ATTEMPTS: u32 = 3;

/// Tunables for the credential flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialSettings {
    /// Password rules applied at registration and rotation.
    pub policy: PasswordPolicy,
    /// How many times a registration may hit a username conflict at persist
    /// time before the conflict is returned.
    pub max_registration_attempts: u32,
}

impl CredentialSettings {
    /// Builds settings from the application configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            policy: PasswordPolicy::new(
                config.security.password_min_length,
                config.security.password_max_length,
            ),
            max_registration_attempts: config.identity.max_registration_attempts.max(1),
        }
    }
}

impl Default for CredentialSettings {
    fn default() -> Self {
        Self {
            policy: PasswordPolicy::default(),
            max_registration_attempts: DEFAULT_MAX_REGISTRATION_ATTEMPTS,
        }
    }
}

/// Validates a new password and hashes it.
///
/// A policy violation is returned before any hashing happens.
pub(crate) fn hash_new_password(
    hasher: &dyn PasswordHasherInterface,
    policy: &PasswordPolicy,
    password: &str,
) -> GymResult<String> {
    policy.enforce(password)?;
    hasher.hash(password)
}

/// Generates a username and persists the new identity, retrying on conflict.
///
/// `persist` receives the candidate username and writes the entity. When it
/// fails with [`GymError::Conflict`] (another writer took the name between
/// the availability check and the insert), the candidate is excluded and
/// generation resumes from the next suffix. After `max_attempts` conflicts
/// the last conflict is returned.
pub(crate) async fn register_with_retry<T, F, Fut>(
    accounts: &dyn UserAccountRepository,
    first_name: &str,
    last_name: &str,
    max_attempts: u32,
    mut persist: F,
) -> GymResult<T>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = GymResult<T>>,
{
    let mut rejected: HashSet<String> = HashSet::new();
    let mut attempt = 0;

    loop {
        attempt += 1;

        let username = UsernameGenerator::generate(first_name, last_name, |candidate| {
            let known_taken = rejected.contains(&candidate);
            async move {
                if known_taken {
                    return Ok(true);
                }
                accounts.exists_by_username(&candidate).await
            }
        })
        .await?;

        match persist(username.clone()).await {
            Ok(saved) => return Ok(saved),
            Err(GymError::Conflict(reason)) if attempt < max_attempts => {
                warn!(
                    username = %username,
                    attempt,
                    "Username taken at persist time, retrying: {}",
                    reason
                );
                rejected.insert(username);
            }
            Err(e) => return Err(e),
        }
    }
}

/// Checks the old password and produces the replacement hash.
///
/// An unknown account and a wrong password both yield
/// [`GymError::InvalidCredentials`]; for an unknown account a full
/// verification against a stand-in hash still runs so the two cases take
/// the same time. The new password is only validated after the old one
/// checked out.
pub(crate) fn rotate_password<I: Identity>(
    hasher: &dyn PasswordHasherInterface,
    policy: &PasswordPolicy,
    account: Option<&I>,
    old_password: &str,
    new_password: &str,
) -> GymResult<String> {
    verify_credentials(hasher, account, old_password)?;
    hash_new_password(hasher, policy, new_password)
}

/// Verifies a login attempt.
pub(crate) fn verify_credentials<I: Identity>(
    hasher: &dyn PasswordHasherInterface,
    account: Option<&I>,
    password: &str,
) -> GymResult<()> {
    let Some(account) = account else {
        let _ = hasher.verify_dummy(password);
        debug!("Credential check failed: unknown account");
        return Err(GymError::InvalidCredentials);
    };

    if !hasher.verify(password, account.password_hash()) {
        debug!("Credential check failed for {}", account.username());
        return Err(GymError::InvalidCredentials);
    }

    Ok(())
}
