//! Dependency injection module using Shaku.
//!
//! [`GymModule`] wires the MySQL repositories, the password hasher and both
//! person services into a single container. Resolve services with
//! [`shaku::HasComponent`]:
//!
//! ```ignore
//! let module = build_gym_module(&config).await?;
//! let trainees: Arc<dyn TraineeService> = module.resolve();
//! ```

use crate::credentials::CredentialSettings;
use crate::r#impl::{
    TraineeServiceImpl, TraineeServiceImplParameters, TrainerServiceImpl, TrainerServiceImplParameters,
};
use gym_config::AppConfig;
use gym_core::GymResult;
use gym_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, MySqlTraineeRepository, MySqlTrainerRepository,
    MySqlUserAccountRepository,
};
use gym_security::{PasswordHasher, PasswordHasherParameters};
use shaku::module;
use std::sync::Arc;
use tracing::info;

module! {
    pub GymModule {
        components = [
            DatabasePool,
            PasswordHasher,
            MySqlUserAccountRepository,
            MySqlTraineeRepository,
            MySqlTrainerRepository,
            TraineeServiceImpl,
            TrainerServiceImpl,
        ],
        providers = [],
    }
}

/// Connects to the database, runs migrations if configured, and builds the
/// module.
pub async fn build_gym_module(config: &AppConfig) -> GymResult<Arc<GymModule>> {
    let db_pool = DatabasePool::connect(&config.database).await?;

    if config.database.run_migrations {
        db_pool.run_migrations().await?;
    }

    Ok(assemble_gym_module(db_pool, config))
}

/// Builds the module around an existing pool.
#[must_use]
pub fn assemble_gym_module(db_pool: DatabasePool, config: &AppConfig) -> Arc<GymModule> {
    let password_hasher = PasswordHasher::with_cost(config.security.password_hash_cost);
    password_hasher.warm_up();
    let settings = CredentialSettings::from_config(config);

    let module = GymModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.pool(),
        })
        .with_component_parameters::<PasswordHasher>(PasswordHasherParameters {
            argon2: password_hasher.argon2_arc(),
            dummy_hash: password_hasher.dummy_hash_arc(),
        })
        .with_component_parameters::<TraineeServiceImpl>(TraineeServiceImplParameters { settings })
        .with_component_parameters::<TrainerServiceImpl>(TrainerServiceImplParameters { settings })
        .build();

    info!(
        "Gym module built (password policy {}..={} chars)",
        settings.policy.min_length(),
        settings.policy.max_length()
    );

    Arc::new(module)
}
