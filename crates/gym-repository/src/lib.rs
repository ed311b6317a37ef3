//! # Gym Repository
//!
//! Data access for trainees and trainers.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn TraineeRepository> / Arc<dyn TrainerRepository>
//!   ↓  Arc<dyn UserAccountRepository>   (identity-wide username oracle)
//! MySqlTraineeRepository / MySqlTrainerRepository / MySqlUserAccountRepository
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL (users, trainees, trainers, trainee_trainers)
//! ```
//!
//! [`InMemoryIdentityStore`] implements all three traits over shared state
//! and enforces the same username uniqueness as the `users` table.

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use memory::InMemoryIdentityStore;
pub use mysql::*;
pub use pool::*;
pub use traits::*;
