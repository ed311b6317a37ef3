//! MySQL repository implementations.

mod account_repository;
mod trainee_repository;
mod trainer_repository;

pub use account_repository::*;
pub use trainee_repository::*;
pub use trainer_repository::*;

use gym_core::{GymError, GymResult};
use uuid::Uuid;

/// Parses a `CHAR(36)` key column.
fn parse_uuid(value: &str) -> GymResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| GymError::Internal(format!("Invalid UUID in database: {}", e)))
}
