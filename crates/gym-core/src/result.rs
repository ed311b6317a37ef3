//! Result type aliases for the gym platform.

use crate::GymError;

/// A specialized `Result` type for gym operations.
pub type GymResult<T> = Result<T, GymError>;
