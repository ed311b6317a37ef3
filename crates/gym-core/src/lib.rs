//! # Gym Core
//!
//! Core types, traits, and error definitions for the gym identity platform.
//! This crate provides the foundational abstractions used across all layers:
//! the error taxonomy, typed IDs, the trainee/trainer domain model, request
//! validation rules, and logging initialization.

pub mod domain;
pub mod error;
pub mod id;
pub mod logging;
pub mod result;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use logging::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
