//! # Gym Security
//!
//! Credential handling for the gym identity space: password policy,
//! Argon2id hashing and verification, and username generation.

pub mod password;
pub mod username;

pub use password::*;
pub use username::*;
