//! # Gym Service
//!
//! Trainee and trainer services: registration with generated usernames,
//! password rotation, authentication, profile maintenance and trainer
//! assignment. The shared credential rules live in [`credentials`].

pub mod credentials;
pub mod di;
pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod trainee_service;
pub mod trainer_service;

#[cfg(test)]
mod mocks;

pub use credentials::CredentialSettings;
pub use di::*;
pub use dto::*;
pub use r#impl::{TraineeServiceImpl, TrainerServiceImpl};
pub use trainee_service::*;
pub use trainer_service::*;
