//! Service implementations.
//!
//! Trait definitions live in the parent crate (`trainee_service.rs`,
//! `trainer_service.rs`).

mod trainee_service_impl;
mod trainer_service_impl;

pub use trainee_service_impl::*;
pub use trainer_service_impl::*;
