//! # Gym Domain
//!
//! Domain entities and value objects for trainees and trainers.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
