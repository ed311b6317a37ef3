//! Domain value objects.

mod training_type;

pub use training_type::*;
