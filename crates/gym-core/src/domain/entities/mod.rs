//! Domain entities.

mod trainee;
mod trainer;
mod user_profile;

pub use trainee::*;
pub use trainer::*;
pub use user_profile::*;
