//! Data Transfer Objects (DTOs).

mod credentials_dto;
mod trainee_dto;
mod trainer_dto;

pub use credentials_dto::*;
pub use trainee_dto::*;
pub use trainer_dto::*;
