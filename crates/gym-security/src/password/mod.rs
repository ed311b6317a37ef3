//! Credential Manager: password policy, hashing and verification.

mod hasher;
mod policy;

pub use hasher::*;
pub use policy::*;
