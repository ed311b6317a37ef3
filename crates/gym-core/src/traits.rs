//! Core domain traits.

/// Trait for entities with a unique identifier.
pub trait Entity<ID> {
    /// Returns the entity's unique identifier.
    fn id(&self) -> &ID;
}

/// Trait for entities that carry login credentials.
///
/// Implemented by every identity-bearing entity so that the credential
/// flows can be written once for trainees and trainers alike.
pub trait Identity {
    /// Returns the unique username.
    fn username(&self) -> &str;

    /// Returns the stored password hash.
    fn password_hash(&self) -> &str;

    /// Returns whether the account is active.
    fn is_active(&self) -> bool;
}
