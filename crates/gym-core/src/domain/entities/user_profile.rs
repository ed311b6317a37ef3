//! Identity data shared by trainees and trainers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Personal and credential data common to every gym user.
///
/// The username is assigned once at registration and never changes. The
/// password is only ever held as a hash; plaintext never reaches this type.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// First name, used as a username seed.
    pub first_name: String,

    /// Last name, used as a username seed.
    pub last_name: String,

    /// Unique username across trainees and trainers.
    pub username: String,

    /// Encoded password hash (never exposed via serialization).
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Whether the account is active.
    pub is_active: bool,
}

impl UserProfile {
    /// Creates a new active profile.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            username: username.into(),
            password_hash: password_hash.into(),
            is_active: true,
        }
    }

    /// Returns "first last".
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Debug for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserProfile")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("is_active", &self.is_active)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_is_active() {
        let profile = UserProfile::new("John", "Smith", "John.Smith", "$argon2id$...");
        assert!(profile.is_active);
        assert_eq!(profile.full_name(), "John Smith");
    }

    #[test]
    fn test_debug_redacts_hash() {
        let profile = UserProfile::new("John", "Smith", "John.Smith", "secret-hash");
        let debug = format!("{:?}", profile);
        assert!(debug.contains("John.Smith"));
        assert!(!debug.contains("secret-hash"));
    }

    #[test]
    fn test_serialize_skips_hash() {
        let profile = UserProfile::new("John", "Smith", "John.Smith", "secret-hash");
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("secret-hash"));
    }
}
