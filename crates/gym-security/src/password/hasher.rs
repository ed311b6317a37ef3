//! Password hashing using Argon2id.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Argon2, Params,
};
use gym_core::{GymError, GymResult, Interface};
use shaku::Component;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

/// Plaintext hashed once to produce the stand-in hash used by
/// [`PasswordHasherInterface::verify_dummy`].
const DUMMY_PASSWORD: &str = "gym-dummy-password-0";

/// Upper bound for the configured memory cost, in MiB.
pub const MAX_HASH_COST_MIB: u32 = 1024;

/// Interface for password hashing operations.
///
/// This trait abstracts password hashing functionality for dependency injection.
pub trait PasswordHasherInterface: Interface + Send + Sync {
    /// Hashes a password with a fresh random salt.
    ///
    /// The result is a PHC string carrying algorithm, parameters, salt and
    /// digest, so two calls with the same input never return the same value.
    fn hash(&self, password: &str) -> GymResult<String>;

    /// Verifies a password against a stored hash.
    ///
    /// Returns `false` for a wrong password and for a malformed or
    /// unsupported stored hash; this never fails.
    fn verify(&self, password: &str, hash: &str) -> bool;

    /// Runs a full verification against a stand-in hash and returns `false`.
    ///
    /// Used when the account being authenticated does not exist, so that
    /// the response takes as long as a real verification.
    fn verify_dummy(&self, password: &str) -> bool;

    /// Checks if a hash needs to be rehashed.
    fn needs_rehash(&self, hash: &str) -> bool;
}

/// Password hasher service using Argon2id.
#[derive(Component, Clone)]
#[shaku(interface = PasswordHasherInterface)]
pub struct PasswordHasher {
    argon2: Arc<Argon2<'static>>,
    dummy_hash: Arc<OnceLock<String>>,
}

impl PasswordHasher {
    /// Creates a new password hasher with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(Params::DEFAULT)
    }

    /// Creates a new password hasher with custom parameters.
    #[must_use]
    pub fn with_params(params: Params) -> Self {
        let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);
        Self {
            argon2: Arc::new(argon2),
            dummy_hash: Arc::new(OnceLock::new()),
        }
    }

    /// Creates a password hasher from a cost parameter (memory cost in MiB).
    ///
    /// The cost is clamped to `1..=MAX_HASH_COST_MIB`.
    #[must_use]
    pub fn with_cost(cost: u32) -> Self {
        let params = Params::new(
            cost.clamp(1, MAX_HASH_COST_MIB) * 1024, // Memory cost in KiB
            2,                  // Time cost (iterations)
            1,                  // Parallelism
            None,               // Output length (default)
        )
        .unwrap_or(Params::DEFAULT);

        Self::with_params(params)
    }

    /// Returns the internal Argon2 instance wrapped in Arc.
    ///
    /// This is used for Shaku component parameter extraction.
    #[must_use]
    pub fn argon2_arc(&self) -> Arc<Argon2<'static>> {
        self.argon2.clone()
    }

    /// Computes the stand-in hash up front so the first unknown-account
    /// check costs the same as every later one.
    pub fn warm_up(&self) {
        if self.dummy_hash().is_some() {
            debug!("Dummy password hash prepared");
        }
    }

    /// Returns the shared stand-in hash cell for Shaku component parameters.
    #[must_use]
    pub fn dummy_hash_arc(&self) -> Arc<OnceLock<String>> {
        self.dummy_hash.clone()
    }

    fn dummy_hash(&self) -> Option<&str> {
        if let Some(hash) = self.dummy_hash.get() {
            return Some(hash.as_str());
        }
        match self.hash(DUMMY_PASSWORD) {
            Ok(hash) => Some(self.dummy_hash.get_or_init(|| hash).as_str()),
            Err(e) => {
                warn!("Could not prepare dummy hash: {}", e);
                None
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherInterface for PasswordHasher {
    fn hash(&self, password: &str) -> GymResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| GymError::Configuration(format!("Password hashing unavailable: {}", e)))?;

        debug!("Password hashed successfully");
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            warn!("Stored password hash is malformed");
            return false;
        };

        // Parameters and salt come from the stored hash; the digest
        // comparison inside `verify_password` is constant time.
        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => {
                debug!("Password verified successfully");
                true
            }
            Err(argon2::password_hash::Error::Password) => {
                debug!("Password verification failed: incorrect password");
                false
            }
            Err(e) => {
                warn!("Password verification error: {}", e);
                false
            }
        }
    }

    fn verify_dummy(&self, password: &str) -> bool {
        if let Some(hash) = self.dummy_hash() {
            let _ = self.verify(password, hash);
        }
        false
    }

    fn needs_rehash(&self, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => parsed.algorithm != argon2::Algorithm::Argon2id.ident(),
            Err(_) => true,
        }
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

/// Hashes a password with the default Argon2id parameters.
pub fn hash_password(password: &str) -> GymResult<String> {
    PasswordHasher::new().hash(password)
}

/// Verifies a password against a stored hash with any supported parameters.
#[must_use]
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHasher::new().verify(password, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> PasswordHasher {
        PasswordHasher::with_cost(1)
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = fast_hasher();
        let password = "MySecurePassword123";

        let hash = hasher.hash(password).unwrap();
        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong-password1", &hash));
    }

    #[test]
    fn test_different_hashes() {
        let hasher = fast_hasher();
        let password = "TestPassword123";

        let hash1 = hasher.hash(password).unwrap();
        let hash2 = hasher.hash(password).unwrap();

        // Same password should produce different hashes (different salts)
        assert_ne!(hash1, hash2);

        // But both should verify correctly
        assert!(hasher.verify(password, &hash1));
        assert!(hasher.verify(password, &hash2));
    }

    #[test]
    fn test_hash_is_argon2id_phc_string() {
        let hash = fast_hasher().hash("abcdefg1").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("abcdefg1"));
    }

    #[test]
    fn test_malformed_hash_returns_false() {
        let hasher = fast_hasher();
        assert!(!hasher.verify("password1", "not-a-valid-hash"));
        assert!(!hasher.verify("password1", ""));
        assert!(!hasher.verify("password1", "$argon2id$v=19$m=bad"));
    }

    #[test]
    fn test_verify_accepts_hash_from_other_parameters() {
        let hash = PasswordHasher::with_cost(2).hash("Password123").unwrap();
        assert!(fast_hasher().verify("Password123", &hash));
        assert!(verify_password("Password123", &hash));
    }

    #[test]
    fn test_verify_dummy_is_always_false() {
        let hasher = fast_hasher();
        assert!(!hasher.verify_dummy(DUMMY_PASSWORD));
        assert!(!hasher.verify_dummy("anything1"));
    }

    #[test]
    fn test_with_cost_clamps_extreme_values() {
        let hasher = PasswordHasher::with_cost(u32::MAX);
        assert_eq!(hasher.argon2.params().m_cost(), MAX_HASH_COST_MIB * 1024);

        let hasher = PasswordHasher::with_cost(0);
        assert_eq!(hasher.argon2.params().m_cost(), 1024);
    }

    #[test]
    fn test_warm_up_prepares_shared_dummy_hash() {
        let hasher = PasswordHasher::with_cost(1);
        let cell = hasher.dummy_hash_arc();
        assert!(cell.get().is_none());

        hasher.warm_up();

        let prepared = cell.get().cloned().unwrap();
        assert!(prepared.starts_with("$argon2id$"));
        assert_eq!(hasher.dummy_hash.get(), Some(&prepared));
    }

    #[test]
    fn test_needs_rehash() {
        let hasher = fast_hasher();
        let hash = hasher.hash("password1").unwrap();
        assert!(!hasher.needs_rehash(&hash));
        assert!(hasher.needs_rehash("garbage-hash"));
    }

    #[test]
    fn test_free_functions_round_trip() {
        let hash = hash_password("Sup3rSecret").unwrap();
        assert!(verify_password("Sup3rSecret", &hash));
        assert!(!verify_password("Sup3rSecreT", &hash));
    }

    #[test]
    fn test_hasher_debug_does_not_leak_secrets() {
        let hasher = fast_hasher();
        let debug_str = format!("{:?}", hasher);
        assert!(debug_str.contains("PasswordHasher"));
    }
}
