//! Password policy.
//!
//! The rule set is fixed and documented here rather than implied by callers:
//!
//! * length between `min_length` and `max_length` characters (Unicode scalar
//!   values, so multi-byte characters count once), 8 and 128 by default;
//! * at least one letter;
//! * at least one ASCII digit.

use gym_core::GymError;

/// Default minimum password length.
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Default maximum password length.
pub const DEFAULT_MAX_LENGTH: usize = 128;

/// Rule set a plaintext password must satisfy before it may be hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
    max_length: usize,
}

impl PasswordPolicy {
    /// Creates a policy with custom length bounds.
    ///
    /// `min_length` is raised to at least 1 so the empty password is always
    /// rejected, and `max_length` is raised to at least `min_length`.
    #[must_use]
    pub fn new(min_length: usize, max_length: usize) -> Self {
        let min_length = min_length.max(1);
        Self {
            min_length,
            max_length: max_length.max(min_length),
        }
    }

    /// Returns the minimum length.
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Returns the maximum length.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Returns true only if the password satisfies every rule.
    #[must_use]
    pub fn validate(&self, password: &str) -> bool {
        self.check(password).is_ok()
    }

    /// Checks the password and returns every violated rule.
    pub fn check(&self, password: &str) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let length = password.chars().count();

        if length < self.min_length {
            errors.push(format!(
                "Password must be at least {} characters long",
                self.min_length
            ));
        }

        if length > self.max_length {
            errors.push(format!(
                "Password must be at most {} characters long",
                self.max_length
            ));
        }

        if !password.chars().any(char::is_alphabetic) {
            errors.push("Password must contain at least one letter".to_string());
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            errors.push("Password must contain at least one digit".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Checks the password and converts violations to [`GymError::PolicyViolation`].
    pub fn enforce(&self, password: &str) -> Result<(), GymError> {
        self.check(password).map_err(GymError::PolicyViolation)
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
    }
}

/// Validates a password against the default policy.
#[must_use]
pub fn validate_password(password: &str) -> bool {
    PasswordPolicy::default().validate(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        assert!(!validate_password(""));
    }

    #[test]
    fn test_rejects_below_minimum() {
        assert!(!validate_password("abc"));
        assert!(!validate_password("abcdef1"));
    }

    #[test]
    fn test_accepts_minimum_with_composition() {
        assert!(validate_password("abcdefg1"));
        assert!(validate_password("Sup3rSecret"));
    }

    #[test]
    fn test_requires_digit() {
        let errors = PasswordPolicy::default().check("NoDigitsHere").unwrap_err();
        assert_eq!(errors, vec!["Password must contain at least one digit".to_string()]);
    }

    #[test]
    fn test_requires_letter() {
        let errors = PasswordPolicy::default().check("1234567890").unwrap_err();
        assert_eq!(errors, vec!["Password must contain at least one letter".to_string()]);
    }

    #[test]
    fn test_rejects_above_maximum() {
        let long = format!("a1{}", "x".repeat(DEFAULT_MAX_LENGTH));
        let errors = PasswordPolicy::default().check(&long).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("at most 128")));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        assert!(!validate_password("ééééé1a"));
        // 8 characters
        assert!(validate_password("éééééé1a"));
    }

    #[test]
    fn test_collects_every_violation() {
        let errors = PasswordPolicy::default().check("").unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_custom_bounds() {
        let policy = PasswordPolicy::new(12, 16);
        assert!(!policy.validate("abcdefgh1"));
        assert!(policy.validate("abcdefghijk1"));
        assert!(!policy.validate("abcdefghijklmnop1"));
    }

    #[test]
    fn test_degenerate_bounds_are_normalized() {
        let policy = PasswordPolicy::new(0, 0);
        assert_eq!(policy.min_length(), 1);
        assert_eq!(policy.max_length(), 1);
        assert!(!policy.validate(""));
    }

    #[test]
    fn test_enforce_maps_to_policy_violation() {
        match PasswordPolicy::default().enforce("abc") {
            Err(GymError::PolicyViolation(rules)) => {
                assert!(rules.iter().any(|r| r.contains("at least 8")));
            }
            other => panic!("Expected PolicyViolation, got {:?}", other),
        }
    }
}
