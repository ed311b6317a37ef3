//! Username generation with collision resolution.
//!
//! A username is `first + "." + last`, with both parts trimmed and their
//! case preserved. When that base is taken the generator probes `base1`,
//! `base2`, ... and returns the first candidate the uniqueness oracle
//! reports as free.

use gym_core::{GymError, GymResult};
use std::future::Future;
use tracing::debug;

/// Separator placed between first and last name.
pub const USERNAME_SEPARATOR: char = '.';

/// Produces unique usernames from person names.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsernameGenerator;

impl UsernameGenerator {
    /// Builds the base candidate for a person.
    pub fn base_username(first_name: &str, last_name: &str) -> GymResult<String> {
        let first = first_name.trim();
        let last = last_name.trim();

        if first.is_empty() {
            return Err(GymError::validation("First name must not be empty"));
        }
        if last.is_empty() {
            return Err(GymError::validation("Last name must not be empty"));
        }

        Ok(format!("{first}{USERNAME_SEPARATOR}{last}"))
    }

    /// Returns the candidate sequence `base`, `base1`, `base2`, ...
    pub fn candidates(base: &str) -> impl Iterator<Item = String> + '_ {
        std::iter::once(base.to_string()).chain((1u64..).map(move |n| format!("{base}{n}")))
    }

    /// Generates a username that `exists` reports as free.
    ///
    /// The oracle is consulted once per candidate in ascending order. An
    /// oracle error aborts generation and is returned unchanged.
    pub async fn generate<F, Fut>(first_name: &str, last_name: &str, mut exists: F) -> GymResult<String>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = GymResult<bool>>,
    {
        let base = Self::base_username(first_name, last_name)?;

        for candidate in Self::candidates(&base) {
            if !exists(candidate.clone()).await? {
                debug!(username = %candidate, "Generated username");
                return Ok(candidate);
            }
            debug!(username = %candidate, "Username taken, probing next suffix");
        }

        // `candidates` never ends
        Err(GymError::internal("Username candidates exhausted"))
    }

    /// Synchronous variant of [`UsernameGenerator::generate`] for in-process
    /// predicates.
    pub fn generate_blocking<F>(first_name: &str, last_name: &str, mut exists: F) -> GymResult<String>
    where
        F: FnMut(&str) -> GymResult<bool>,
    {
        let base = Self::base_username(first_name, last_name)?;

        for candidate in Self::candidates(&base) {
            if !exists(&candidate)? {
                return Ok(candidate);
            }
        }

        Err(GymError::internal("Username candidates exhausted"))
    }
}

/// Generates a unique username; see [`UsernameGenerator::generate`].
pub async fn generate_username<F, Fut>(first_name: &str, last_name: &str, exists: F) -> GymResult<String>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = GymResult<bool>>,
{
    UsernameGenerator::generate(first_name, last_name, exists).await
}
