//! Training type value object.

use crate::GymError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of training a trainer specializes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrainingType {
    /// General fitness.
    #[default]
    Fitness,
    /// Yoga.
    Yoga,
    /// Zumba.
    Zumba,
    /// Stretching.
    Stretching,
    /// Resistance / weight training.
    Resistance,
    /// Cardio.
    Cardio,
}

impl TrainingType {
    /// Returns all available training types.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Fitness,
            Self::Yoga,
            Self::Zumba,
            Self::Stretching,
            Self::Resistance,
            Self::Cardio,
        ]
    }

    /// Returns the lowercase name used in storage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fitness => "fitness",
            Self::Yoga => "yoga",
            Self::Zumba => "zumba",
            Self::Stretching => "stretching",
            Self::Resistance => "resistance",
            Self::Cardio => "cardio",
        }
    }
}

impl FromStr for TrainingType {
    type Err = GymError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GymError::validation(format!("Unknown training type: {}", s)))
    }
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
