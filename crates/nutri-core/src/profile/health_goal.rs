use crate::PROFILE_DEFAULTS;
use crate::profile::{
    deserialize_lenient,
    error::{ProfileError, Result as ProfileResult},
};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthGoal {
    Balanced,
    #[serde(rename = "Lose Weight")]
    LoseWeight,
    #[serde(rename = "Gain Muscle")]
    GainMuscle,
}

impl HealthGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "Balanced",
            Self::LoseWeight => "Lose Weight",
            Self::GainMuscle => "Gain Muscle",
        }
    }
}

impl Default for HealthGoal {
    fn default() -> Self {
        PROFILE_DEFAULTS.health_goals
    }
}

impl fmt::Display for HealthGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthGoal {
    type Err = ProfileError;

    /// Accepts the wire form ("Lose Weight") as well as "lose-weight" / "lose_weight".
    #[track_caller]
    fn from_str(s: &str) -> ProfileResult<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "balanced" => Ok(Self::Balanced),
            "lose weight" => Ok(Self::LoseWeight),
            "gain muscle" => Ok(Self::GainMuscle),
            _ => Err(ProfileError::invalid_value("health goal", s)),
        }
    }
}

impl<'de> Deserialize<'de> for HealthGoal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_lenient(deserializer)
    }
}
