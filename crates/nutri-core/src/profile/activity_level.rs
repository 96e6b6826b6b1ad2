use crate::PROFILE_DEFAULTS;
use crate::profile::{
    deserialize_lenient,
    error::{ProfileError, Result as ProfileResult},
};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityLevel {
    Sedentary,
    Moderate,
    Active,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "Sedentary",
            Self::Moderate => "Moderate",
            Self::Active => "Active",
        }
    }
}

impl Default for ActivityLevel {
    fn default() -> Self {
        PROFILE_DEFAULTS.activity_level
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = ProfileError;

    #[track_caller]
    fn from_str(s: &str) -> ProfileResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            _ => Err(ProfileError::invalid_value("activity level", s)),
        }
    }
}

impl<'de> Deserialize<'de> for ActivityLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_lenient(deserializer)
    }
}
