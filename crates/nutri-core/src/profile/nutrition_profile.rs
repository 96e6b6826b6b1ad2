use crate::{
    ActivityLevel, Gender, HealthGoal, NormalizedProfile, NumericInput, PROFILE_DEFAULTS,
    ProfilePatch,
};

use serde::{Deserialize, Deserializer, Serialize};

/// The user's physical, activity and goal attributes as edited in the client.
///
/// Backend objects may omit or null any field; missing values take the
/// defaults, so a decoded profile is always complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NutritionProfile {
    pub weight_kg: NumericInput,
    pub height_cm: NumericInput,
    pub age: NumericInput,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub health_goals: HealthGoal,
    #[serde(deserialize_with = "deserialize_restrictions")]
    pub dietary_restrictions: String,
}

impl Default for NutritionProfile {
    fn default() -> Self {
        Self {
            weight_kg: NumericInput::Empty,
            height_cm: NumericInput::Empty,
            age: NumericInput::Empty,
            gender: PROFILE_DEFAULTS.gender,
            activity_level: PROFILE_DEFAULTS.activity_level,
            health_goals: PROFILE_DEFAULTS.health_goals,
            dietary_restrictions: String::from(PROFILE_DEFAULTS.dietary_restrictions),
        }
    }
}

impl NutritionProfile {
    /// Coerces every field to a concrete value for transmission.
    pub fn normalize(&self) -> NormalizedProfile {
        let age = self
            .age
            .value()
            .map(|age| age.trunc() as i32)
            .unwrap_or(PROFILE_DEFAULTS.age);

        NormalizedProfile {
            weight_kg: self.weight_kg.value_or(PROFILE_DEFAULTS.weight_kg),
            height_cm: self.height_cm.value_or(PROFILE_DEFAULTS.height_cm),
            age,
            gender: self.gender,
            activity_level: self.activity_level,
            health_goals: self.health_goals,
            dietary_restrictions: restrictions_or_default(&self.dietary_restrictions),
        }
    }

    /// Shallow merge: fields present in `patch` override, the rest are kept.
    pub fn apply(&mut self, patch: &ProfilePatch) {
        if let Some(weight_kg) = &patch.weight_kg {
            self.weight_kg = weight_kg.clone();
        }
        if let Some(height_cm) = &patch.height_cm {
            self.height_cm = height_cm.clone();
        }
        if let Some(age) = &patch.age {
            self.age = age.clone();
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(activity_level) = patch.activity_level {
            self.activity_level = activity_level;
        }
        if let Some(health_goals) = patch.health_goals {
            self.health_goals = health_goals;
        }
        if let Some(restrictions) = &patch.dietary_restrictions {
            self.dietary_restrictions = restrictions.clone();
        }
    }

    pub fn merged(&self, patch: &ProfilePatch) -> Self {
        let mut merged = self.clone();
        merged.apply(patch);
        merged
    }
}

/// Normalization target of a profile the backend sent back as concrete values.
impl From<NormalizedProfile> for NutritionProfile {
    fn from(profile: NormalizedProfile) -> Self {
        Self {
            weight_kg: NumericInput::from(profile.weight_kg),
            height_cm: NumericInput::from(profile.height_cm),
            age: NumericInput::from(profile.age),
            gender: profile.gender,
            activity_level: profile.activity_level,
            health_goals: profile.health_goals,
            dietary_restrictions: profile.dietary_restrictions,
        }
    }
}

fn restrictions_or_default(restrictions: &str) -> String {
    let trimmed = restrictions.trim();
    if trimmed.is_empty() {
        String::from(PROFILE_DEFAULTS.dietary_restrictions)
    } else {
        trimmed.to_string()
    }
}

fn deserialize_restrictions<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(restrictions_or_default(raw.as_deref().unwrap_or_default()))
}
