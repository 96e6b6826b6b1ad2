use crate::{ActivityLevel, Gender, HealthGoal};

use serde::{Deserialize, Serialize};

/// Profile with every field concrete: the shape every backend endpoint accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: i32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub health_goals: HealthGoal,
    pub dietary_restrictions: String,
}
