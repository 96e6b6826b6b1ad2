use crate::{ActivityLevel, Gender, HealthGoal, NumericInput, NutritionProfile};

/// Partial profile update. `None` fields leave the current value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub weight_kg: Option<NumericInput>,
    pub height_cm: Option<NumericInput>,
    pub age: Option<NumericInput>,
    pub gender: Option<Gender>,
    pub activity_level: Option<ActivityLevel>,
    pub health_goals: Option<HealthGoal>,
    pub dietary_restrictions: Option<String>,
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A full profile as a patch replaces every field.
impl From<NutritionProfile> for ProfilePatch {
    fn from(profile: NutritionProfile) -> Self {
        Self {
            weight_kg: Some(profile.weight_kg),
            height_cm: Some(profile.height_cm),
            age: Some(profile.age),
            gender: Some(profile.gender),
            activity_level: Some(profile.activity_level),
            health_goals: Some(profile.health_goals),
            dietary_restrictions: Some(profile.dietary_restrictions),
        }
    }
}
