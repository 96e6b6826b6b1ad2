use crate::{ActivityLevel, Gender, HealthGoal};

/// Values substituted for anything the user left empty.
#[derive(Debug, Clone, Copy)]
pub struct ProfileDefaults {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: i32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub health_goals: HealthGoal,
    pub dietary_restrictions: &'static str,
}

/// The only place profile defaults are defined. Profile construction,
/// enum defaults and payload normalization all read from here.
pub const PROFILE_DEFAULTS: ProfileDefaults = ProfileDefaults {
    weight_kg: 70.0,
    height_cm: 170.0,
    age: 25,
    gender: Gender::Male,
    activity_level: ActivityLevel::Moderate,
    health_goals: HealthGoal::Balanced,
    dietary_restrictions: "None",
};
