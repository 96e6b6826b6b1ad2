use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Navigation targets; exactly one is mounted at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Health,
    Diet,
    Recipe,
    MealPlan,
}

impl View {
    pub const ALL: [View; 4] = [View::Health, View::Diet, View::Recipe, View::MealPlan];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Diet => "diet",
            Self::Recipe => "recipe",
            Self::MealPlan => "mealplan",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "health" => Ok(Self::Health),
            "diet" => Ok(Self::Diet),
            "recipe" => Ok(Self::Recipe),
            "mealplan" | "meal-plan" => Ok(Self::MealPlan),
            other => Err(format!("unknown view '{other}'")),
        }
    }
}
