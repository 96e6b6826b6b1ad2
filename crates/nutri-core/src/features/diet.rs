use crate::features::failure_text;
use crate::{
    ApiRequest, ClientError, ClientResult, Feature, MealType, NormalizedProfile, NutritionApi,
    RequestContext,
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DIET_ADVICE_FAILURE: &str =
    "System Error. Ensure Java Backend (8080) & Python ML (5000) are running.";

/// Logs a food item and asks what to eat next.
pub struct DietAdvice;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DietInput {
    pub food_item: String,
    pub meal_type: MealType,
}

/// `POST /api/diet/recommend` body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietLogRequest {
    pub food_item: String,
    pub meal_type: MealType,
    pub user_profile: NormalizedProfile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DietAdviceRequest {
    pub body: DietLogRequest,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    #[serde(rename = "type")]
    pub meal_type: String,
    pub recipe: PlannedRecipe,
    #[serde(default)]
    pub suggestion_reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRecipe {
    pub title: String,
    pub calories: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// How the recommendation should be presented.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "content", rename_all = "camelCase")]
pub enum DietGuidance {
    /// Rest of the day, meal by meal.
    DayPlan(Vec<PlannedMeal>),
    /// Single suggestion for the next meal.
    NextMeal(String),
}

impl DietGuidance {
    /// Day-plan mode iff the plan is present and non-empty.
    pub fn select(day_plan: Option<Vec<PlannedMeal>>, next_meal: Option<String>) -> Self {
        match day_plan {
            Some(plan) if !plan.is_empty() => Self::DayPlan(plan),
            _ => Self::NextMeal(next_meal.unwrap_or_default()),
        }
    }

    pub fn is_day_plan(&self) -> bool {
        matches!(self, Self::DayPlan(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawDietRecommendation")]
pub struct DietRecommendation {
    pub calories_consumed_estimate: f64,
    pub calories_remaining: f64,
    pub nutritional_analysis: String,
    pub guidance: DietGuidance,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDietRecommendation {
    #[serde(default)]
    calories_consumed_estimate: f64,
    #[serde(default)]
    calories_remaining: f64,
    #[serde(default)]
    nutritional_analysis: String,
    #[serde(default)]
    day_plan: Option<Vec<PlannedMeal>>,
    #[serde(default)]
    next_meal_suggestion: Option<String>,
}

impl From<RawDietRecommendation> for DietRecommendation {
    fn from(raw: RawDietRecommendation) -> Self {
        Self {
            calories_consumed_estimate: raw.calories_consumed_estimate,
            calories_remaining: raw.calories_remaining,
            nutritional_analysis: raw.nutritional_analysis,
            guidance: DietGuidance::select(raw.day_plan, raw.next_meal_suggestion),
        }
    }
}

#[async_trait]
impl ApiRequest for DietAdviceRequest {
    type Output = DietRecommendation;

    async fn dispatch(&self, api: &dyn NutritionApi) -> ClientResult<DietRecommendation> {
        api.recommend_diet(&self.body, self.user_id).await
    }
}

impl Feature for DietAdvice {
    const NAME: &'static str = "diet recommendation";

    type Input = DietInput;
    type Request = DietAdviceRequest;
    type Output = DietRecommendation;

    fn build_request(input: &DietInput, context: &RequestContext) -> DietAdviceRequest {
        DietAdviceRequest {
            body: DietLogRequest {
                food_item: input.food_item.trim().to_string(),
                meal_type: input.meal_type,
                user_profile: context.profile.clone(),
            },
            user_id: context.user_id,
        }
    }

    fn failure_message(error: &ClientError) -> String {
        failure_text(error, DIET_ADVICE_FAILURE)
    }
}
