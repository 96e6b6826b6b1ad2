use crate::features::failure_text;
use crate::{
    ApiRequest, ClientError, ClientResult, Feature, NormalizedProfile, NutritionApi,
    RequestContext,
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const MEAL_PLAN_FAILURE: &str = "Could not generate plan. Ensure backend is running.";

/// A full day of meals sized to the profile's calorie needs.
pub struct MealPlanning;

#[derive(Debug, Clone, PartialEq)]
pub struct MealPlanRequest {
    pub profile: NormalizedProfile,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    #[serde(default)]
    pub goal: Option<String>,
    pub total_daily_calories: f64,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub meals: Vec<Meal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    #[serde(rename = "type")]
    pub meal_type: String,
    pub calories: f64,
    #[serde(default)]
    pub macros: String,
}

#[async_trait]
impl ApiRequest for MealPlanRequest {
    type Output = MealPlan;

    async fn dispatch(&self, api: &dyn NutritionApi) -> ClientResult<MealPlan> {
        api.generate_meal_plan(&self.profile, self.user_id).await
    }
}

impl Feature for MealPlanning {
    const NAME: &'static str = "meal plan";

    type Input = ();
    type Request = MealPlanRequest;
    type Output = MealPlan;

    fn build_request(_input: &(), context: &RequestContext) -> MealPlanRequest {
        MealPlanRequest {
            profile: context.profile.clone(),
            user_id: context.user_id,
        }
    }

    fn failure_message(error: &ClientError) -> String {
        failure_text(error, MEAL_PLAN_FAILURE)
    }
}
