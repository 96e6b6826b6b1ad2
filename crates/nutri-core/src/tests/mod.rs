mod storage;

use crate::{
    ClientError, ClientResult, Credentials, DietGuidance, DietLogRequest, DietRecommendation,
    HealthReport, MealPlan, NormalizedProfile, NutritionApi, NutritionProfile, Recipe,
    RecipeQuery, Registration, UserIdentity,
};

use std::sync::Mutex;

use async_trait::async_trait;

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Login(String),
    Register(String, NormalizedProfile),
    UpdateProfile(i64, NormalizedProfile),
    Health(NormalizedProfile, Option<i64>),
    Diet(DietLogRequest, Option<i64>),
    MealPlan(NormalizedProfile, Option<i64>),
    Recipe(RecipeQuery),
}

/// In-process backend that records every call.
///
/// Auth succeeds only when an identity is configured; `failing` makes every
/// call return a backend error.
#[derive(Default)]
pub(crate) struct StubApi {
    identity: Option<UserIdentity>,
    failure: Option<(u16, String)>,
    calls: Mutex<Vec<Call>>,
}

impl StubApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_identity(identity: UserIdentity) -> Self {
        Self {
            identity: Some(identity),
            ..Self::default()
        }
    }

    pub(crate) fn failing(status: u16, message: &str) -> Self {
        Self {
            failure: Some((status, message.to_string())),
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> ClientResult<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some((status, message)) => Err(ClientError::backend(*status, message.clone())),
            None => Ok(()),
        }
    }

    fn identity(&self) -> ClientResult<UserIdentity> {
        self.identity
            .clone()
            .ok_or_else(|| ClientError::backend(401, "Invalid credentials"))
    }
}

#[async_trait]
impl NutritionApi for StubApi {
    async fn login(&self, credentials: &Credentials) -> ClientResult<UserIdentity> {
        self.record(Call::Login(credentials.username.clone()))?;
        self.identity()
    }

    async fn register(&self, registration: &Registration) -> ClientResult<UserIdentity> {
        self.record(Call::Register(
            registration.username.clone(),
            registration.profile.clone(),
        ))?;
        Ok(UserIdentity {
            id: 99,
            username: registration.username.clone(),
            profile: NutritionProfile::from(registration.profile.clone()),
        })
    }

    async fn update_profile(
        &self,
        user_id: i64,
        profile: &NormalizedProfile,
    ) -> ClientResult<UserIdentity> {
        self.record(Call::UpdateProfile(user_id, profile.clone()))?;
        let mut identity = self.identity()?;
        identity.profile = NutritionProfile::from(profile.clone());
        Ok(identity)
    }

    async fn analyze_health(
        &self,
        profile: &NormalizedProfile,
        user_id: Option<i64>,
    ) -> ClientResult<HealthReport> {
        self.record(Call::Health(profile.clone(), user_id))?;
        let meters = profile.height_cm / 100.0;
        Ok(HealthReport {
            bmi: profile.weight_kg / (meters * meters),
            bmi_category: String::from("Normal"),
            daily_calorie_needs: 2000.0,
        })
    }

    async fn recommend_diet(
        &self,
        request: &DietLogRequest,
        user_id: Option<i64>,
    ) -> ClientResult<DietRecommendation> {
        self.record(Call::Diet(request.clone(), user_id))?;
        Ok(DietRecommendation {
            calories_consumed_estimate: 500.0,
            calories_remaining: 1500.0,
            nutritional_analysis: format!("{} logged", request.food_item),
            guidance: DietGuidance::NextMeal(String::from("Grilled salmon")),
        })
    }

    async fn generate_meal_plan(
        &self,
        profile: &NormalizedProfile,
        user_id: Option<i64>,
    ) -> ClientResult<MealPlan> {
        self.record(Call::MealPlan(profile.clone(), user_id))?;
        Ok(MealPlan {
            goal: Some(profile.health_goals.to_string()),
            total_daily_calories: 2000.0,
            suggestion: String::from("Stay hydrated"),
            meals: Vec::new(),
        })
    }

    async fn generate_recipe(&self, query: &RecipeQuery) -> ClientResult<Recipe> {
        self.record(Call::Recipe(query.clone()))?;
        Ok(Recipe {
            title: format!("{} bowl", query.cuisine),
            cuisine_type: query.cuisine.clone(),
            calories: 450.0,
            ingredients: query.ingredients.split(',').map(String::from).collect(),
            instructions: String::from("Mix and serve."),
            image_url: None,
        })
    }

    async fn health_check(&self) -> ClientResult<String> {
        Ok(String::from("OK"))
    }
}

pub(crate) fn identity(id: i64, username: &str) -> UserIdentity {
    UserIdentity {
        id,
        username: username.to_string(),
        profile: NutritionProfile::default(),
    }
}
