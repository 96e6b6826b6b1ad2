use crate::{
    ClientResult, Credentials, DietLogRequest, DietRecommendation, HealthReport, MealPlan,
    NormalizedProfile, Recipe, RecipeQuery, Registration, UserIdentity,
};

use async_trait::async_trait;

/// The backend contract the client relies on, one method per endpoint.
///
/// `user_id` arguments are sent as the `userId` query parameter when present.
#[async_trait]
pub trait NutritionApi: Send + Sync {
    /// `POST /api/auth/login`
    async fn login(&self, credentials: &Credentials) -> ClientResult<UserIdentity>;

    /// `POST /api/auth/register`
    async fn register(&self, registration: &Registration) -> ClientResult<UserIdentity>;

    /// `PUT /api/auth/profile/{id}`
    async fn update_profile(
        &self,
        user_id: i64,
        profile: &NormalizedProfile,
    ) -> ClientResult<UserIdentity>;

    /// `POST /api/health/analyze`
    async fn analyze_health(
        &self,
        profile: &NormalizedProfile,
        user_id: Option<i64>,
    ) -> ClientResult<HealthReport>;

    /// `POST /api/diet/recommend`
    async fn recommend_diet(
        &self,
        request: &DietLogRequest,
        user_id: Option<i64>,
    ) -> ClientResult<DietRecommendation>;

    /// `POST /api/meal-plan/generate`
    async fn generate_meal_plan(
        &self,
        profile: &NormalizedProfile,
        user_id: Option<i64>,
    ) -> ClientResult<MealPlan>;

    /// `GET /api/recipes/generate`
    async fn generate_recipe(&self, query: &RecipeQuery) -> ClientResult<Recipe>;

    /// `GET /health`
    async fn health_check(&self) -> ClientResult<String>;
}
