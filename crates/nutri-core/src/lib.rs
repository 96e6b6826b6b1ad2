//! Client core for the NutriChef nutrition assistant.
//!
//! Session and profile state, durable storage, request orchestration for each
//! feature view, and the HTTP client for the backend.

pub(crate) mod app;
pub(crate) mod client;
pub(crate) mod features;
pub(crate) mod orchestrator;
pub(crate) mod profile;
pub(crate) mod router;
pub(crate) mod session;
pub(crate) mod storage;

#[cfg(test)]
mod tests;

pub use app::NutritionApp;

pub use client::{
    api::NutritionApi,
    client::Client,
    error::{ClientError, Result as ClientResult},
};

pub use features::{
    auth::{AuthForm, AuthMode},
    diet::{
        DIET_ADVICE_FAILURE, DietAdvice, DietAdviceRequest, DietGuidance, DietInput,
        DietLogRequest, DietRecommendation, PlannedMeal, PlannedRecipe,
    },
    health::{HEALTH_ANALYSIS_FAILURE, HealthAnalysis, HealthAnalysisRequest, HealthReport},
    meal_plan::{MEAL_PLAN_FAILURE, Meal, MealPlan, MealPlanRequest, MealPlanning},
    recipe::{ANY_CUISINE, RECIPE_FAILURE, Recipe, RecipeGeneration, RecipeInput, RecipeQuery},
};

pub use orchestrator::{
    feature::{ApiRequest, Feature},
    orchestrator::{Completion, Orchestrator, PendingRequest},
    request_context::RequestContext,
    request_state::RequestState,
    request_tracker::{RequestTracker, SubmissionToken},
};

pub use profile::{
    activity_level::ActivityLevel,
    defaults::{PROFILE_DEFAULTS, ProfileDefaults},
    error::{ProfileError, Result as ProfileResult},
    gender::Gender,
    health_goal::HealthGoal,
    meal_type::MealType,
    normalized_profile::NormalizedProfile,
    numeric_input::NumericInput,
    nutrition_profile::NutritionProfile,
    profile_patch::ProfilePatch,
    profile_store::ProfileStore,
};

pub use router::{mounted_view::MountedView, view::View, view_router::ViewRouter};

pub use session::{
    credentials::{Credentials, Registration},
    error::{GENERIC_AUTH_FAILURE, Result as SessionResult, SessionError},
    session::Session,
    session_manager::SessionManager,
    user_identity::UserIdentity,
};

pub use storage::{
    PROFILE_KEY, SESSION_KEY,
    error::{Result as StorageResult, StorageError},
    file_store::FileStore,
    key_value_store::{KeyValueStore, SharedStore},
    load_json,
    memory_store::MemoryStore,
    save_json,
};
