use crate::{
    DietAdvice, HealthAnalysis, MealPlanning, NutritionApi, Orchestrator, RecipeGeneration,
    RequestContext, View,
};

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// The orchestrator currently on screen, with its own input and state.
pub enum MountedView {
    Health(Orchestrator<HealthAnalysis>),
    Diet(Orchestrator<DietAdvice>),
    Recipe(Orchestrator<RecipeGeneration>),
    MealPlan(Orchestrator<MealPlanning>),
}

impl MountedView {
    /// A freshly mounted orchestrator: default input, `Idle`.
    pub fn fresh(view: View) -> Self {
        match view {
            View::Health => Self::Health(Orchestrator::new()),
            View::Diet => Self::Diet(Orchestrator::new()),
            View::Recipe => Self::Recipe(Orchestrator::new()),
            View::MealPlan => Self::MealPlan(Orchestrator::new()),
        }
    }

    pub fn view(&self) -> View {
        match self {
            Self::Health(_) => View::Health,
            Self::Diet(_) => View::Diet,
            Self::Recipe(_) => View::Recipe,
            Self::MealPlan(_) => View::MealPlan,
        }
    }

    pub async fn submit(&mut self, api: &dyn NutritionApi, context: &RequestContext) {
        match self {
            Self::Health(orchestrator) => {
                orchestrator.submit(api, context).await;
            }
            Self::Diet(orchestrator) => {
                orchestrator.submit(api, context).await;
            }
            Self::Recipe(orchestrator) => {
                orchestrator.submit(api, context).await;
            }
            Self::MealPlan(orchestrator) => {
                orchestrator.submit(api, context).await;
            }
        }
    }

    /// The failure message, if the last submission failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Health(orchestrator) => orchestrator.state().error(),
            Self::Diet(orchestrator) => orchestrator.state().error(),
            Self::Recipe(orchestrator) => orchestrator.state().error(),
            Self::MealPlan(orchestrator) => orchestrator.state().error(),
        }
    }
}

impl Serialize for MountedView {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("MountedView", 2)?;
        state.serialize_field("view", &self.view())?;
        match self {
            Self::Health(orchestrator) => state.serialize_field("state", orchestrator.state())?,
            Self::Diet(orchestrator) => state.serialize_field("state", orchestrator.state())?,
            Self::Recipe(orchestrator) => state.serialize_field("state", orchestrator.state())?,
            Self::MealPlan(orchestrator) => state.serialize_field("state", orchestrator.state())?,
        }
        state.end()
    }
}
