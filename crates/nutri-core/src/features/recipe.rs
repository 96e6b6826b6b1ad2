use crate::features::failure_text;
use crate::{ApiRequest, ClientError, ClientResult, Feature, NutritionApi, RequestContext};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const RECIPE_FAILURE: &str = "Could not generate a recipe. Ensure backend is running.";

/// Cuisine sent when the user leaves it blank.
pub const ANY_CUISINE: &str = "any";

/// Recipe generation from what the user has on hand.
pub struct RecipeGeneration;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeInput {
    /// Free text, comma separated.
    pub ingredients: String,
    pub cuisine: String,
}

/// `GET /api/recipes/generate` query.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeQuery {
    pub ingredients: String,
    pub cuisine: String,
    pub user_id: Option<i64>,
}

impl RecipeQuery {
    pub fn new(input: &RecipeInput, user_id: Option<i64>) -> Self {
        let ingredients = input
            .ingredients
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join(",");

        let cuisine = match input.cuisine.trim() {
            "" => ANY_CUISINE.to_string(),
            cuisine => cuisine.to_string(),
        };

        Self {
            ingredients,
            cuisine,
            user_id,
        }
    }

    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("ingredients", self.ingredients.clone()),
            ("cuisine", self.cuisine.clone()),
        ];
        if let Some(id) = self.user_id {
            pairs.push(("userId", id.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,
    #[serde(default)]
    pub cuisine_type: String,
    pub calories: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[async_trait]
impl ApiRequest for RecipeQuery {
    type Output = Recipe;

    async fn dispatch(&self, api: &dyn NutritionApi) -> ClientResult<Recipe> {
        api.generate_recipe(self).await
    }
}

impl Feature for RecipeGeneration {
    const NAME: &'static str = "recipe";

    type Input = RecipeInput;
    type Request = RecipeQuery;
    type Output = Recipe;

    fn build_request(input: &RecipeInput, context: &RequestContext) -> RecipeQuery {
        RecipeQuery::new(input, context.user_id)
    }

    fn failure_message(error: &ClientError) -> String {
        failure_text(error, RECIPE_FAILURE)
    }
}
