use crate::{
    ClientError, ClientResult, Credentials, DietLogRequest, DietRecommendation, HealthReport,
    MealPlan, NormalizedProfile, NutritionApi, Recipe, RecipeQuery, Registration, UserIdentity,
};

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the nutrition backend REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Backend URL (e.g., "http://localhost:8080")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Resolve `path` against the base URL and append query pairs.
    fn url(&self, path: &str, query: &[(&str, String)]) -> ClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url = Url::parse(&raw).map_err(|e| ClientError::invalid_url(&raw, e.to_string()))?;

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        debug!("{method} {url}");
        self.client.request(method, url)
    }

    /// Send the request, classify failures and return the raw success body.
    async fn send(&self, req: reqwest::RequestBuilder) -> ClientResult<String> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(status, &body);
            warn!("Backend returned {status}: {message}");
            return Err(ClientError::backend(status.as_u16(), message));
        }

        Ok(body)
    }

    /// Execute request and decode a JSON success body
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let body = self.send(req).await?;
        let value: Value = serde_json::from_str(&body)?;

        if let Some(message) = value.get("error").and_then(Value::as_str) {
            warn!("Backend rejected request: {message}");
            return Err(ClientError::rejected(message));
        }

        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl NutritionApi for Client {
    async fn login(&self, credentials: &Credentials) -> ClientResult<UserIdentity> {
        let url = self.url("/api/auth/login", &[])?;
        let req = self.request(Method::POST, url).json(credentials);
        self.execute(req).await
    }

    async fn register(&self, registration: &Registration) -> ClientResult<UserIdentity> {
        let url = self.url("/api/auth/register", &[])?;
        let req = self.request(Method::POST, url).json(registration);
        self.execute(req).await
    }

    async fn update_profile(
        &self,
        user_id: i64,
        profile: &NormalizedProfile,
    ) -> ClientResult<UserIdentity> {
        let url = self.url(&format!("/api/auth/profile/{}", user_id), &[])?;
        let req = self.request(Method::PUT, url).json(profile);
        self.execute(req).await
    }

    async fn analyze_health(
        &self,
        profile: &NormalizedProfile,
        user_id: Option<i64>,
    ) -> ClientResult<HealthReport> {
        let url = self.url("/api/health/analyze", &user_query(user_id))?;
        let req = self.request(Method::POST, url).json(profile);
        self.execute(req).await
    }

    async fn recommend_diet(
        &self,
        request: &DietLogRequest,
        user_id: Option<i64>,
    ) -> ClientResult<DietRecommendation> {
        let url = self.url("/api/diet/recommend", &user_query(user_id))?;
        let req = self.request(Method::POST, url).json(request);
        self.execute(req).await
    }

    async fn generate_meal_plan(
        &self,
        profile: &NormalizedProfile,
        user_id: Option<i64>,
    ) -> ClientResult<MealPlan> {
        let url = self.url("/api/meal-plan/generate", &user_query(user_id))?;
        let req = self.request(Method::POST, url).json(profile);
        self.execute(req).await
    }

    async fn generate_recipe(&self, query: &RecipeQuery) -> ClientResult<Recipe> {
        let url = self.url("/api/recipes/generate", &query.pairs())?;
        let req = self.request(Method::GET, url);
        self.execute(req).await
    }

    async fn health_check(&self) -> ClientResult<String> {
        let url = self.url("/health", &[])?;
        let req = self.request(Method::GET, url);
        let body = self.send(req).await?;
        Ok(body.trim().to_string())
    }
}

fn user_query(user_id: Option<i64>) -> Vec<(&'static str, String)> {
    user_id
        .map(|id| vec![("userId", id.to_string())])
        .unwrap_or_default()
}

/// Extract the backend's error text from a non-success body.
///
/// Plain text is used verbatim, a JSON string is unwrapped, a JSON object
/// contributes its `message` or `error` field.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    let trimmed = body.trim();

    if trimmed.is_empty() {
        return status
            .canonical_reason()
            .map(String::from)
            .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()));
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(text)) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| {
                map.get(*key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|text| !text.is_empty())
                    .map(String::from)
            })
            .unwrap_or_else(|| trimmed.to_string()),
        _ => trimmed.to_string(),
    }
}
