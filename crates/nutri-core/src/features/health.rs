use crate::features::{deserialize_flexible_number, failure_text};
use crate::{
    ApiRequest, ClientError, ClientResult, Feature, NormalizedProfile, NutritionApi,
    RequestContext,
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const HEALTH_ANALYSIS_FAILURE: &str = "Could not analyze your profile. Ensure backend is running.";

/// BMI and calorie analysis of the current profile.
pub struct HealthAnalysis;

#[derive(Debug, Clone, PartialEq)]
pub struct HealthAnalysisRequest {
    pub profile: NormalizedProfile,
    pub user_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    #[serde(deserialize_with = "deserialize_flexible_number")]
    pub bmi: f64,
    pub bmi_category: String,
    #[serde(deserialize_with = "deserialize_flexible_number")]
    pub daily_calorie_needs: f64,
}

#[async_trait]
impl ApiRequest for HealthAnalysisRequest {
    type Output = HealthReport;

    async fn dispatch(&self, api: &dyn NutritionApi) -> ClientResult<HealthReport> {
        api.analyze_health(&self.profile, self.user_id).await
    }
}

impl Feature for HealthAnalysis {
    const NAME: &'static str = "health analysis";

    type Input = ();
    type Request = HealthAnalysisRequest;
    type Output = HealthReport;

    fn build_request(_input: &(), context: &RequestContext) -> HealthAnalysisRequest {
        HealthAnalysisRequest {
            profile: context.profile.clone(),
            user_id: context.user_id,
        }
    }

    fn failure_message(error: &ClientError) -> String {
        failure_text(error, HEALTH_ANALYSIS_FAILURE)
    }
}
