use crate::{ClientError, ClientResult, NutritionApi, RequestContext};

use async_trait::async_trait;

/// A fully built backend call for one feature.
#[async_trait]
pub trait ApiRequest: Send + Sync {
    type Output: Send;

    async fn dispatch(&self, api: &dyn NutritionApi) -> ClientResult<Self::Output>;
}

/// What distinguishes one orchestrated feature from another.
pub trait Feature {
    /// Used in logs.
    const NAME: &'static str;

    /// Feature-specific form fields.
    type Input: Default + Clone + Send + Sync;
    type Request: ApiRequest<Output = Self::Output>;
    type Output: Send;

    fn build_request(input: &Self::Input, context: &RequestContext) -> Self::Request;

    /// User-facing text for a failed request.
    fn failure_message(error: &ClientError) -> String;
}
