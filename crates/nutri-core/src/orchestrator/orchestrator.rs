use crate::{
    ApiRequest, Feature, NutritionApi, RequestContext, RequestState, RequestTracker,
    SubmissionToken,
};

use log::{debug, warn};

/// Drives one feature from form input to result or error.
pub struct Orchestrator<F: Feature> {
    input: F::Input,
    tracker: RequestTracker<F::Output>,
}

impl<F: Feature> Default for Orchestrator<F> {
    fn default() -> Self {
        Self {
            input: F::Input::default(),
            tracker: RequestTracker::new(),
        }
    }
}

impl<F: Feature> Orchestrator<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &F::Input {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut F::Input {
        &mut self.input
    }

    pub fn set_input(&mut self, input: F::Input) {
        self.input = input;
    }

    pub fn state(&self) -> &RequestState<F::Output> {
        self.tracker.state()
    }

    /// Builds the request from the current input and moves to `Loading`.
    ///
    /// The returned request is independent of `self`; several may be in
    /// flight at once, and only the last one prepared can land.
    pub fn prepare(&mut self, context: &RequestContext) -> PendingRequest<F> {
        let request = F::build_request(&self.input, context);
        let token = self.tracker.begin();
        debug!("{} submission {} started", F::NAME, token.value());
        PendingRequest { token, request }
    }

    /// Applies a finished request. Returns false if a newer one superseded it.
    pub fn complete(&mut self, completion: Completion<F>) -> bool {
        self.tracker.resolve(completion.token, completion.outcome)
    }

    /// Prepare, send and complete in one step.
    pub async fn submit(
        &mut self,
        api: &dyn NutritionApi,
        context: &RequestContext,
    ) -> &RequestState<F::Output> {
        let pending = self.prepare(context);
        let completion = pending.send(api).await;
        self.complete(completion);
        self.state()
    }
}

/// A submission that has been issued but not yet sent.
pub struct PendingRequest<F: Feature> {
    token: SubmissionToken,
    request: F::Request,
}

impl<F: Feature> PendingRequest<F> {
    pub fn token(&self) -> SubmissionToken {
        self.token
    }

    pub fn request(&self) -> &F::Request {
        &self.request
    }

    /// Issues the backend call. Every failure is reduced to a message.
    pub async fn send(self, api: &dyn NutritionApi) -> Completion<F> {
        let outcome = self.request.dispatch(api).await.map_err(|e| {
            warn!("{} submission {} failed: {e}", F::NAME, self.token.value());
            F::failure_message(&e)
        });

        Completion {
            token: self.token,
            outcome,
        }
    }
}

/// The reply for one submission, ready to be applied.
pub struct Completion<F: Feature> {
    token: SubmissionToken,
    outcome: Result<F::Output, String>,
}

impl<F: Feature> Completion<F> {
    pub fn token(&self) -> SubmissionToken {
        self.token
    }

    pub fn outcome(&self) -> &Result<F::Output, String> {
        &self.outcome
    }
}
