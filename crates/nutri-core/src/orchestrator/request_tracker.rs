use crate::RequestState;

use log::debug;

/// Identifies one submission. Later submissions always carry larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionToken(u64);

impl SubmissionToken {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Request state plus the bookkeeping that keeps stale replies out of it.
///
/// Only the most recently issued token may resolve, and only once. A reply
/// for an older token means the user resubmitted in the meantime, so it is
/// dropped.
#[derive(Debug)]
pub struct RequestTracker<T> {
    state: RequestState<T>,
    issued: u64,
    in_flight: Option<SubmissionToken>,
}

impl<T> Default for RequestTracker<T> {
    fn default() -> Self {
        Self {
            state: RequestState::Idle,
            issued: 0,
            in_flight: None,
        }
    }
}

impl<T> RequestTracker<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    /// Moves to `Loading`, discarding any previous result or error.
    pub fn begin(&mut self) -> SubmissionToken {
        self.issued += 1;
        let token = SubmissionToken(self.issued);
        self.in_flight = Some(token);
        self.state = RequestState::Loading;
        token
    }

    /// True while `token` is the submission the state is waiting on.
    pub fn is_current(&self, token: SubmissionToken) -> bool {
        self.in_flight == Some(token)
    }

    /// Applies the reply for `token`. Returns false if it was superseded.
    pub fn resolve(&mut self, token: SubmissionToken, outcome: Result<T, String>) -> bool {
        if !self.is_current(token) {
            debug!(
                "Discarding reply for submission {} (latest is {})",
                token.value(),
                self.issued
            );
            return false;
        }

        self.in_flight = None;
        self.state = match outcome {
            Ok(result) => RequestState::Success(result),
            Err(message) => RequestState::Failed(message),
        };
        true
    }
}
