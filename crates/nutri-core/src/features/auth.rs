use crate::{
    NutritionApi, NutritionProfile, RequestState, RequestTracker, SessionManager, UserIdentity,
};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Login / registration form.
///
/// Unlike the feature orchestrators this one mutates the session, so it goes
/// through [`SessionManager`] instead of calling the api directly.
#[derive(Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub username: String,
    pub password: String,
    /// Initial profile sent on registration.
    pub profile: NutritionProfile,
    tracker: RequestTracker<UserIdentity>,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState<UserIdentity> {
        self.tracker.state()
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
    }

    /// On failure the session is left as it was and the state carries the
    /// backend's reason.
    pub async fn submit(
        &mut self,
        sessions: &mut SessionManager,
        api: &dyn NutritionApi,
    ) -> &RequestState<UserIdentity> {
        let token = self.tracker.begin();

        let outcome = match self.mode {
            AuthMode::Login => sessions.login(api, &self.username, &self.password).await,
            AuthMode::Register => {
                sessions
                    .register(api, &self.username, &self.password, &self.profile)
                    .await
            }
        };

        self.tracker
            .resolve(token, outcome.map_err(|e| e.user_message()));
        self.state()
    }
}

impl fmt::Debug for AuthForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthForm")
            .field("mode", &self.mode)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("state", self.state())
            .finish()
    }
}
