use crate::session::error::Result as SessionResult;
use crate::{
    AuthForm, AuthMode, MountedView, NutritionApi, NutritionProfile, ProfileStore,
    RequestContext, RequestState, Session, SessionManager, SharedStore, UserIdentity, View,
    ViewRouter,
};

use std::sync::Arc;

/// Composition root: one per running client.
///
/// Owns the session, the profile, the auth form and the mounted view, and
/// wires them to a single backend.
pub struct NutritionApp {
    api: Arc<dyn NutritionApi>,
    sessions: SessionManager,
    profiles: ProfileStore,
    router: ViewRouter,
    auth: AuthForm,
}

impl NutritionApp {
    /// Restores the saved session and profile and mounts the default view.
    pub fn start(api: Arc<dyn NutritionApi>, storage: SharedStore) -> Self {
        Self {
            api,
            sessions: SessionManager::restore(Arc::clone(&storage)),
            profiles: ProfileStore::load(storage),
            router: ViewRouter::new(),
            auth: AuthForm::new(),
        }
    }

    pub fn api(&self) -> &dyn NutritionApi {
        &*self.api
    }

    pub fn session(&self) -> &Session {
        self.sessions.session()
    }

    pub fn profile(&self) -> NutritionProfile {
        self.profiles.snapshot(&self.sessions)
    }

    /// Inputs for the next submission, read at call time.
    pub fn context(&self) -> RequestContext {
        RequestContext::new(&self.profile(), self.session())
    }

    pub fn current_view(&self) -> View {
        self.router.current()
    }

    pub fn navigate(&mut self, view: View) -> bool {
        self.router.select(view)
    }

    pub fn mounted(&self) -> &MountedView {
        self.router.mounted()
    }

    pub fn mounted_mut(&mut self) -> &mut MountedView {
        self.router.mounted_mut()
    }

    pub fn auth_form(&self) -> &AuthForm {
        &self.auth
    }

    pub async fn login(&mut self, username: &str, password: &str) -> &RequestState<UserIdentity> {
        self.auth.mode = AuthMode::Login;
        self.auth.username = username.to_string();
        self.auth.password = password.to_string();
        self.auth.submit(&mut self.sessions, &*self.api).await
    }

    pub async fn register(
        &mut self,
        username: &str,
        password: &str,
        profile: NutritionProfile,
    ) -> &RequestState<UserIdentity> {
        self.auth.mode = AuthMode::Register;
        self.auth.username = username.to_string();
        self.auth.password = password.to_string();
        self.auth.profile = profile;
        self.auth.submit(&mut self.sessions, &*self.api).await
    }

    /// Ends the session and drops whatever the mounted view was showing.
    pub fn logout(&mut self) {
        self.sessions.logout();
        self.router.remount();
    }

    pub fn save_profile(&mut self, draft: NutritionProfile) -> SessionResult<()> {
        self.profiles.apply_edit(&mut self.sessions, draft)
    }

    /// Pushes the authenticated profile to the backend.
    pub async fn sync_profile(&mut self) -> SessionResult<&Session> {
        self.sessions.push_profile(&*self.api).await
    }

    /// Submits the mounted view with the current profile and session.
    pub async fn submit_active(&mut self) -> &MountedView {
        let context = self.context();
        self.router
            .mounted_mut()
            .submit(&*self.api, &context)
            .await;
        self.router.mounted()
    }
}
