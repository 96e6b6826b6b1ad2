use crate::session::error::{Result as SessionResult, SessionError};
use crate::storage::{SESSION_KEY, load_json, save_json};
use crate::{
    Credentials, NutritionApi, NutritionProfile, ProfilePatch, Registration, Session, SharedStore,
    UserIdentity,
};

use log::{error, info, warn};

/// Owns the authentication state and keeps it mirrored in durable storage.
///
/// Every mutation writes storage before updating memory, so a successful
/// return always means both agree.
pub struct SessionManager {
    storage: SharedStore,
    session: Session,
}

impl SessionManager {
    /// Startup restore. Missing or malformed saved identities yield an anonymous session.
    pub fn restore(storage: SharedStore) -> Self {
        let session = match load_json::<UserIdentity>(&*storage, SESSION_KEY) {
            Some(identity) => {
                info!(
                    "Restored session for '{}' (id {})",
                    identity.username, identity.id
                );
                Session::Authenticated(identity)
            }
            None => {
                info!("No saved session, starting anonymous");
                Session::Anonymous
            }
        };

        Self { storage, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Signs in and persists the returned identity.
    ///
    /// The current session is left untouched on failure.
    pub async fn login(
        &mut self,
        api: &dyn NutritionApi,
        username: &str,
        password: &str,
    ) -> SessionResult<UserIdentity> {
        let credentials = Credentials::new(username, password);

        let identity = api.login(&credentials).await.map_err(|e| {
            warn!("Login failed for '{username}': {e}");
            SessionError::from_auth_failure(&e)
        })?;

        self.establish(identity)
    }

    /// Creates an account with an initial profile and signs in as it.
    pub async fn register(
        &mut self,
        api: &dyn NutritionApi,
        username: &str,
        password: &str,
        profile: &NutritionProfile,
    ) -> SessionResult<UserIdentity> {
        let registration = Registration {
            username: username.to_string(),
            password: password.to_string(),
            profile: profile.normalize(),
        };

        let identity = api.register(&registration).await.map_err(|e| {
            warn!("Registration failed for '{username}': {e}");
            SessionError::from_auth_failure(&e)
        })?;

        self.establish(identity)
    }

    /// Forgets the identity here and in storage. Cannot fail.
    pub fn logout(&mut self) {
        if let Err(e) = self.storage.remove(SESSION_KEY) {
            warn!("Could not remove saved session: {e}");
        }

        if let Session::Authenticated(identity) = &self.session {
            info!("Logged out '{}'", identity.username);
        }

        self.session = Session::Anonymous;
    }

    /// Shallow-merges `patch` into the identity's profile and persists it.
    ///
    /// Only meaningful while authenticated.
    pub fn update_profile(&mut self, patch: &ProfilePatch) -> SessionResult<&Session> {
        let Session::Authenticated(identity) = &self.session else {
            error!("update_profile called without an authenticated session");
            return Err(SessionError::not_authenticated());
        };

        let mut updated = identity.clone();
        updated.profile.apply(patch);

        save_json(&*self.storage, SESSION_KEY, &updated)?;
        self.session = Session::Authenticated(updated);

        Ok(&self.session)
    }

    /// Sends the current profile to the backend and merges back what it stored.
    pub async fn push_profile(&mut self, api: &dyn NutritionApi) -> SessionResult<&Session> {
        let Some(identity) = self.session.identity() else {
            error!("push_profile called without an authenticated session");
            return Err(SessionError::not_authenticated());
        };

        let user_id = identity.id;
        let normalized = identity.profile.normalize();

        let stored = api
            .update_profile(user_id, &normalized)
            .await
            .map_err(SessionError::sync)?;

        info!("Synced profile for user {user_id}");
        self.update_profile(&ProfilePatch::from(stored.profile))
    }

    fn establish(&mut self, identity: UserIdentity) -> SessionResult<UserIdentity> {
        save_json(&*self.storage, SESSION_KEY, &identity)?;
        info!(
            "Signed in as '{}' (id {})",
            identity.username, identity.id
        );
        self.session = Session::Authenticated(identity.clone());
        Ok(identity)
    }
}
