use crate::session::error::Result as SessionResult;
use crate::storage::{PROFILE_KEY, load_json, save_json};
use crate::{NutritionProfile, ProfilePatch, Session, SessionManager, SharedStore};

use log::info;

/// Canonical nutrition profile shared by every feature view.
///
/// While authenticated the profile lives in the session identity; while
/// anonymous a standalone copy is kept under its own storage key.
pub struct ProfileStore {
    storage: SharedStore,
    standalone: NutritionProfile,
}

impl ProfileStore {
    pub fn load(storage: SharedStore) -> Self {
        let standalone = load_json::<NutritionProfile>(&*storage, PROFILE_KEY).unwrap_or_default();
        Self {
            storage,
            standalone,
        }
    }

    /// Copy of the current profile. Views read and draft from this.
    pub fn snapshot(&self, sessions: &SessionManager) -> NutritionProfile {
        match sessions.session() {
            Session::Authenticated(identity) => identity.profile.clone(),
            Session::Anonymous => self.standalone.clone(),
        }
    }

    /// Commits an edited draft as the whole profile.
    pub fn apply_edit(
        &mut self,
        sessions: &mut SessionManager,
        draft: NutritionProfile,
    ) -> SessionResult<()> {
        if sessions.is_authenticated() {
            sessions.update_profile(&ProfilePatch::from(draft))?;
            return Ok(());
        }

        save_json(&*self.storage, PROFILE_KEY, &draft)?;
        self.standalone = draft;
        info!("Saved standalone profile");
        Ok(())
    }

    pub fn standalone(&self) -> &NutritionProfile {
        &self.standalone
    }
}
