use crate::{NutritionProfile, UserIdentity};

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Whether the client is signed in, and as whom.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(UserIdentity),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&UserIdentity> {
        match self {
            Self::Authenticated(identity) => Some(identity),
            Self::Anonymous => None,
        }
    }

    pub fn user_id(&self) -> Option<i64> {
        self.identity().map(|identity| identity.id)
    }

    pub fn profile(&self) -> Option<&NutritionProfile> {
        self.identity().map(|identity| &identity.profile)
    }
}

impl Serialize for Session {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Session", 2)?;
        state.serialize_field("isAuthenticated", &self.is_authenticated())?;
        state.serialize_field("identity", &self.identity())?;
        state.end()
    }
}
