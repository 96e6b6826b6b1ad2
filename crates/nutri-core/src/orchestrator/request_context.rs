use crate::{NormalizedProfile, NutritionProfile, Session};

/// Read-only inputs every submission is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    pub profile: NormalizedProfile,
    pub user_id: Option<i64>,
}

impl RequestContext {
    pub fn new(profile: &NutritionProfile, session: &Session) -> Self {
        Self {
            profile: profile.normalize(),
            user_id: session.user_id(),
        }
    }
}
