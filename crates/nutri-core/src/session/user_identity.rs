use crate::NutritionProfile;

use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the backend and persisted locally.
///
/// Profile fields sit flat next to `id` and `username`, matching the
/// backend's user object. Anything else it sends (the password hash) is
/// dropped on decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(flatten)]
    pub profile: NutritionProfile,
}
