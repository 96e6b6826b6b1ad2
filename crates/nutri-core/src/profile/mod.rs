pub(crate) mod activity_level;
pub(crate) mod defaults;
pub(crate) mod error;
pub(crate) mod gender;
pub(crate) mod health_goal;
pub(crate) mod meal_type;
pub(crate) mod normalized_profile;
pub(crate) mod numeric_input;
pub(crate) mod nutrition_profile;
pub(crate) mod profile_patch;
pub(crate) mod profile_store;

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Decodes an enum from its string form; null or unrecognized values become the default.
pub(crate) fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| value.parse().ok())
        .unwrap_or_default())
}
