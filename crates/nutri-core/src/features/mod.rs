pub(crate) mod auth;
pub(crate) mod diet;
pub(crate) mod health;
pub(crate) mod meal_plan;
pub(crate) mod recipe;

use crate::ClientError;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Reduces a client error to feature-facing text.
///
/// A 2xx rejection carries a message meant for the user; every other
/// failure gets the feature's own generic text.
pub(crate) fn failure_text(error: &ClientError, generic: &str) -> String {
    match error {
        ClientError::Rejected { message, .. } => message.clone(),
        _ => String::from(generic),
    }
}

/// Accepts `24.2` as well as `"24.2"`.
pub(crate) fn deserialize_flexible_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flexible {
        Number(f64),
        Text(String),
    }

    match Flexible::deserialize(deserializer)? {
        Flexible::Number(value) => Ok(value),
        Flexible::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected a number, got '{text}'"))),
    }
}
