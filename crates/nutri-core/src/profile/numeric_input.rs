use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A numeric profile field as the user left it: blank, a number, or
/// whatever text they typed.
///
/// Coercion to a concrete value only happens at normalization time, so an
/// edit form can round-trip partial input without losing it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NumericInput {
    #[default]
    Empty,
    Number(f64),
    Text(String),
}

impl NumericInput {
    /// The parsed value, if the input holds a finite number.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Empty => None,
            Self::Number(n) => Some(*n).filter(|n| n.is_finite()),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite()),
        }
    }

    /// Parse as number, else fall back to `default`.
    pub fn value_or(&self, default: f64) -> f64 {
        self.value().unwrap_or(default)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for NumericInput {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<String> for NumericInput {
    fn from(text: String) -> Self {
        if text.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(text)
        }
    }
}

impl From<&str> for NumericInput {
    fn from(text: &str) -> Self {
        Self::from(text.to_string())
    }
}

impl Serialize for NumericInput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Empty => serializer.serialize_str(""),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(text) => serializer.serialize_str(text),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumericInput {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for NumericInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawNumericInput>::deserialize(deserializer)? {
            None => Self::Empty,
            Some(RawNumericInput::Number(n)) => Self::Number(n),
            Some(RawNumericInput::Text(text)) => Self::from(text),
        })
    }
}
