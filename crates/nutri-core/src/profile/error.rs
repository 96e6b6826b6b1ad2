use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Invalid {field}: '{value}' {location}")]
    InvalidValue {
        field: &'static str,
        value: String,
        location: ErrorLocation,
    },
}

impl ProfileError {
    #[track_caller]
    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
