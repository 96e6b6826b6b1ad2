use crate::{ClientError, StorageError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Message used when the backend gave no usable reason for an auth failure.
pub const GENERIC_AUTH_FAILURE: &str = "authentication failed";

#[derive(Error, Debug)]
pub enum SessionError {
    /// Bad credentials or backend rejection. User-correctable.
    #[error("Authentication error: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    #[error("No authenticated session {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Profile sync failed: {source} {location}")]
    Sync {
        #[source]
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Session storage failed: {source} {location}")]
    Storage {
        #[source]
        source: StorageError,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        Self::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn sync(source: ClientError) -> Self {
        Self::Sync {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Backend error text when the backend answered, the generic message otherwise.
    #[track_caller]
    pub fn from_auth_failure(error: &ClientError) -> Self {
        let message = error
            .backend_message()
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .unwrap_or(GENERIC_AUTH_FAILURE);
        Self::auth(message)
    }

    /// Text shown to the user; never includes source locations.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth { message, .. } => message.clone(),
            Self::NotAuthenticated { .. } => String::from("Please log in first."),
            Self::Sync { source, .. } => match source.backend_message() {
                Some(message) => format!("Could not sync your profile: {message}"),
                None => String::from("Could not sync your profile. Ensure the backend is running."),
            },
            Self::Storage { .. } => String::from("Could not save your session on this device."),
        }
    }
}

impl From<StorageError> for SessionError {
    #[track_caller]
    fn from(source: StorageError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
