pub(crate) mod credentials;
pub(crate) mod error;
pub(crate) mod session;
pub(crate) mod session_manager;
pub(crate) mod user_identity;
