pub(crate) mod api;
pub(crate) mod client;
pub(crate) mod error;
