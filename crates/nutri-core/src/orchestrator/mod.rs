pub(crate) mod feature;
pub(crate) mod orchestrator;
pub(crate) mod request_context;
pub(crate) mod request_state;
pub(crate) mod request_tracker;
