pub(crate) mod mounted_view;
pub(crate) mod view;
pub(crate) mod view_router;
