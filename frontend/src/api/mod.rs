pub(crate) mod browse_api;
