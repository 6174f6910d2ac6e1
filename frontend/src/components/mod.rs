pub(crate) mod browse_components;
pub(crate) mod error_boundary;
pub(crate) mod navbar;
pub(crate) mod suspend_boundary;
