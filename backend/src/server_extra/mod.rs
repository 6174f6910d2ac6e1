//! Extra axum routes served next to the UI router.

mod rest_router;
pub use rest_router::rest_router;

#[cfg(test)]
#[path = "tests/rest_tests.rs"]
mod tests;
