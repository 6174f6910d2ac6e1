//! Data API operations and module exports.

pub mod recommendations;
pub mod users;

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
