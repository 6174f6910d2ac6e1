//! Database pool, schema, and seed helpers.

pub mod seed_data;
pub mod sqlite_utils;
