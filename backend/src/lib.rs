//! Backend data APIs for the roommate matching site.

pub mod api;
pub mod db_utils;
pub mod error;
pub mod server_extra;
