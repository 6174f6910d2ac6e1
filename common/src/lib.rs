//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod account;
pub mod browse_const;
pub mod favourite;
pub mod roommate;
pub mod user_details;
