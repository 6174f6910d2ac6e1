//! User API operations and module exports.

mod user_details;
pub use user_details::user_details;

mod favourites;
pub use favourites::{FavouriteOutcome, update_favourite};

mod accounts;
pub use accounts::{insert_user, validate_user};
