//! Recommendation API operations and module exports.

mod top_matches;
pub use top_matches::top_matches;

mod other_mates;
pub use other_mates::other_mates;

mod directory_dataset;
pub use directory_dataset::directory_dataset;

pub mod start_date;
