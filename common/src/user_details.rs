//! Full profile payload shown in the profile modal.

use serde::{Deserialize, Serialize};


/// Everything known about one user, independent of who is asking. Unlike
/// [`crate::roommate::RoommateCard`] there is no favourite flag here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub email: String,
    pub name: String,
    pub age: u32,
    pub start_date: String,
    pub title: String,
    pub locations: Vec<String>,
    pub gender: String,
    pub smoke: bool,
    pub drink: bool,
    pub budget: u32,
    pub dietary_preference: String,
    pub phone: String,
    pub photo_url: String,
}
