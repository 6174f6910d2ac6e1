//! Favourite toggle request payload.

use serde::{Deserialize, Serialize};

use crate::roommate::RoommateCard;


/// Wire payload of the favourites mutation. Field names are part of the
/// API: `user_email` acts, `fav_email` is acted on, `add_fav` selects
/// add (`true`) or remove (`false`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavouriteUpdate {
    pub user_email: String,
    pub fav_email: String,
    pub add_fav: bool,
}

impl FavouriteUpdate {
    /// Builds the toggle request for `target`: add when it is not yet a
    /// favourite of `user_email`, remove when it already is.
    pub fn toggle(user_email: &str, target: &RoommateCard) -> Self {
        FavouriteUpdate {
            user_email: user_email.to_string(),
            fav_email: target.email.clone(),
            add_fav: !target.is_fav,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn card(is_fav: bool) -> RoommateCard {
        RoommateCard {
            email: "a@x.com".to_string(),
            name: "Ana".to_string(),
            age: 24,
            start_date: String::new(),
            title: String::new(),
            locations: vec![],
            gender: "other".to_string(),
            is_fav,
            phone: String::new(),
            photo_url: String::new(),
        }
    }

    #[test]
    fn toggle_negates_the_current_flag() {
        assert!(FavouriteUpdate::toggle("me@x.com", &card(false)).add_fav);
        assert!(!FavouriteUpdate::toggle("me@x.com", &card(true)).add_fav);
    }

    #[test]
    fn payload_keeps_snake_case_keys_and_boolean_flag() {
        let json = serde_json::to_value(FavouriteUpdate::toggle("me@x.com", &card(false))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "user_email": "me@x.com",
                "fav_email": "a@x.com",
                "add_fav": true,
            })
        );
    }
}
