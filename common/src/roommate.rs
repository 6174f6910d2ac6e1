//! Shared roommate listing models and list reconciliation helpers.

use serde::{Deserialize, Serialize};


/// One roommate record as rendered in the browse lists. The wire shape uses
/// camelCase keys. `email` is the unique identifier; `is_fav` says whether
/// the requesting user has favourited this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoommateCard {
    pub email: String,
    pub name: String,
    pub age: u32,
    /// Pre-formatted as "MMM YYYY"; empty when the stored date is unusable.
    pub start_date: String,
    pub title: String,
    pub locations: Vec<String>,
    pub gender: String,
    pub is_fav: bool,
    pub phone: String,
    pub photo_url: String,
}

/// Extended listing record returned by the other-mates query: the card
/// fields plus lifestyle details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherMate {
    pub email: String,
    pub name: String,
    pub age: u32,
    pub start_date: String,
    pub title: String,
    pub locations: Vec<String>,
    pub gender: String,
    pub smoke: bool,
    pub budget: u32,
    pub drink: bool,
    pub dietary_preference: String,
    pub phone: String,
    pub is_fav: bool,
    pub photo_url: String,
}

/// Which browse list a favourite toggle targets. The two lists identify
/// records by different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roster {
    /// Top suggestions, keyed by email.
    TopSuggestions,
    /// The general directory, keyed by display name.
    Directory,
}

/// Looks up a record by the roster's key. `None` means the caller must
/// treat the action as a no-op.
pub fn find_roommate<'a>(
    list: &'a [RoommateCard],
    key: &str,
    roster: Roster,
) -> Option<&'a RoommateCard> {
    match roster {
        Roster::TopSuggestions => list.iter().find(|r| r.email == key),
        Roster::Directory => list.iter().find(|r| r.name == key),
    }
}

/// Returns a new list with `is_fav` flipped on the record(s) whose email
/// matches; every other record is cloned unchanged.
pub fn with_favourite_toggled(list: &[RoommateCard], email: &str) -> Vec<RoommateCard> {
    list.iter()
        .map(|r| {
            if r.email == email {
                RoommateCard {
                    is_fav: !r.is_fav,
                    ..r.clone()
                }
            } else {
                r.clone()
            }
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn card(email: &str, name: &str, is_fav: bool) -> RoommateCard {
        RoommateCard {
            email: email.to_string(),
            name: name.to_string(),
            age: 24,
            start_date: "Oct 1999".to_string(),
            title: "Graduate student".to_string(),
            locations: vec!["Amherst".to_string()],
            gender: "other".to_string(),
            is_fav,
            phone: "1772756941".to_string(),
            photo_url: crate::browse_const::DEFAULT_PHOTO_URL.to_string(),
        }
    }

    #[test]
    fn toggle_flips_only_the_matching_record() {
        let list = vec![card("a@x.com", "Ana", false), card("b@x.com", "Ben", true)];
        let toggled = with_favourite_toggled(&list, "a@x.com");
        assert!(toggled[0].is_fav);
        assert!(toggled[1].is_fav);
        assert_eq!(toggled[0].name, "Ana");
    }

    #[test]
    fn toggling_twice_restores_the_original_list() {
        let list = vec![card("a@x.com", "Ana", false), card("b@x.com", "Ben", true)];
        let once = with_favourite_toggled(&list, "b@x.com");
        let twice = with_favourite_toggled(&once, "b@x.com");
        assert_eq!(twice, list);
    }

    #[test]
    fn toggle_with_unknown_email_changes_nothing() {
        let list = vec![card("a@x.com", "Ana", false)];
        assert_eq!(with_favourite_toggled(&list, "missing@x.com"), list);
    }

    #[test]
    fn suggestions_are_looked_up_by_email() {
        let list = vec![card("a@x.com", "Ana", false)];
        assert!(find_roommate(&list, "a@x.com", Roster::TopSuggestions).is_some());
        assert!(find_roommate(&list, "Ana", Roster::TopSuggestions).is_none());
    }

    #[test]
    fn directory_is_looked_up_by_name() {
        let list = vec![card("a@x.com", "Ana", false)];
        let found = find_roommate(&list, "Ana", Roster::Directory);
        assert_eq!(found.map(|r| r.email.as_str()), Some("a@x.com"));
        assert!(find_roommate(&list, "a@x.com", Roster::Directory).is_none());
    }

    #[test]
    fn card_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(card("a@x.com", "Ana", true)).unwrap();
        assert_eq!(json["isFav"], serde_json::json!(true));
        assert_eq!(json["photoUrl"], serde_json::json!(crate::browse_const::DEFAULT_PHOTO_URL));
        assert_eq!(json["startDate"], serde_json::json!("Oct 1999"));
        assert!(json.get("is_fav").is_none());
    }
}
