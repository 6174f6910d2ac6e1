//! Directory of everyone outside a user's top suggestions.

use common::browse_const::TOP_SUGGESTION_COUNT;
use common::roommate::OtherMate;

use crate::api::recommendations::start_date::format_start_date;
use crate::db_utils::sqlite_utils::{Db, load_all_profiles, load_login, load_profile};
use crate::error::{ApiError, ApiResult};

/// Every profile that is neither the requesting user nor one of their top
/// suggestions, with the extended lifestyle fields.
pub async fn other_mates(pool: &Db, email: &str) -> ApiResult<Vec<OtherMate>> {
    if email.is_empty() {
        return Err(ApiError::EmailRequired);
    }

    let profile = load_profile(pool, email)
        .await?
        .ok_or(ApiError::NoRecommendations)?;
    let recommended = profile.recommended().ok_or(ApiError::NoRecommendations)?;
    let favourites = profile.favourites();
    let top = &recommended[..recommended.len().min(TOP_SUGGESTION_COUNT)];

    let mut mates = Vec::new();
    for candidate in load_all_profiles(pool).await? {
        if candidate.email == email || top.contains(&candidate.email) {
            continue;
        }
        let Some(login) = load_login(pool, &candidate.email).await? else {
            continue;
        };
        let is_fav = favourites.iter().any(|f| f == &candidate.email);
        mates.push(OtherMate {
            name: login.name,
            age: candidate.age as u32,
            start_date: format_start_date(&candidate.start_date),
            locations: candidate.locations(),
            gender: login.gender,
            smoke: candidate.smoke,
            budget: candidate.budget as u32,
            drink: candidate.drink,
            phone: login.phone,
            is_fav,
            photo_url: candidate.photo_url(),
            dietary_preference: candidate.dietary_preference,
            title: candidate.title,
            email: candidate.email,
        });
    }
    Ok(mates)
}
