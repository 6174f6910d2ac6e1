//! Top roommate suggestions for one user.

use common::browse_const::TOP_SUGGESTION_COUNT;
use common::roommate::RoommateCard;
use futures::future::try_join_all;

use crate::api::recommendations::start_date::format_start_date;
use crate::db_utils::sqlite_utils::{Db, LoginRow, ProfileRow, load_login, load_profile};
use crate::error::{ApiError, ApiResult};

/// Resolves the stored recommendation list of `email` into up to five
/// listing records. Candidates whose profile or login row has gone missing
/// are skipped rather than failing the whole request.
pub async fn top_matches(pool: &Db, email: &str) -> ApiResult<Vec<RoommateCard>> {
    if email.is_empty() {
        return Err(ApiError::EmailRequired);
    }

    let profile = load_profile(pool, email)
        .await?
        .ok_or(ApiError::NoRecommendations)?;
    let recommended = profile.recommended().ok_or(ApiError::NoRecommendations)?;
    let favourites = profile.favourites();
    if load_login(pool, email).await?.is_none() {
        return Err(ApiError::LoginNotFound);
    }

    let lookups = recommended
        .iter()
        .take(TOP_SUGGESTION_COUNT)
        .map(|candidate| candidate_card(pool, candidate, &favourites));
    let cards = try_join_all(lookups).await?;
    Ok(cards.into_iter().flatten().collect())
}

async fn candidate_card(
    pool: &Db,
    email: &str,
    favourites: &[String],
) -> ApiResult<Option<RoommateCard>> {
    let Some(profile) = load_profile(pool, email).await? else {
        return Ok(None);
    };
    let Some(login) = load_login(pool, email).await? else {
        return Ok(None);
    };
    let is_fav = favourites.iter().any(|f| f == email);
    Ok(Some(assemble_card(profile, login, is_fav)))
}

/// Joins one profile row and its login row into the listing record shape.
pub(crate) fn assemble_card(profile: ProfileRow, login: LoginRow, is_fav: bool) -> RoommateCard {
    let start_date = format_start_date(&profile.start_date);
    let locations = profile.locations();
    let photo_url = profile.photo_url();
    RoommateCard {
        email: profile.email,
        name: login.name,
        age: profile.age as u32,
        start_date,
        title: profile.title,
        locations,
        gender: login.gender,
        is_fav,
        phone: login.phone,
        photo_url,
    }
}
