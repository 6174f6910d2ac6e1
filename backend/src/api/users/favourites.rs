//! Favourite list mutations.

use common::favourite::FavouriteUpdate;
use tracing::info;

use crate::db_utils::sqlite_utils::{Db, load_profile, store_favourites};
use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavouriteOutcome {
    Added,
    Removed,
}

impl FavouriteOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Added => "Favourite Added!",
            Self::Removed => "Favourite Deleted!",
        }
    }
}

/// Applies one favourite toggle. Adding is an add-to-set (a second add of
/// the same email changes nothing); removing drops every occurrence. An
/// unknown acting user is a not-found error.
pub async fn update_favourite(
    pool: &Db,
    update: &FavouriteUpdate,
) -> ApiResult<FavouriteOutcome> {
    let profile = load_profile(pool, &update.user_email)
        .await?
        .ok_or(ApiError::NoMatchingProfile)?;

    let mut favourites = profile.favourites();
    if update.add_fav {
        if !favourites.iter().any(|f| f == &update.fav_email) {
            favourites.push(update.fav_email.clone());
        }
    } else {
        favourites.retain(|f| f != &update.fav_email);
    }

    let affected = store_favourites(pool, &update.user_email, &favourites).await?;
    if affected == 0 {
        return Err(ApiError::NoMatchingProfile);
    }

    info!(
        "favourites updated: {} now has {} favourites",
        update.user_email,
        favourites.len()
    );
    Ok(if update.add_fav {
        FavouriteOutcome::Added
    } else {
        FavouriteOutcome::Removed
    })
}
