//! Single-user profile lookup for the detail view.

use common::user_details::UserDetails;

use crate::api::recommendations::start_date::format_start_date;
use crate::db_utils::sqlite_utils::{Db, load_login, load_profile};
use crate::error::{ApiError, ApiResult};

pub async fn user_details(pool: &Db, email: &str) -> ApiResult<UserDetails> {
    let profile = load_profile(pool, email)
        .await?
        .ok_or(ApiError::DetailsNotFound)?;
    let login = load_login(pool, email)
        .await?
        .ok_or(ApiError::DetailsNotFound)?;

    let start_date = format_start_date(&profile.start_date);
    let locations = profile.locations();
    let photo_url = profile.photo_url();
    Ok(UserDetails {
        email: profile.email,
        name: login.name,
        age: profile.age as u32,
        start_date,
        title: profile.title,
        locations,
        gender: login.gender,
        smoke: profile.smoke,
        drink: profile.drink,
        budget: profile.budget as u32,
        dietary_preference: profile.dietary_preference,
        phone: login.phone,
        photo_url,
    })
}
