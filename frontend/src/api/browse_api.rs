//! Client API calls for the roommate data endpoints.

use common::account::Credentials;
use common::favourite::FavouriteUpdate;
use common::roommate::RoommateCard;
use common::user_details::UserDetails;
use dioxus::prelude::*;

#[cfg(feature = "server")]
async fn pool() -> Result<&'static backend::db_utils::sqlite_utils::Db, ServerFnError> {
    let x = backend::db_utils::sqlite_utils::browse_pool().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[cfg(feature = "server")]
fn data_error(e: backend::error::ApiError) -> ServerFnError {
    ServerFnError::ServerError {
        message: e.to_string(),
        code: e.status_code().as_u16().into(),
        details: None,
    }
}

#[server]
pub async fn get_top_matches(email: String) -> Result<Vec<RoommateCard>, ServerFnError> {
    let x = backend::api::recommendations::top_matches(pool().await?, &email).await;
    x.map_err(data_error)
}

#[server]
pub async fn get_directory_users() -> Result<Vec<RoommateCard>, ServerFnError> {
    let x = backend::api::recommendations::directory_dataset(pool().await?).await;
    x.map_err(data_error)
}

#[server]
pub async fn get_user_details(email: String) -> Result<UserDetails, ServerFnError> {
    let x = backend::api::users::user_details(pool().await?, &email).await;
    x.map_err(data_error)
}

#[server]
pub async fn update_favourite(update: FavouriteUpdate) -> Result<(), ServerFnError> {
    let x = backend::api::users::update_favourite(pool().await?, &update).await;
    x.map(|_outcome| ()).map_err(data_error)
}

#[server]
pub async fn validate_login(credentials: Credentials) -> Result<(), ServerFnError> {
    let x = backend::api::users::validate_user(pool().await?, &credentials).await;
    x.map_err(data_error)
}
