//! Account validation and signup.

use common::account::{Credentials, SignupRequest};
use tracing::info;

use crate::db_utils::sqlite_utils::{
    Db, LoginRow, ProfileRow, insert_login, insert_profile, load_login,
};
use crate::error::{ApiError, ApiResult};

/// Checks a login attempt against the stored account record.
pub async fn validate_user(pool: &Db, credentials: &Credentials) -> ApiResult<()> {
    let login = load_login(pool, &credentials.email)
        .await?
        .ok_or(ApiError::UnknownUser)?;
    if credentials.password != login.password {
        return Err(ApiError::WrongPassword);
    }
    Ok(())
}

/// Creates the account record plus an empty profile row. The profile keeps
/// a NULL recommendation list until the matcher has run for this user, so
/// suggestion lookups report not-found rather than an empty match list.
pub async fn insert_user(pool: &Db, signup: &SignupRequest) -> ApiResult<()> {
    if load_login(pool, &signup.email).await?.is_some() {
        return Err(ApiError::EmailTaken);
    }

    insert_login(
        pool,
        &LoginRow {
            email: signup.email.clone(),
            name: signup.name.clone(),
            password: signup.password.clone(),
            phone: signup.phone.clone(),
            degree: signup.degree.clone(),
            dob: signup.dob.clone(),
            gender: signup.gender.clone(),
            major: signup.major.clone(),
        },
    )
    .await?;
    insert_profile(
        pool,
        &ProfileRow {
            email: signup.email.clone(),
            age: 0,
            start_date: String::new(),
            title: String::new(),
            photo_url: None,
            smoke: false,
            drink: false,
            budget: 0,
            locations: "[]".to_string(),
            dietary_preference: String::new(),
            recommended_roommates: None,
            favourite_roommates: "[]".to_string(),
        },
    )
    .await?;

    info!("new signup: {}", signup.email);
    Ok(())
}
