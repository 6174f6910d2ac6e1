//! Public REST surface for the matching APIs.
//!
//! Route paths, status codes, and body shapes are part of the wire
//! contract: success bodies are `{"message": ...}`, error bodies
//! `{"error": ...}`, and clients treat exactly HTTP 200 as success.

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use common::account::{Credentials, SignupRequest};
use common::favourite::FavouriteUpdate;
use common::roommate::{OtherMate, RoommateCard};
use common::user_details::UserDetails;

use crate::api::recommendations::{directory_dataset, other_mates, top_matches};
use crate::api::users::{insert_user, update_favourite, user_details, validate_user};
use crate::db_utils::sqlite_utils::Db;
use crate::error::{ApiError, ApiResult};

pub fn rest_router(pool: Db) -> Router {
    Router::new()
        .route("/rs/top-match", get(get_top_match))
        .route("/rs/other-mates", get(get_other_mates))
        .route("/user_profile_data.json", get(get_user_profile_data))
        .route("/user-details/{email}", get(get_user_details))
        .route("/user/favourites", post(post_favourites))
        .route("/user/validate", post(post_validate))
        .route("/user/insert", post(post_insert))
        .with_state(pool)
}


#[derive(Debug, Deserialize)]
struct EmailParam {
    email: Option<String>,
}

async fn get_top_match(
    State(pool): State<Db>,
    Query(params): Query<EmailParam>,
) -> ApiResult<Json<Vec<RoommateCard>>> {
    let email = params.email.unwrap_or_default();
    Ok(Json(top_matches(&pool, &email).await?))
}

async fn get_other_mates(
    State(pool): State<Db>,
    Query(params): Query<EmailParam>,
) -> ApiResult<Json<Vec<OtherMate>>> {
    let email = params.email.unwrap_or_default();
    Ok(Json(other_mates(&pool, &email).await?))
}

async fn get_user_profile_data(State(pool): State<Db>) -> ApiResult<Json<Vec<RoommateCard>>> {
    Ok(Json(directory_dataset(&pool).await?))
}

async fn get_user_details(
    State(pool): State<Db>,
    Path(email): Path<String>,
) -> ApiResult<Json<UserDetails>> {
    Ok(Json(user_details(&pool, &email).await?))
}


#[derive(Debug, Deserialize)]
struct FavouritePayload {
    user_email: Option<String>,
    fav_email: Option<String>,
    add_fav: Option<bool>,
}

async fn post_favourites(
    State(pool): State<Db>,
    Json(payload): Json<FavouritePayload>,
) -> ApiResult<Json<Value>> {
    let update = FavouriteUpdate {
        user_email: payload.user_email.ok_or(ApiError::MissingField("user_email"))?,
        fav_email: payload.fav_email.ok_or(ApiError::MissingField("fav_email"))?,
        add_fav: payload.add_fav.ok_or(ApiError::MissingField("add_fav"))?,
    };
    info!(
        "favourite update: {} -> {} (add: {})",
        update.user_email, update.fav_email, update.add_fav
    );
    let outcome = update_favourite(&pool, &update).await?;
    Ok(Json(json!({ "message": outcome.message() })))
}


#[derive(Debug, Deserialize)]
struct CredentialsPayload {
    email: Option<String>,
    password: Option<String>,
}

async fn post_validate(
    State(pool): State<Db>,
    Json(payload): Json<CredentialsPayload>,
) -> ApiResult<Json<Value>> {
    let credentials = Credentials {
        email: payload.email.ok_or(ApiError::MissingField("email"))?,
        password: payload.password.ok_or(ApiError::MissingField("password"))?,
    };
    validate_user(&pool, &credentials).await?;
    Ok(Json(json!({ "message": "User Logged in!" })))
}


#[derive(Debug, Deserialize)]
struct SignupPayload {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    phone: Option<String>,
    degree: Option<String>,
    dob: Option<String>,
    gender: Option<String>,
    major: Option<String>,
}

impl SignupPayload {
    fn into_request(self) -> Result<SignupRequest, ApiError> {
        Ok(SignupRequest {
            name: self.name.ok_or(ApiError::MissingField("name"))?,
            email: self.email.ok_or(ApiError::MissingField("email"))?,
            password: self.password.ok_or(ApiError::MissingField("password"))?,
            phone: self.phone.ok_or(ApiError::MissingField("phone"))?,
            degree: self.degree.ok_or(ApiError::MissingField("degree"))?,
            dob: self.dob.ok_or(ApiError::MissingField("dob"))?,
            gender: self.gender.ok_or(ApiError::MissingField("gender"))?,
            major: self.major.ok_or(ApiError::MissingField("major"))?,
        })
    }
}

async fn post_insert(
    State(pool): State<Db>,
    Json(payload): Json<SignupPayload>,
) -> ApiResult<Json<Value>> {
    let signup = payload.into_request()?;
    insert_user(&pool, &signup).await?;
    Ok(Json(json!({ "message": "You have been Signed Up!" })))
}
