use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub type ApiResult<T, E = ApiError> = std::result::Result<T, E>;

/// Failures surfaced by the data APIs, mapped onto the HTTP statuses and
/// messages of the public REST surface.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Email parameter is required")]
    EmailRequired,

    #[error("No recommended roommates found")]
    NoRecommendations,

    #[error("User login data not found")]
    LoginNotFound,

    #[error("User does not exist please Sign up!")]
    UnknownUser,

    #[error("Wrong Password, try again!")]
    WrongPassword,

    #[error("Email already registered")]
    EmailTaken,

    #[error("No matching document found")]
    NoMatchingProfile,

    #[error("User not found")]
    DetailsNotFound,

    #[error("Internal Server Error")]
    Db(#[from] sqlx::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingField(_) | Self::EmailRequired | Self::EmailTaken => {
                StatusCode::BAD_REQUEST
            }
            Self::WrongPassword => StatusCode::UNAUTHORIZED,
            Self::NoRecommendations
            | Self::LoginNotFound
            | Self::UnknownUser
            | Self::NoMatchingProfile
            | Self::DetailsNotFound => StatusCode::NOT_FOUND,
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Db(ref e) = self {
            tracing::error!("database error: {:?}", e);
        }
        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
