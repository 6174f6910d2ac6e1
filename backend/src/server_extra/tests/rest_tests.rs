use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::db_utils::seed_data::seed_if_empty;
use crate::db_utils::sqlite_utils::connect;
use crate::server_extra::rest_router;

async fn test_app() -> Router {
    let pool = connect("sqlite::memory:").await.expect("db");
    seed_if_empty(&pool).await.expect("seed");
    rest_router(pool)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).expect("request")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn top_match_without_email_param_is_400() {
    let app = test_app().await;
    let response = app.oneshot(get("/rs/top-match")).await.expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("Email parameter is required"));
}

#[tokio::test]
async fn top_match_returns_camel_cased_cards() {
    let app = test_app().await;
    let response = app
        .oneshot(get("/rs/top-match?email=demo@getmearoommate.com"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let cards = body.as_array().expect("array");
    assert_eq!(cards.len(), 5);
    let liam = cards
        .iter()
        .find(|c| c["email"] == json!("liam@getmearoommate.com"))
        .expect("liam in top matches");
    assert_eq!(liam["isFav"], json!(true));
    assert!(liam["photoUrl"].is_string());
    assert!(liam["startDate"].is_string());
}

#[tokio::test]
async fn other_mates_excludes_requester_and_top_matches() {
    let app = test_app().await;
    let response = app
        .oneshot(get("/rs/other-mates?email=demo@getmearoommate.com"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let emails: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|m| m["email"].as_str().expect("email"))
        .collect();
    assert_eq!(
        emails,
        vec!["naman@getmearoommate.com", "patrick@getmearoommate.com"]
    );
}

#[tokio::test]
async fn profile_dataset_lists_every_user() {
    let app = test_app().await;
    let response = app
        .oneshot(get("/user_profile_data.json"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let users = body.as_array().expect("array");
    assert_eq!(users.len(), 8);
    assert!(users.iter().all(|u| u["isFav"] == json!(false)));
}

#[tokio::test]
async fn favourites_requires_every_field() {
    let app = test_app().await;
    let response = app
        .oneshot(post_json(
            "/user/favourites",
            json!({ "user_email": "demo@getmearoommate.com" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("fav_email is required"));
}

#[tokio::test]
async fn favourites_add_and_remove_answer_with_200_messages() {
    let app = test_app().await;
    let add = json!({
        "user_email": "demo@getmearoommate.com",
        "fav_email": "patrick@getmearoommate.com",
        "add_fav": true,
    });
    let response = app
        .clone()
        .oneshot(post_json("/user/favourites", add.clone()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Favourite Added!"));

    let remove = json!({
        "user_email": "demo@getmearoommate.com",
        "fav_email": "patrick@getmearoommate.com",
        "add_fav": false,
    });
    let response = app
        .oneshot(post_json("/user/favourites", remove))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("Favourite Deleted!"));
}

#[tokio::test]
async fn favourites_for_unknown_user_is_404() {
    let app = test_app().await;
    let response = app
        .oneshot(post_json(
            "/user/favourites",
            json!({
                "user_email": "nobody@x.com",
                "fav_email": "patrick@getmearoommate.com",
                "add_fav": true,
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("No matching document found"));
}

#[tokio::test]
async fn user_details_route_answers_200_or_404() {
    let app = test_app().await;
    let response = app
        .clone()
        .oneshot(get("/user-details/priya@getmearoommate.com"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["name"], json!("Priya Raman"));
    assert_eq!(body["dietaryPreference"], json!("Vegetarian"));

    let response = app
        .oneshot(get("/user-details/nobody@x.com"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn validate_answers_by_credential_state() {
    let app = test_app().await;
    let response = app
        .clone()
        .oneshot(post_json(
            "/user/validate",
            json!({ "email": "demo@getmearoommate.com", "password": "test@123" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("User Logged in!"));

    let response = app
        .clone()
        .oneshot(post_json(
            "/user/validate",
            json!({ "email": "demo@getmearoommate.com", "password": "wrong" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("Wrong Password, try again!"));

    let response = app
        .oneshot(post_json(
            "/user/validate",
            json!({ "email": "nobody@x.com", "password": "test@123" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("User does not exist please Sign up!"));
}

#[tokio::test]
async fn insert_validates_fields_then_signs_up() {
    let app = test_app().await;
    let response = app
        .clone()
        .oneshot(post_json(
            "/user/insert",
            json!({ "name": "Zoe", "email": "zoe@x.com" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("password is required"));

    let response = app
        .oneshot(post_json(
            "/user/insert",
            json!({
                "name": "Zoe",
                "email": "zoe@x.com",
                "password": "secret",
                "phone": "4135550007",
                "degree": "Bachelor's",
                "dob": "2002-01-01",
                "gender": "female",
                "major": "History",
            }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], json!("You have been Signed Up!"));
}
