use common::account::{Credentials, SignupRequest};
use common::browse_const::DEFAULT_PHOTO_URL;
use common::favourite::FavouriteUpdate;

use crate::api::recommendations::{directory_dataset, other_mates, top_matches};
use crate::api::users::{
    FavouriteOutcome, insert_user, update_favourite, user_details, validate_user,
};
use crate::db_utils::sqlite_utils::{
    Db, LoginRow, ProfileRow, connect, insert_login, insert_profile, load_profile,
};
use crate::error::ApiError;

fn login_row(email: &str, name: &str) -> LoginRow {
    LoginRow {
        email: email.to_string(),
        name: name.to_string(),
        password: "test@123".to_string(),
        phone: "4135550000".to_string(),
        degree: "Master's".to_string(),
        dob: "1999-10-06".to_string(),
        gender: "other".to_string(),
        major: "Economics".to_string(),
    }
}

fn profile_row(email: &str, recommended: Option<&[&str]>, favourites: &[&str]) -> ProfileRow {
    ProfileRow {
        email: email.to_string(),
        age: 24,
        start_date: "2025-09-01".to_string(),
        title: "Quiet tenant".to_string(),
        photo_url: None,
        smoke: false,
        drink: false,
        budget: 800,
        locations: r#"["Amherst"]"#.to_string(),
        dietary_preference: "None".to_string(),
        recommended_roommates: recommended.map(|r| serde_json::to_string(r).expect("json")),
        favourite_roommates: serde_json::to_string(favourites).expect("json"),
    }
}

/// Four complete users, one recommendation pointing at a missing user, and
/// one profile without a login row.
async fn setup() -> Db {
    let pool = connect("sqlite::memory:").await.expect("db");
    for (email, name) in [
        ("ana@x.com", "Ana"),
        ("ben@x.com", "Ben"),
        ("cara@x.com", "Cara"),
        ("dan@x.com", "Dan"),
    ] {
        insert_login(&pool, &login_row(email, name))
            .await
            .expect("login");
    }
    insert_profile(
        &pool,
        &profile_row(
            "ana@x.com",
            Some(&["ben@x.com", "cara@x.com", "ghost@x.com"]),
            &["cara@x.com"],
        ),
    )
    .await
    .expect("profile");
    insert_profile(&pool, &profile_row("ben@x.com", Some(&[]), &[]))
        .await
        .expect("profile");
    insert_profile(&pool, &profile_row("cara@x.com", None, &[]))
        .await
        .expect("profile");
    insert_profile(&pool, &profile_row("dan@x.com", Some(&[]), &[]))
        .await
        .expect("profile");
    insert_profile(&pool, &profile_row("orphan@x.com", Some(&[]), &[]))
        .await
        .expect("profile");
    pool
}

#[tokio::test]
async fn top_matches_joins_profiles_and_skips_missing_candidates() {
    let pool = setup().await;
    let cards = top_matches(&pool, "ana@x.com").await.expect("cards");

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].email, "ben@x.com");
    assert_eq!(cards[0].name, "Ben");
    assert_eq!(cards[0].start_date, "Sep 2025");
    assert_eq!(cards[0].photo_url, DEFAULT_PHOTO_URL);
    assert!(!cards[0].is_fav);
    assert_eq!(cards[1].email, "cara@x.com");
    assert!(cards[1].is_fav);
}

#[tokio::test]
async fn top_matches_requires_an_email() {
    let pool = setup().await;
    let err = top_matches(&pool, "").await.expect_err("should fail");
    assert!(matches!(err, ApiError::EmailRequired));
}

#[tokio::test]
async fn top_matches_for_unknown_user_is_not_found() {
    let pool = setup().await;
    let err = top_matches(&pool, "zoe@x.com")
        .await
        .expect_err("should fail");
    assert!(matches!(err, ApiError::NoRecommendations));
}

#[tokio::test]
async fn top_matches_without_recommendation_list_is_not_found() {
    let pool = setup().await;
    let err = top_matches(&pool, "cara@x.com")
        .await
        .expect_err("should fail");
    assert!(matches!(err, ApiError::NoRecommendations));
}

#[tokio::test]
async fn top_matches_without_login_row_is_not_found() {
    let pool = setup().await;
    let err = top_matches(&pool, "orphan@x.com")
        .await
        .expect_err("should fail");
    assert!(matches!(err, ApiError::LoginNotFound));
}

#[tokio::test]
async fn other_mates_excludes_self_and_top_suggestions() {
    let pool = setup().await;
    let mates = other_mates(&pool, "ana@x.com").await.expect("mates");
    let emails: Vec<&str> = mates.iter().map(|m| m.email.as_str()).collect();
    assert_eq!(emails, vec!["dan@x.com"]);
}

#[tokio::test]
async fn directory_dataset_lists_every_user_without_favourite_flags() {
    let pool = setup().await;
    let users = directory_dataset(&pool).await.expect("users");
    let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(
        emails,
        vec!["ana@x.com", "ben@x.com", "cara@x.com", "dan@x.com"]
    );
    assert!(users.iter().all(|u| !u.is_fav));
}

#[tokio::test]
async fn favourite_add_is_idempotent_and_remove_round_trips() {
    let pool = setup().await;
    let add = FavouriteUpdate {
        user_email: "ana@x.com".to_string(),
        fav_email: "dan@x.com".to_string(),
        add_fav: true,
    };

    let outcome = update_favourite(&pool, &add).await.expect("add");
    assert_eq!(outcome, FavouriteOutcome::Added);
    update_favourite(&pool, &add).await.expect("second add");
    let favourites = load_profile(&pool, "ana@x.com")
        .await
        .expect("load")
        .expect("profile")
        .favourites();
    assert_eq!(
        favourites.iter().filter(|f| *f == "dan@x.com").count(),
        1
    );

    let remove = FavouriteUpdate {
        add_fav: false,
        ..add
    };
    let outcome = update_favourite(&pool, &remove).await.expect("remove");
    assert_eq!(outcome, FavouriteOutcome::Removed);
    let favourites = load_profile(&pool, "ana@x.com")
        .await
        .expect("load")
        .expect("profile")
        .favourites();
    assert!(!favourites.iter().any(|f| f == "dan@x.com"));
}

#[tokio::test]
async fn favourite_update_for_unknown_user_is_not_found() {
    let pool = setup().await;
    let update = FavouriteUpdate {
        user_email: "zoe@x.com".to_string(),
        fav_email: "dan@x.com".to_string(),
        add_fav: true,
    };
    let err = update_favourite(&pool, &update)
        .await
        .expect_err("should fail");
    assert!(matches!(err, ApiError::NoMatchingProfile));
}

#[tokio::test]
async fn validate_user_checks_the_stored_password() {
    let pool = setup().await;
    let ok = Credentials {
        email: "ana@x.com".to_string(),
        password: "test@123".to_string(),
    };
    validate_user(&pool, &ok).await.expect("valid login");

    let wrong = Credentials {
        password: "nope".to_string(),
        ..ok.clone()
    };
    let err = validate_user(&pool, &wrong).await.expect_err("should fail");
    assert!(matches!(err, ApiError::WrongPassword));

    let unknown = Credentials {
        email: "zoe@x.com".to_string(),
        password: "test@123".to_string(),
    };
    let err = validate_user(&pool, &unknown)
        .await
        .expect_err("should fail");
    assert!(matches!(err, ApiError::UnknownUser));
}

#[tokio::test]
async fn insert_user_creates_account_and_profile_stub() {
    let pool = setup().await;
    let signup = SignupRequest {
        name: "Zoe".to_string(),
        email: "zoe@x.com".to_string(),
        password: "secret".to_string(),
        phone: "4135550007".to_string(),
        degree: "Bachelor's".to_string(),
        dob: "2002-01-01".to_string(),
        gender: "female".to_string(),
        major: "History".to_string(),
    };
    insert_user(&pool, &signup).await.expect("signup");

    let credentials = Credentials {
        email: "zoe@x.com".to_string(),
        password: "secret".to_string(),
    };
    validate_user(&pool, &credentials).await.expect("login");

    // no recommendation list yet
    let err = top_matches(&pool, "zoe@x.com")
        .await
        .expect_err("should fail");
    assert!(matches!(err, ApiError::NoRecommendations));

    let err = insert_user(&pool, &signup).await.expect_err("duplicate");
    assert!(matches!(err, ApiError::EmailTaken));
}

#[tokio::test]
async fn user_details_joins_both_rows() {
    let pool = setup().await;
    let details = user_details(&pool, "ana@x.com").await.expect("details");
    assert_eq!(details.name, "Ana");
    assert_eq!(details.start_date, "Sep 2025");
    assert_eq!(details.budget, 800);
    assert_eq!(details.locations, vec!["Amherst".to_string()]);

    let err = user_details(&pool, "zoe@x.com")
        .await
        .expect_err("should fail");
    assert!(matches!(err, ApiError::DetailsNotFound));
}
