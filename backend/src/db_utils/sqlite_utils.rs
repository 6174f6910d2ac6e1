//! Sqlite access for the login and profile tables.
//!
//! The two tables mirror the upstream collections: `user_login` holds the
//! account record, `user_profile` the matching data. List-valued columns
//! (`locations`, `recommended_roommates`, `favourite_roommates`) are stored
//! as JSON arrays in TEXT.

use std::str::FromStr;

use anyhow::{Context, Result};
use common::browse_const::DEFAULT_PHOTO_URL;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use tokio::sync::OnceCell;

pub type Db = Pool<Sqlite>;

static BROWSE_POOL: OnceCell<Db> = OnceCell::const_new();

/// Process-wide pool, created on first use from `DATABASE_URL` (an
/// in-memory database when unset).
pub async fn browse_pool() -> Result<&'static Db> {
    BROWSE_POOL
        .get_or_try_init(|| async {
            let url =
                std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
            connect(&url).await
        })
        .await
}

/// Opens a pool and makes sure the schema exists.
pub async fn connect(database_url: &str) -> Result<Db> {
    let connect_options = SqliteConnectOptions::from_str(database_url)
        .context("invalid database url")?
        .create_if_missing(true);
    // a memory database lives and dies with its connection, so hold exactly one
    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new().max_connections(1).min_connections(1)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };
    let pool = pool_options
        .connect_with(connect_options)
        .await
        .context("failed to open sqlite database")?;
    ensure_schema(&pool).await?;
    Ok(pool)
}

async fn ensure_schema(pool: &Db) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_login (
            email    TEXT PRIMARY KEY,
            name     TEXT NOT NULL,
            password TEXT NOT NULL,
            phone    TEXT NOT NULL DEFAULT '',
            degree   TEXT NOT NULL DEFAULT '',
            dob      TEXT NOT NULL DEFAULT '',
            gender   TEXT NOT NULL DEFAULT 'other',
            major    TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_profile (
            email                 TEXT PRIMARY KEY,
            age                   INTEGER NOT NULL DEFAULT 0,
            start_date            TEXT NOT NULL DEFAULT '',
            title                 TEXT NOT NULL DEFAULT '',
            photo_url             TEXT,
            smoke                 INTEGER NOT NULL DEFAULT 0,
            drink                 INTEGER NOT NULL DEFAULT 0,
            budget                INTEGER NOT NULL DEFAULT 0,
            locations             TEXT NOT NULL DEFAULT '[]',
            dietary_preference    TEXT NOT NULL DEFAULT '',
            recommended_roommates TEXT,
            favourite_roommates   TEXT NOT NULL DEFAULT '[]'
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}


#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LoginRow {
    pub email: String,
    pub name: String,
    pub password: String,
    pub phone: String,
    pub degree: String,
    pub dob: String,
    pub gender: String,
    pub major: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRow {
    pub email: String,
    pub age: i64,
    pub start_date: String,
    pub title: String,
    pub photo_url: Option<String>,
    pub smoke: bool,
    pub drink: bool,
    pub budget: i64,
    pub locations: String,
    pub dietary_preference: String,
    /// NULL means the matcher has not produced a list for this user yet.
    pub recommended_roommates: Option<String>,
    pub favourite_roommates: String,
}

impl ProfileRow {
    pub fn locations(&self) -> Vec<String> {
        parse_json_list(&self.locations)
    }

    pub fn favourites(&self) -> Vec<String> {
        parse_json_list(&self.favourite_roommates)
    }

    pub fn recommended(&self) -> Option<Vec<String>> {
        self.recommended_roommates.as_deref().map(parse_json_list)
    }

    pub fn photo_url(&self) -> String {
        self.photo_url
            .clone()
            .unwrap_or_else(|| DEFAULT_PHOTO_URL.to_string())
    }
}

/// Unparseable column content reads as an empty list.
fn parse_json_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub(crate) fn to_json_list(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}


const SQL_SELECT_LOGIN: &str = r#"
    SELECT email, name, password, phone, degree, dob, gender, major
    FROM user_login
    WHERE email = ?
"#;

const SQL_SELECT_PROFILE: &str = r#"
    SELECT email, age, start_date, title, photo_url, smoke, drink, budget,
           locations, dietary_preference, recommended_roommates, favourite_roommates
    FROM user_profile
    WHERE email = ?
"#;

const SQL_SELECT_ALL_PROFILES: &str = r#"
    SELECT email, age, start_date, title, photo_url, smoke, drink, budget,
           locations, dietary_preference, recommended_roommates, favourite_roommates
    FROM user_profile
    ORDER BY email
"#;

const SQL_INSERT_LOGIN: &str = r#"
    INSERT INTO user_login (email, name, password, phone, degree, dob, gender, major)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
"#;

const SQL_INSERT_PROFILE: &str = r#"
    INSERT INTO user_profile (email, age, start_date, title, photo_url, smoke, drink, budget,
                              locations, dietary_preference, recommended_roommates, favourite_roommates)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

const SQL_UPDATE_FAVOURITES: &str = r#"
    UPDATE user_profile SET favourite_roommates = ? WHERE email = ?
"#;

pub async fn load_login(pool: &Db, email: &str) -> Result<Option<LoginRow>, sqlx::Error> {
    sqlx::query_as::<_, LoginRow>(SQL_SELECT_LOGIN)
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn load_profile(pool: &Db, email: &str) -> Result<Option<ProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>(SQL_SELECT_PROFILE)
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn load_all_profiles(pool: &Db) -> Result<Vec<ProfileRow>, sqlx::Error> {
    sqlx::query_as::<_, ProfileRow>(SQL_SELECT_ALL_PROFILES)
        .fetch_all(pool)
        .await
}

pub async fn insert_login(pool: &Db, row: &LoginRow) -> Result<(), sqlx::Error> {
    sqlx::query(SQL_INSERT_LOGIN)
        .bind(&row.email)
        .bind(&row.name)
        .bind(&row.password)
        .bind(&row.phone)
        .bind(&row.degree)
        .bind(&row.dob)
        .bind(&row.gender)
        .bind(&row.major)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn insert_profile(pool: &Db, row: &ProfileRow) -> Result<(), sqlx::Error> {
    sqlx::query(SQL_INSERT_PROFILE)
        .bind(&row.email)
        .bind(row.age)
        .bind(&row.start_date)
        .bind(&row.title)
        .bind(&row.photo_url)
        .bind(row.smoke)
        .bind(row.drink)
        .bind(row.budget)
        .bind(&row.locations)
        .bind(&row.dietary_preference)
        .bind(&row.recommended_roommates)
        .bind(&row.favourite_roommates)
        .execute(pool)
        .await?;
    Ok(())
}

/// Replaces the stored favourites list, returning the affected row count so
/// callers can tell a missing user apart from a successful write.
pub async fn store_favourites(
    pool: &Db,
    email: &str,
    favourites: &[String],
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(SQL_UPDATE_FAVOURITES)
        .bind(to_json_list(favourites))
        .bind(email)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
