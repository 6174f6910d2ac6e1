//! Demo dataset inserted at startup when the database is empty.

use anyhow::Result;
use tracing::info;

use crate::db_utils::sqlite_utils::{
    Db, LoginRow, ProfileRow, insert_login, insert_profile, to_json_list,
};

struct SeedUser {
    email: &'static str,
    name: &'static str,
    gender: &'static str,
    phone: &'static str,
    degree: &'static str,
    dob: &'static str,
    major: &'static str,
    age: i64,
    start_date: &'static str,
    title: &'static str,
    budget: i64,
    smoke: bool,
    drink: bool,
    dietary_preference: &'static str,
    locations: &'static [&'static str],
    recommended: &'static [&'static str],
    favourites: &'static [&'static str],
    photo_url: Option<&'static str>,
}

const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        email: "demo@getmearoommate.com",
        name: "Demo User",
        gender: "other",
        phone: "4135550100",
        degree: "Master's",
        dob: "1999-10-06",
        major: "Computer Science",
        age: 25,
        start_date: "2025-09-01",
        title: "Graduate student looking for a quiet place",
        budget: 900,
        smoke: false,
        drink: false,
        dietary_preference: "Vegetarian",
        locations: &["Amherst", "Hadley"],
        recommended: &[
            "priya@getmearoommate.com",
            "liam@getmearoommate.com",
            "sofia@getmearoommate.com",
            "mateus@getmearoommate.com",
            "grace@getmearoommate.com",
        ],
        favourites: &["liam@getmearoommate.com"],
        photo_url: None,
    },
    SeedUser {
        email: "priya@getmearoommate.com",
        name: "Priya Raman",
        gender: "female",
        phone: "4135550101",
        degree: "Master's",
        dob: "2000-02-14",
        major: "Economics",
        age: 24,
        start_date: "2025-08-15",
        title: "Early riser, keeps the kitchen spotless",
        budget: 800,
        smoke: false,
        drink: false,
        dietary_preference: "Vegetarian",
        locations: &["Amherst"],
        recommended: &[
            "demo@getmearoommate.com",
            "grace@getmearoommate.com",
            "sofia@getmearoommate.com",
            "naman@getmearoommate.com",
            "patrick@getmearoommate.com",
        ],
        favourites: &[],
        photo_url: Some("https://i.pravatar.cc/150?u=priya"),
    },
    SeedUser {
        email: "liam@getmearoommate.com",
        name: "Liam Walsh",
        gender: "male",
        phone: "4135550102",
        degree: "Bachelor's",
        dob: "2001-06-30",
        major: "Biology",
        age: 23,
        start_date: "2025-09-01",
        title: "Night owl, mostly at the lab",
        budget: 700,
        smoke: false,
        drink: true,
        dietary_preference: "None",
        locations: &["Northampton", "Amherst"],
        recommended: &[
            "mateus@getmearoommate.com",
            "demo@getmearoommate.com",
            "patrick@getmearoommate.com",
            "priya@getmearoommate.com",
            "grace@getmearoommate.com",
        ],
        favourites: &[],
        photo_url: Some("https://i.pravatar.cc/150?u=liam"),
    },
    SeedUser {
        email: "sofia@getmearoommate.com",
        name: "Sofia Marino",
        gender: "female",
        phone: "4135550103",
        degree: "PhD",
        dob: "1997-12-03",
        major: "Linguistics",
        age: 27,
        start_date: "2026-01-15",
        title: "Quiet, travels most weekends",
        budget: 1100,
        smoke: false,
        drink: true,
        dietary_preference: "Pescatarian",
        locations: &["Hadley"],
        recommended: &[
            "grace@getmearoommate.com",
            "priya@getmearoommate.com",
            "demo@getmearoommate.com",
            "liam@getmearoommate.com",
            "naman@getmearoommate.com",
        ],
        favourites: &["grace@getmearoommate.com"],
        photo_url: None,
    },
    SeedUser {
        email: "mateus@getmearoommate.com",
        name: "Mateus Costa",
        gender: "male",
        phone: "4135550104",
        degree: "Master's",
        dob: "1998-04-22",
        major: "Mechanical Engineering",
        age: 26,
        start_date: "2025-07-01",
        title: "Cooks a lot, shares the food",
        budget: 850,
        smoke: true,
        drink: true,
        dietary_preference: "None",
        locations: &["Amherst", "Sunderland"],
        recommended: &[
            "liam@getmearoommate.com",
            "patrick@getmearoommate.com",
            "demo@getmearoommate.com",
            "naman@getmearoommate.com",
            "sofia@getmearoommate.com",
        ],
        favourites: &[],
        photo_url: Some("https://i.pravatar.cc/150?u=mateus"),
    },
    SeedUser {
        email: "grace@getmearoommate.com",
        name: "Grace Chen",
        gender: "female",
        phone: "4135550105",
        degree: "Bachelor's",
        dob: "2002-09-09",
        major: "Public Health",
        age: 22,
        start_date: "2025-09-01",
        title: "Keeps plants, no pets please",
        budget: 650,
        smoke: false,
        drink: false,
        dietary_preference: "Vegan",
        locations: &["Amherst"],
        recommended: &[
            "priya@getmearoommate.com",
            "sofia@getmearoommate.com",
            "demo@getmearoommate.com",
            "patrick@getmearoommate.com",
            "liam@getmearoommate.com",
        ],
        favourites: &[],
        photo_url: None,
    },
    SeedUser {
        email: "patrick@getmearoommate.com",
        name: "Patrick Reed",
        gender: "male",
        phone: "4135550106",
        degree: "Master's",
        dob: "1996-11-18",
        major: "Data Science",
        age: 28,
        start_date: "2025-10-01",
        title: "Works remote, needs a desk corner",
        budget: 1000,
        smoke: false,
        drink: true,
        dietary_preference: "None",
        locations: &["Northampton"],
        recommended: &[
            "mateus@getmearoommate.com",
            "liam@getmearoommate.com",
            "naman@getmearoommate.com",
            "demo@getmearoommate.com",
            "priya@getmearoommate.com",
        ],
        favourites: &[],
        photo_url: Some("https://i.pravatar.cc/150?u=patrick"),
    },
    SeedUser {
        email: "naman@getmearoommate.com",
        name: "Naman Shah",
        gender: "male",
        phone: "1772756941",
        degree: "Master's",
        dob: "1999-10-06",
        major: "Economics",
        age: 25,
        start_date: "2025-08-01",
        title: "Gym at six, asleep by eleven",
        budget: 750,
        smoke: false,
        drink: false,
        dietary_preference: "Vegetarian",
        locations: &["Amherst", "Hadley"],
        recommended: &[
            "demo@getmearoommate.com",
            "priya@getmearoommate.com",
            "mateus@getmearoommate.com",
            "grace@getmearoommate.com",
            "sofia@getmearoommate.com",
        ],
        favourites: &[],
        photo_url: None,
    },
];

/// Populates both tables with the demo users unless profiles already exist.
pub async fn seed_if_empty(pool: &Db) -> Result<()> {
    let profiles: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_profile")
        .fetch_one(pool)
        .await?;
    if profiles > 0 {
        return Ok(());
    }

    for user in SEED_USERS {
        insert_login(
            pool,
            &LoginRow {
                email: user.email.to_string(),
                name: user.name.to_string(),
                password: "test@123".to_string(),
                phone: user.phone.to_string(),
                degree: user.degree.to_string(),
                dob: user.dob.to_string(),
                gender: user.gender.to_string(),
                major: user.major.to_string(),
            },
        )
        .await?;
        insert_profile(
            pool,
            &ProfileRow {
                email: user.email.to_string(),
                age: user.age,
                start_date: user.start_date.to_string(),
                title: user.title.to_string(),
                photo_url: user.photo_url.map(|p| p.to_string()),
                smoke: user.smoke,
                drink: user.drink,
                budget: user.budget,
                locations: json_of(user.locations),
                dietary_preference: user.dietary_preference.to_string(),
                recommended_roommates: Some(json_of(user.recommended)),
                favourite_roommates: json_of(user.favourites),
            },
        )
        .await?;
    }
    info!("seeded {} demo users", SEED_USERS.len());
    Ok(())
}

fn json_of(items: &[&str]) -> String {
    let owned: Vec<String> = items.iter().map(|s| s.to_string()).collect();
    to_json_list(&owned)
}
