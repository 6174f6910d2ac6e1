//! Full profile export backing the static user dataset route.

use common::roommate::RoommateCard;

use crate::api::recommendations::top_matches::assemble_card;
use crate::db_utils::sqlite_utils::{Db, load_all_profiles, load_login};
use crate::error::ApiResult;

/// Every user as a listing record. The export has no requesting user, so
/// the favourite flag is always false.
pub async fn directory_dataset(pool: &Db) -> ApiResult<Vec<RoommateCard>> {
    let mut users = Vec::new();
    for profile in load_all_profiles(pool).await? {
        let Some(login) = load_login(pool, &profile.email).await? else {
            continue;
        };
        users.push(assemble_card(profile, login, false));
    }
    Ok(users)
}
