use contracts::domain::membership::{NewUserEstablishment, UserEstablishment};
use contracts::domain::user::UserProfile;

use crate::shared::api_utils::{api_url, delete, get_json, post_json};

/// Memberships of a user across all establishments.
pub async fn fetch_memberships_for_user(user_id: &str) -> Result<Vec<UserEstablishment>, String> {
    let url = api_url(&format!(
        "/user_establishment?user_id={}",
        urlencoding::encode(user_id)
    ));
    get_json(&url).await
}

/// Members of one establishment (team page).
pub async fn fetch_members_of(establishment_id: &str) -> Result<Vec<UserEstablishment>, String> {
    let url = api_url(&format!(
        "/user_establishment?establishment_id={}",
        urlencoding::encode(establishment_id)
    ));
    get_json(&url).await
}

/// Profiles of an establishment's members (names for the team table).
pub async fn fetch_member_profiles(establishment_id: &str) -> Result<Vec<UserProfile>, String> {
    let url = api_url(&format!(
        "/user_profile?establishment_id={}",
        urlencoding::encode(establishment_id)
    ));
    get_json(&url).await
}

/// Link a user to an establishment with a role.
pub async fn create_membership(new: &NewUserEstablishment) -> Result<UserEstablishment, String> {
    post_json(&api_url("/user_establishment"), new).await
}

/// Remove a membership link.
pub async fn delete_membership(user_id: &str, establishment_id: &str) -> Result<(), String> {
    let url = api_url(&format!(
        "/user_establishment?user_id={}&establishment_id={}",
        urlencoding::encode(user_id),
        urlencoding::encode(establishment_id)
    ));
    delete(&url).await
}
