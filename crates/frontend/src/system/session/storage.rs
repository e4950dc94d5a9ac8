//! Single owner of every browser-storage key the application touches.
//!
//! Nothing else reads or writes `localStorage`/`sessionStorage`
//! directly; components go through these typed accessors.

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";
const USER_ID_KEY: &str = "user_id";
const CURRENT_ESTABLISHMENT_KEY: &str = "current_establishment_id";
const SIDEBAR_DETAIL_PATH_KEY: &str = "sidebar_detail_path";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Save refresh token to localStorage
pub fn save_refresh_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(REFRESH_TOKEN_KEY, token);
    }
}

/// Get refresh token from localStorage
pub fn get_refresh_token() -> Option<String> {
    local_storage()?.get_item(REFRESH_TOKEN_KEY).ok()?
}

/// Persist the signed-in user's id
pub fn save_user_id(id: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(USER_ID_KEY, id);
    }
}

pub fn get_user_id() -> Option<String> {
    local_storage()?.get_item(USER_ID_KEY).ok()?
}

/// Persist the active establishment id for the next visit
pub fn save_current_establishment_id(id: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(CURRENT_ESTABLISHMENT_KEY, id);
    }
}

pub fn get_current_establishment_id() -> Option<String> {
    local_storage()?.get_item(CURRENT_ESTABLISHMENT_KEY).ok()?
}

pub fn clear_current_establishment_id() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(CURRENT_ESTABLISHMENT_KEY);
    }
}

/// Remember which sidebar detail section was open (survives reloads
/// within the tab, not across browser restarts).
pub fn save_sidebar_detail_path(path: &str) {
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(SIDEBAR_DETAIL_PATH_KEY, path);
    }
}

pub fn get_sidebar_detail_path() -> Option<String> {
    session_storage()?.get_item(SIDEBAR_DETAIL_PATH_KEY).ok()?
}

/// Clear everything user-scoped (sign-out). The active establishment
/// id goes too so the next account does not inherit it.
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        let _ = storage.remove_item(USER_ID_KEY);
        let _ = storage.remove_item(CURRENT_ESTABLISHMENT_KEY);
    }
}
