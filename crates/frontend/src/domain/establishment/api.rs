use contracts::domain::establishment::{
    Establishment, EstablishmentPatch, NewEstablishment, Plan, UsageCounter,
};

use crate::shared::api_utils::{api_url, get_json, patch_json, post_json, storage_url};

/// Fetch one establishment by id.
pub async fn fetch_establishment(id: &str) -> Result<Establishment, String> {
    let url = api_url(&format!("/establishments/{}", urlencoding::encode(id)));
    get_json(&url).await
}

/// Fetch all usage counters of an establishment.
pub async fn fetch_usage_counters(establishment_id: &str) -> Result<Vec<UsageCounter>, String> {
    let url = api_url(&format!(
        "/usage_counters?establishment_id={}",
        urlencoding::encode(establishment_id)
    ));
    get_json(&url).await
}

/// Fetch a plan definition by code ("free", "plus", "premium").
pub async fn fetch_plan(code: &str) -> Result<Plan, String> {
    let url = api_url(&format!("/plans/{}", urlencoding::encode(code)));
    get_json(&url).await
}

/// Create an establishment (onboarding step 1).
pub async fn create_establishment(new: &NewEstablishment) -> Result<Establishment, String> {
    post_json(&api_url("/establishments"), new).await
}

/// Patch establishment settings (name, address, logo path).
pub async fn update_establishment(id: &str, patch: &EstablishmentPatch) -> Result<(), String> {
    let url = api_url(&format!("/establishments/{}", urlencoding::encode(id)));
    patch_json(&url, patch).await
}

/// Upload a logo to the object-storage bucket. Returns the storage path
/// to persist on the establishment record.
pub async fn upload_logo(establishment_id: &str, file: web_sys::File) -> Result<String, String> {
    let path = format!("logos/{}/{}", establishment_id, file.name());
    let url = storage_url(&format!("/object/{}", path));
    let content_type = file.type_();

    let mut builder = gloo_net::http::Request::post(&url).header("Content-Type", &content_type);
    if let Some(token) = crate::system::session::storage::get_access_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    let response = builder
        .body(wasm_bindgen::JsValue::from(file))
        .map_err(|e| format!("Failed to build upload: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Upload failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Upload failed: {}", response.status()));
    }
    Ok(path)
}
