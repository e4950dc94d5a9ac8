//! REST API plumbing.
//!
//! Builds request URLs from the current window location and wraps
//! `gloo_net` with JSON helpers that attach the session's bearer token.
//! Every helper returns `Result<_, String>` with a message ready for a
//! UI error signal; failures are terminal to the operation (no retries).

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::system::session::storage;

/// Origin of the current page ("https://example.com"), empty when no
/// window is available.
pub fn origin() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a REST API URL. `path` starts with "/", e.g. "/establishments".
pub fn api_url(path: &str) -> String {
    format!("{}/api/v1{}", origin(), path)
}

/// Build an auth-provider URL, e.g. auth_url("/token").
pub fn auth_url(path: &str) -> String {
    format!("{}/auth/v1{}", origin(), path)
}

/// Build an object-storage URL, e.g. storage_url("/object/logos/x.png").
pub fn storage_url(path: &str) -> String {
    format!("{}/storage/v1{}", origin(), path)
}

/// Sort direction for list endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Asc,
    Desc,
}

/// Standard query parameters understood by every list endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListQuery {
    pub fn ordered(field: &str, direction: Direction) -> Self {
        Self {
            order_by: Some(field.to_string()),
            direction: Some(direction),
            limit: None,
        }
    }

    /// Append the query string to a path ("" when nothing is set).
    pub fn append_to(&self, path: &str) -> String {
        match serde_qs::to_string(self) {
            Ok(qs) if !qs.is_empty() => format!("{}?{}", path, qs),
            _ => path.to_string(),
        }
    }
}

fn bearer() -> Option<String> {
    storage::get_access_token().map(|t| format!("Bearer {}", t))
}

fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match bearer() {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

/// GET a JSON resource.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = with_auth(Request::get(url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body, expecting a JSON resource back.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let response = with_auth(Request::post(url))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body where the response body is irrelevant.
pub async fn post_json_unit<B: Serialize>(url: &str, body: &B) -> Result<(), String> {
    let response = with_auth(Request::post(url))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

/// PATCH a JSON body onto a resource.
pub async fn patch_json<B: Serialize>(url: &str, body: &B) -> Result<(), String> {
    let response = with_auth(Request::patch(url))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

/// DELETE a resource.
pub async fn delete(url: &str) -> Result<(), String> {
    let response = with_auth(Request::delete(url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_string() {
        let q = ListQuery {
            order_by: Some("period".into()),
            direction: Some(Direction::Desc),
            limit: Some(24),
        };
        assert_eq!(
            q.append_to("/financial_reports"),
            "/financial_reports?order_by=period&direction=desc&limit=24"
        );
    }

    #[test]
    fn test_empty_list_query() {
        let q = ListQuery::default();
        assert_eq!(q.append_to("/establishments"), "/establishments");
    }
}
