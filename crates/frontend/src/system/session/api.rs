//! Bridge to the hosted auth provider's session API.
//!
//! The provider speaks its own wire format (user metadata bag, token
//! grants); this module converts it into the `contracts` auth types the
//! rest of the application consumes.

use gloo_net::http::Request;
use serde::Deserialize;
use uuid::Uuid;

use contracts::system::auth::{
    AuthSession, AuthUser, Credentials, InviteRequest, PasswordResetRequest, RefreshRequest,
    SignUpMetadata, SignUpRequest,
};

use crate::shared::api_utils::auth_url;

/// User record as the provider returns it.
#[derive(Debug, Clone, Deserialize)]
struct ProviderUser {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: serde_json::Value,
}

impl From<ProviderUser> for AuthUser {
    fn from(u: ProviderUser) -> Self {
        let display_name = u
            .user_metadata
            .get("display_name")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());
        AuthUser {
            id: u.id,
            email: u.email,
            display_name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    user: ProviderUser,
}

impl From<TokenResponse> for AuthSession {
    fn from(r: TokenResponse) -> Self {
        AuthSession {
            access_token: r.access_token,
            refresh_token: r.refresh_token,
            user: r.user.into(),
        }
    }
}

/// Sign in with email and password.
pub async fn sign_in(email: String, password: String) -> Result<AuthSession, String> {
    let response = Request::post(&auth_url("/token?grant_type=password"))
        .json(&Credentials { email, password })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Sign-in failed: {}", response.status()));
    }

    response
        .json::<TokenResponse>()
        .await
        .map(Into::into)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Exchange a refresh token for a new session.
pub async fn refresh_session(refresh_token: String) -> Result<AuthSession, String> {
    let response = Request::post(&auth_url("/token?grant_type=refresh_token"))
        .json(&RefreshRequest { refresh_token })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Refresh failed: {}", response.status()));
    }

    response
        .json::<TokenResponse>()
        .await
        .map(Into::into)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create an account. The provider signs the user in immediately when
/// email confirmation is disabled for the project.
pub async fn sign_up(
    email: String,
    password: String,
    display_name: Option<String>,
) -> Result<AuthSession, String> {
    let body = SignUpRequest {
        email,
        password,
        data: SignUpMetadata { display_name },
    };

    let response = Request::post(&auth_url("/signup"))
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Sign-up failed: {}", response.status()));
    }

    response
        .json::<TokenResponse>()
        .await
        .map(Into::into)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Revoke the current session server-side.
pub async fn sign_out(access_token: &str) -> Result<(), String> {
    let response = Request::post(&auth_url("/logout"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Sign-out failed: {}", response.status()));
    }
    Ok(())
}

/// Ask the provider to send a password-reset email.
pub async fn reset_password(email: String) -> Result<(), String> {
    let response = Request::post(&auth_url("/recover"))
        .json(&PasswordResetRequest { email })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Password reset failed: {}", response.status()));
    }
    Ok(())
}

/// Admin invite-by-email (team page). Requires an admin-capable token.
pub async fn invite_by_email(access_token: &str, email: String) -> Result<(), String> {
    let response = Request::post(&auth_url("/invite"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .json(&InviteRequest { email })
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Invite failed: {}", response.status()));
    }
    Ok(())
}

/// Validate a token by fetching the current user.
pub async fn get_current_user(access_token: &str) -> Result<AuthUser, String> {
    let response = Request::get(&auth_url("/user"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }

    response
        .json::<ProviderUser>()
        .await
        .map(Into::into)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
