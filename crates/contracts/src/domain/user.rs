use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Companion profile record extending the auth provider's user.
///
/// The auth provider owns id/email; everything else lives in this
/// profile row keyed by the provider's user id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: Uuid,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar_path: Option<String>,
}

impl UserProfile {
    /// Display name assembled from profile parts, empty when unset.
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(f), Some(l)) => format!("{} {}", f, l),
            (Some(f), None) => f.clone(),
            (None, Some(l)) => l.clone(),
            (None, None) => String::new(),
        }
    }
}
