use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::Role;

/// (user, establishment, role) membership triple. The backend enforces
/// authorization; the client only uses these rows for render-time gating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEstablishment {
    pub user_id: Uuid,
    pub establishment_id: Uuid,
    pub role: Role,
    /// Denormalized establishment name returned by the membership
    /// endpoint so the switcher renders without an extra round-trip.
    #[serde(default)]
    pub establishment_name: Option<String>,
}

/// Payload for linking a user to an establishment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserEstablishment {
    pub user_id: Uuid,
    pub establishment_id: Uuid,
    pub role: Role,
}
