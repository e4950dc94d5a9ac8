use serde::{Deserialize, Serialize};

/// Payload for the support-ticket endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupportTicket {
    pub subject: String,
    pub body: String,
    pub email: String,
}

/// Maintenance flag checked at application start.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaintenanceStatus {
    pub enabled: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Client-side error shipped to the `/logs` endpoint so support can
/// see what a user hit without asking for a console dump.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientLogEntry {
    pub level: String,
    pub message: String,
    #[serde(default)]
    pub context: Option<String>,
}

/// Server-managed validation pattern, keyed by field kind
/// ("email", "phone", ...). The client keeps compiled-in fallbacks for
/// when the fetch fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegexPattern {
    pub key: String,
    pub pattern: String,
}
