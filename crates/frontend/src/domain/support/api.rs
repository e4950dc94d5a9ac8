use contracts::domain::support::{ClientLogEntry, MaintenanceStatus, SupportTicket};

use crate::shared::api_utils::{api_url, get_json, post_json_unit};

/// Submit a support ticket.
pub async fn create_ticket(ticket: &SupportTicket) -> Result<(), String> {
    post_json_unit(&api_url("/support_ticket"), ticket).await
}

/// Maintenance flag, checked once at application start.
pub async fn fetch_maintenance_status() -> Result<MaintenanceStatus, String> {
    get_json(&api_url("/maintenance")).await
}

/// Best-effort error shipping to `/logs`. Never surfaces to the user;
/// a failure to log is only logged locally.
pub async fn ship_error_log(message: String, context: Option<String>) {
    let entry = ClientLogEntry {
        level: "error".to_string(),
        message,
        context,
    };
    if let Err(e) = post_json_unit(&api_url("/logs"), &entry).await {
        log::debug!("Failed to ship client log: {}", e);
    }
}
