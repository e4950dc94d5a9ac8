use contracts::domain::invoice::Invoice;

use crate::shared::api_utils::{api_url, delete, get_json, Direction, ListQuery};

/// Invoices of an establishment, newest first.
pub async fn fetch_invoices(establishment_id: &str) -> Result<Vec<Invoice>, String> {
    let query = ListQuery::ordered("invoice_date", Direction::Desc);
    let path = query.append_to("/invoices");
    let url = api_url(&format!(
        "{}&establishment_id={}",
        path,
        urlencoding::encode(establishment_id)
    ));
    get_json(&url).await
}

/// Delete an invoice record (the scanned document stays in storage
/// until the backend garbage-collects it).
pub async fn delete_invoice(id: &str) -> Result<(), String> {
    let url = api_url(&format!("/invoices/{}", urlencoding::encode(id)));
    delete(&url).await
}
