use contracts::domain::financial_report::{FinancialReport, FinancialReportPatch};

use crate::shared::api_utils::{api_url, delete, get_json, patch_json, Direction, ListQuery};

/// Monthly reports of an establishment, newest first.
pub async fn fetch_reports(establishment_id: &str) -> Result<Vec<FinancialReport>, String> {
    let query = ListQuery::ordered("period", Direction::Desc);
    let path = query.append_to("/financial_reports");
    let url = api_url(&format!(
        "{}&establishment_id={}",
        path,
        urlencoding::encode(establishment_id)
    ));
    get_json(&url).await
}

/// One report by id.
pub async fn fetch_report(id: &str) -> Result<FinancialReport, String> {
    let url = api_url(&format!("/financial_reports/{}", urlencoding::encode(id)));
    get_json(&url).await
}

/// Patch the editable totals of a report. The backend recomputes the
/// derived ratios.
pub async fn update_report(id: &str, patch: &FinancialReportPatch) -> Result<(), String> {
    let url = api_url(&format!("/financial_reports/{}", urlencoding::encode(id)));
    patch_json(&url, patch).await
}

/// Delete a report snapshot.
pub async fn delete_report(id: &str) -> Result<(), String> {
    let url = api_url(&format!("/financial_reports/{}", urlencoding::encode(id)));
    delete(&url).await
}
