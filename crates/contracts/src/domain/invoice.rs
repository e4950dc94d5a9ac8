use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::numeric::lenient_f64;

/// Processing state of a supplier invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Processed,
    Rejected,
}

impl InvoiceStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Processed => "Processed",
            InvoiceStatus::Rejected => "Rejected",
        }
    }
}

/// A scanned supplier invoice. Line extraction happens server-side;
/// the client only lists, opens and deletes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub establishment_id: Uuid,
    #[serde(default)]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub invoice_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_amount: Option<f64>,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub document_path: Option<String>,
}
