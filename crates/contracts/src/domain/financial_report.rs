use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::numeric::lenient_f64;

/// Per-establishment, per-month financial snapshot computed server-side.
///
/// Every numeric field is lenient (`number | numeric string | null`)
/// because the source data mixes computed values with spreadsheet
/// imports. Immutable once computed, except through the explicit
/// edit/delete endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialReport {
    pub id: Uuid,
    pub establishment_id: Uuid,
    /// Reporting month, "YYYY-MM".
    pub period: String,

    // Revenue
    #[serde(default, deserialize_with = "lenient_f64")]
    pub revenue_total: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub revenue_food: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub revenue_drink: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub covers: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub average_ticket: Option<f64>,

    // Purchases
    #[serde(default, deserialize_with = "lenient_f64")]
    pub purchases_total: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub purchases_food: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub purchases_drink: Option<f64>,

    // Material cost ratios (fraction or percent depending on source)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub material_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub food_cost_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub drink_cost_ratio: Option<f64>,

    // Margin
    #[serde(default, deserialize_with = "lenient_f64")]
    pub gross_margin: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub gross_margin_ratio: Option<f64>,

    // Payroll
    #[serde(default, deserialize_with = "lenient_f64")]
    pub payroll_total: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub payroll_ratio: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub staff_count: Option<f64>,

    // Overheads
    #[serde(default, deserialize_with = "lenient_f64")]
    pub occupancy_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub energy_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub insurance_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fees_cost: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub other_overheads: Option<f64>,

    // Result
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ebitda: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ebitda_ratio: Option<f64>,

    // Scores
    #[serde(default, deserialize_with = "lenient_f64")]
    pub global_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub purchase_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub recipe_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub financial_score: Option<f64>,
}

/// Editable subset of a report, sent to the edit endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialReportPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_food: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_drink: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchases_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payroll_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub covers: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_numeric_payload() {
        let json = r#"{
            "id": "4dbe24f1-2b79-4b52-9f24-1df0e019d6c4",
            "establishment_id": "8f5c3c75-31a1-41a8-9d39-63ce1b0f1f40",
            "period": "2024-03",
            "revenue_total": "52 340,10",
            "revenue_food": 41210.55,
            "material_ratio": "0,284",
            "payroll_total": null,
            "ebitda": ""
        }"#;
        let report: FinancialReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.period, "2024-03");
        assert_eq!(report.revenue_total, Some(52340.10));
        assert_eq!(report.revenue_food, Some(41210.55));
        assert_eq!(report.material_ratio, Some(0.284));
        assert_eq!(report.payroll_total, None);
        assert_eq!(report.ebitda, None);
        // absent entirely
        assert_eq!(report.global_score, None);
    }

    #[test]
    fn test_patch_skips_unset_fields() {
        let patch = FinancialReportPatch {
            revenue_total: Some(1000.0),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"revenue_total":1000.0}"#);
    }
}
