//! Pure computation layer behind the performance dashboard.
//!
//! Everything here is total over its inputs: report rows arrive with
//! lenient numerics already coerced to `Option<f64>`, and this module
//! turns them into display-ready percentages, period-over-period deltas,
//! a cross-tenant ranking and chart series.

use contracts::domain::financial_report::FinancialReport;
use contracts::domain::live_score::LiveScore;
use uuid::Uuid;

/// Normalize a ratio for display as a percentage.
///
/// Source rows mix fractions ("0.28") and percentages ("28.4") for the
/// same column; values with `|x| <= 1` are treated as fractions and
/// scaled by 100, anything else passes through. Missing values render
/// as 0.
pub fn normalize_percent(value: Option<f64>) -> f64 {
    match value {
        None => 0.0,
        Some(x) if x.abs() <= 1.0 => x * 100.0,
        Some(x) => x,
    }
}

/// One month of display-ready figures.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyPoint {
    pub period: String,
    pub revenue: f64,
    pub gross_margin_pct: f64,
    pub material_pct: f64,
    pub payroll_pct: f64,
    pub ebitda: f64,
}

impl MonthlyPoint {
    fn from_report(report: &FinancialReport) -> Self {
        Self {
            period: report.period.clone(),
            revenue: report.revenue_total.unwrap_or(0.0),
            gross_margin_pct: normalize_percent(report.gross_margin_ratio),
            material_pct: normalize_percent(report.material_ratio),
            payroll_pct: normalize_percent(report.payroll_ratio),
            ebitda: report.ebitda.unwrap_or(0.0),
        }
    }
}

/// Chronologically ascending monthly series for charts and the monthly
/// table.
pub fn monthly_series(reports: &[FinancialReport]) -> Vec<MonthlyPoint> {
    let mut points: Vec<MonthlyPoint> = reports.iter().map(MonthlyPoint::from_report).collect();
    points.sort_by(|a, b| a.period.cmp(&b.period));
    points
}

/// Period-over-period movement of the headline figures: the latest
/// month against the month immediately preceding it in date ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodDeltas {
    pub revenue: f64,
    pub gross_margin_pts: f64,
    pub ebitda: f64,
}

/// Compute deltas from the monthly series. `None` when fewer than two
/// months exist.
pub fn period_deltas(points: &[MonthlyPoint]) -> Option<PeriodDeltas> {
    if points.len() < 2 {
        return None;
    }
    let current = points.last()?;
    let previous = points.get(points.len() - 2)?;
    Some(PeriodDeltas {
        revenue: current.revenue - previous.revenue,
        gross_margin_pts: current.gross_margin_pct - previous.gross_margin_pct,
        ebitda: current.ebitda - previous.ebitda,
    })
}

/// Rank of an establishment among all tenants' global scores under
/// descending sort: `1 + count(scores strictly greater than its own)`.
/// Ties keep fetch order (stable). `None` when the tenant has no score
/// row.
pub fn global_ranking(scores: &[LiveScore], establishment_id: Uuid) -> Option<usize> {
    let mine = scores
        .iter()
        .find(|s| s.establishment_id == establishment_id)?
        .global_score
        .unwrap_or(0.0);

    let greater = scores
        .iter()
        .filter(|s| s.establishment_id != establishment_id)
        .filter(|s| s.global_score.unwrap_or(0.0) > mine)
        .count();

    Some(1 + greater)
}

/// Labeled share of total costs for the breakdown chart. Shares are
/// percentages of the month's cost base; a zero base yields an empty
/// breakdown.
pub fn cost_breakdown(report: &FinancialReport) -> Vec<(&'static str, f64)> {
    let parts = [
        ("Purchases", report.purchases_total.unwrap_or(0.0)),
        ("Payroll", report.payroll_total.unwrap_or(0.0)),
        ("Occupancy", report.occupancy_cost.unwrap_or(0.0)),
        ("Energy", report.energy_cost.unwrap_or(0.0)),
        ("Insurance", report.insurance_cost.unwrap_or(0.0)),
        ("Fees", report.fees_cost.unwrap_or(0.0)),
        ("Other", report.other_overheads.unwrap_or(0.0)),
    ];
    let total: f64 = parts.iter().map(|(_, v)| v).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    parts
        .iter()
        .filter(|(_, v)| *v > 0.0)
        .map(|(label, v)| (*label, v / total * 100.0))
        .collect()
}

/// Average recipe cost ratio (as a percentage) across active recipes
/// with usable figures.
pub fn average_recipe_cost_pct(recipes: &[contracts::domain::recipe::Recipe]) -> Option<f64> {
    let ratios: Vec<f64> = recipes
        .iter()
        .filter(|r| r.is_active)
        .filter_map(|r| r.cost_ratio())
        .collect();
    if ratios.is_empty() {
        return None;
    }
    Some(ratios.iter().sum::<f64>() / ratios.len() as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(period: &str, revenue: f64, margin_ratio: f64, ebitda: f64) -> FinancialReport {
        FinancialReport {
            period: period.to_string(),
            revenue_total: Some(revenue),
            gross_margin_ratio: Some(margin_ratio),
            ebitda: Some(ebitda),
            ..Default::default()
        }
    }

    fn score(id: u128, global: Option<f64>) -> LiveScore {
        LiveScore {
            establishment_id: Uuid::from_u128(id),
            global_score: global,
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_percent() {
        assert_eq!(normalize_percent(Some(0.28)), 28.0);
        assert_eq!(normalize_percent(Some(-0.5)), -50.0);
        assert_eq!(normalize_percent(Some(1.0)), 100.0);
        assert_eq!(normalize_percent(Some(28.4)), 28.4);
        assert_eq!(normalize_percent(None), 0.0);
    }

    #[test]
    fn test_monthly_series_sorted_ascending() {
        let reports = vec![
            report("2024-03", 300.0, 0.7, 30.0),
            report("2024-01", 100.0, 0.7, 10.0),
            report("2024-02", 200.0, 0.7, 20.0),
        ];
        let series = monthly_series(&reports);
        let periods: Vec<&str> = series.iter().map(|p| p.period.as_str()).collect();
        assert_eq!(periods, vec!["2024-01", "2024-02", "2024-03"]);
    }

    #[test]
    fn test_period_deltas() {
        let reports = vec![
            report("2024-02", 52000.0, 0.72, 6000.0),
            report("2024-03", 55000.0, 0.70, 6500.0),
        ];
        let series = monthly_series(&reports);
        let deltas = period_deltas(&series).unwrap();
        assert_eq!(deltas.revenue, 3000.0);
        assert!((deltas.gross_margin_pts - -2.0).abs() < 1e-9);
        assert_eq!(deltas.ebitda, 500.0);
    }

    #[test]
    fn test_period_deltas_need_two_months() {
        let series = monthly_series(&[report("2024-03", 100.0, 0.5, 10.0)]);
        assert_eq!(period_deltas(&series), None);
    }

    #[test]
    fn test_global_ranking_is_one_plus_strictly_greater() {
        let scores = vec![
            score(1, Some(82.0)),
            score(2, Some(91.0)),
            score(3, Some(75.0)),
            score(4, Some(91.0)),
        ];
        // Two tenants strictly above 82
        assert_eq!(global_ranking(&scores, Uuid::from_u128(1)), Some(3));
        // Tied tenants do not count against each other
        assert_eq!(global_ranking(&scores, Uuid::from_u128(2)), Some(1));
        assert_eq!(global_ranking(&scores, Uuid::from_u128(4)), Some(1));
        // Bottom of the list
        assert_eq!(global_ranking(&scores, Uuid::from_u128(3)), Some(4));
        // Unknown tenant
        assert_eq!(global_ranking(&scores, Uuid::from_u128(99)), None);
    }

    #[test]
    fn test_global_ranking_missing_scores_count_as_zero() {
        let scores = vec![score(1, None), score(2, Some(10.0))];
        assert_eq!(global_ranking(&scores, Uuid::from_u128(1)), Some(2));
    }

    #[test]
    fn test_cost_breakdown_shares() {
        let mut r = report("2024-03", 100.0, 0.7, 10.0);
        r.purchases_total = Some(30.0);
        r.payroll_total = Some(50.0);
        r.energy_cost = Some(20.0);
        let breakdown = cost_breakdown(&r);
        assert_eq!(breakdown.len(), 3);
        let payroll = breakdown.iter().find(|(l, _)| *l == "Payroll").unwrap();
        assert!((payroll.1 - 50.0).abs() < 1e-9);
        let total: f64 = breakdown.iter().map(|(_, v)| v).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_cost_breakdown_empty_when_no_costs() {
        let r = report("2024-03", 100.0, 0.7, 10.0);
        assert!(cost_breakdown(&r).is_empty());
    }
}
