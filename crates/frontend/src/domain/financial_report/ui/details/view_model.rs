use contracts::domain::common::parse_locale_number;
use contracts::domain::financial_report::FinancialReportPatch;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::financial_report::api;

/// Editable totals as the user types them (locale-formatted strings,
/// converted on save).
#[derive(Clone, Debug, Default)]
pub struct ReportForm {
    pub period: String,
    pub revenue_total: String,
    pub revenue_food: String,
    pub revenue_drink: String,
    pub purchases_total: String,
    pub payroll_total: String,
    pub covers: String,
}

/// ViewModel for the report edit dialog
#[derive(Clone, Copy)]
pub struct FinancialReportDetailsVm {
    pub form: RwSignal<ReportForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl FinancialReportDetailsVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ReportForm::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Load the report being edited.
    pub fn load(&self, id: String) {
        let form = self.form;
        let error = self.error;
        spawn_local(async move {
            match api::fetch_report(&id).await {
                Ok(report) => {
                    let fmt = |v: Option<f64>| v.map(|x| x.to_string()).unwrap_or_default();
                    form.set(ReportForm {
                        period: report.period,
                        revenue_total: fmt(report.revenue_total),
                        revenue_food: fmt(report.revenue_food),
                        revenue_drink: fmt(report.revenue_drink),
                        purchases_total: fmt(report.purchases_total),
                        payroll_total: fmt(report.payroll_total),
                        covers: fmt(report.covers),
                    });
                }
                Err(e) => error.set(Some(format!("Failed to load report: {}", e))),
            }
        });
    }

    /// Patch the report with the parsed form values. Empty fields stay
    /// untouched server-side.
    pub fn save_command(&self, id: String, on_saved: Callback<()>) {
        let current = self.form.get();

        let parse = |raw: &str| -> Option<f64> {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(parse_locale_number(trimmed))
            }
        };

        let patch = FinancialReportPatch {
            revenue_total: parse(&current.revenue_total),
            revenue_food: parse(&current.revenue_food),
            revenue_drink: parse(&current.revenue_drink),
            purchases_total: parse(&current.purchases_total),
            payroll_total: parse(&current.payroll_total),
            covers: parse(&current.covers),
        };

        let error = self.error;
        let saving = self.saving;
        saving.set(true);

        spawn_local(async move {
            match api::update_report(&id, &patch).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    }
}
