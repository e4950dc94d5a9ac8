//! Tab content registry — the single source of truth mapping
//! tab.key → View. All tab keys live here in one place.

use leptos::prelude::*;

use crate::dashboards::performance::ui::PerformanceDashboard;
use crate::domain::billing::ui::BillingPage;
use crate::domain::establishment::ui::EstablishmentSettings;
use crate::domain::financial_report::ui::FinancialReportList;
use crate::domain::invoice::ui::InvoiceList;
use crate::domain::membership::ui::TeamList;
use crate::domain::mercuriale::ui::MercurialeList;
use crate::domain::recipe::ui::RecipeList;

/// Render the content of a tab by its key. Unknown keys get a
/// placeholder instead of a panic so a stale URL cannot take the app
/// down.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "performance" => view! { <PerformanceDashboard /> }.into_any(),
        "financial_reports" => view! { <FinancialReportList /> }.into_any(),
        "invoices" => view! { <InvoiceList /> }.into_any(),
        "recipes" => view! { <RecipeList /> }.into_any(),
        "mercuriales" => view! { <MercurialeList /> }.into_any(),
        "team" => view! { <TeamList /> }.into_any(),
        "billing" => view! { <BillingPage /> }.into_any(),
        "settings" => view! { <EstablishmentSettings /> }.into_any(),
        unknown => {
            log::warn!("No content registered for tab key '{}'", unknown);
            view! { <div class="page page--empty">"Unknown page"</div> }.into_any()
        }
    }
}
