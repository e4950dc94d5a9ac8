use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use super::charts::{BarChart, ShareBars};
use crate::dashboards::performance::api::{self, PerformanceData};
use crate::dashboards::performance::compute::{
    average_recipe_cost_pct, cost_breakdown, global_ranking, monthly_series, normalize_percent,
    period_deltas,
};
use crate::domain::establishment::context::use_establishment;
use crate::shared::date_utils::period_label;
use crate::shared::number_format::{
    format_money, format_number_int, format_percent, format_signed,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

/// Performance dashboard for the active establishment: live-score
/// tiles, cross-tenant ranking, headline figures with
/// period-over-period deltas, revenue chart, cost breakdown and the
/// monthly table.
#[component]
pub fn PerformanceDashboard() -> impl IntoView {
    let establishment = use_establishment();

    let (data, set_data) = signal(Option::<PerformanceData>::None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let Some(id) = establishment.active_id.get() else {
            set_data.set(None);
            return;
        };

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = api::load_performance_data(&id).await;

            // Drop responses that arrive after a tenant switch
            if establishment.active_id.get_untracked().as_deref() != Some(id.as_str()) {
                return;
            }

            match result {
                Ok(loaded) => set_data.set(Some(loaded)),
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    });

    let score_tile = move |label: &'static str, value: Option<f64>| {
        let pct = normalize_percent(value);
        view! {
            <div class="score-tile">
                <div class="score-tile__label">{label}</div>
                <div class="score-tile__value">{format_percent(pct)}</div>
            </div>
        }
    };

    view! {
        <PageFrame page_id="performance--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2>"Performance"</h2>
            </div>
            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
                <Show when=move || loading.get()>
                    <div class="loading">"Crunching the numbers..."</div>
                </Show>

                {move || data.get().map(|d| {
                    let series = monthly_series(&d.reports);
                    let deltas = period_deltas(&series);
                    let latest = d.reports.iter().max_by(|a, b| a.period.cmp(&b.period)).cloned();

                    let ranking = establishment
                        .active_id
                        .get_untracked()
                        .and_then(|id| Uuid::parse_str(&id).ok())
                        .and_then(|id| global_ranking(&d.all_scores, id));
                    let tenant_count = d.all_scores.len();

                    let revenue_points: Vec<(String, f64)> = series
                        .iter()
                        .map(|p| (period_label(&p.period), p.revenue))
                        .collect();

                    let breakdown = latest.as_ref().map(|r| cost_breakdown(r)).unwrap_or_default();
                    let recipe_cost = average_recipe_cost_pct(&d.recipes);
                    let score = d.live_score.clone().unwrap_or_default();
                    let series_for_table = series.clone();

                    view! {
                        <div class="dashboard">
                            <div class="dashboard__tiles">
                                {score_tile("Global score", score.global_score)}
                                {score_tile("Purchases", score.purchase_score)}
                                {score_tile("Recipes", score.recipe_score)}
                                {score_tile("Finance", score.financial_score)}
                                <div class="score-tile score-tile--ranking">
                                    <div class="score-tile__label">"Ranking"</div>
                                    <div class="score-tile__value">
                                        {ranking
                                            .map(|pos| format!("#{} of {}", pos, tenant_count))
                                            .unwrap_or_else(|| "-".to_string())}
                                    </div>
                                </div>
                            </div>

                            {latest.as_ref().map(|report| {
                                let revenue = report.revenue_total.unwrap_or(0.0);
                                let margin_pct = normalize_percent(report.gross_margin_ratio);
                                let ebitda = report.ebitda.unwrap_or(0.0);
                                let covers = report.covers.unwrap_or(0.0);
                                let deltas = deltas.clone();
                                view! {
                                    <div class="dashboard__figures">
                                        <div class="figure">
                                            <div class="figure__label">"Revenue"</div>
                                            <div class="figure__value">{format_money(revenue)}</div>
                                            {deltas.as_ref().map(|d| view! {
                                                <div class="figure__delta">{format_signed(d.revenue)}{" vs last month"}</div>
                                            })}
                                        </div>
                                        <div class="figure">
                                            <div class="figure__label">"Gross margin"</div>
                                            <div class="figure__value">{format_percent(margin_pct)}</div>
                                            {deltas.as_ref().map(|d| view! {
                                                <div class="figure__delta">{format_signed(d.gross_margin_pts)}{" pts"}</div>
                                            })}
                                        </div>
                                        <div class="figure">
                                            <div class="figure__label">"EBITDA"</div>
                                            <div class="figure__value">{format_money(ebitda)}</div>
                                            {deltas.as_ref().map(|d| view! {
                                                <div class="figure__delta">{format_signed(d.ebitda)}</div>
                                            })}
                                        </div>
                                        <div class="figure">
                                            <div class="figure__label">"Covers"</div>
                                            <div class="figure__value">{format_number_int(covers)}</div>
                                        </div>
                                        <div class="figure">
                                            <div class="figure__label">"Avg recipe cost"</div>
                                            <div class="figure__value">
                                                {recipe_cost
                                                    .map(format_percent)
                                                    .unwrap_or_else(|| "-".to_string())}
                                            </div>
                                        </div>
                                        <div class="figure">
                                            <div class="figure__label">"Priced ingredients"</div>
                                            <div class="figure__value">
                                                {format_number_int(
                                                    d.ingredients.iter().filter(|i| i.unit_price.is_some()).count() as f64
                                                )}
                                            </div>
                                        </div>
                                    </div>
                                }
                            })}

                            <h3>"Monthly revenue"</h3>
                            <BarChart points=revenue_points />

                            <Show when={
                                let has_breakdown = !breakdown.is_empty();
                                move || has_breakdown
                            }>
                                <h3>"Cost structure"</h3>
                            </Show>
                            <ShareBars parts=breakdown.clone() />

                            <h3>"Month by month"</h3>
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Month"</th>
                                        <th>"Revenue"</th>
                                        <th>"Material"</th>
                                        <th>"Payroll"</th>
                                        <th>"Gross margin"</th>
                                        <th>"EBITDA"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {series_for_table.into_iter().rev().map(|p| {
                                        view! {
                                            <tr>
                                                <td>{period_label(&p.period)}</td>
                                                <td>{format_money(p.revenue)}</td>
                                                <td>{format_percent(p.material_pct)}</td>
                                                <td>{format_percent(p.payroll_pct)}</td>
                                                <td>{format_percent(p.gross_margin_pct)}</td>
                                                <td>{format_money(p.ebitda)}</td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                })}
            </div>
        </PageFrame>
    }
}
