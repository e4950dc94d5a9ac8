use std::cmp::Ordering;

use contracts::domain::financial_report::FinancialReport;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::performance::compute::normalize_percent;
use crate::domain::establishment::context::use_establishment;
use crate::domain::financial_report::api;
use crate::domain::financial_report::ui::details::FinancialReportDetails;
use crate::shared::date_utils::period_label;
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_indicator, sort_list, Sortable};
use crate::shared::modal::Modal;
use crate::shared::number_format::{format_money, format_percent};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[derive(Clone, Debug)]
struct ReportRow {
    id: String,
    period: String,
    revenue_total: Option<f64>,
    gross_margin_pct: f64,
    ebitda: Option<f64>,
}

impl From<FinancialReport> for ReportRow {
    fn from(r: FinancialReport) -> Self {
        Self {
            id: r.id.to_string(),
            period: r.period.clone(),
            revenue_total: r.revenue_total,
            gross_margin_pct: normalize_percent(r.gross_margin_ratio),
            ebitda: r.ebitda,
        }
    }
}

impl Sortable for ReportRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "period" => self.period.cmp(&other.period),
            "revenue" => self
                .revenue_total
                .partial_cmp(&other.revenue_total)
                .unwrap_or(Ordering::Equal),
            "ebitda" => self
                .ebitda
                .partial_cmp(&other.ebitda)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

/// Monthly report list with edit/delete. Lists are refetched wholesale
/// after every mutation.
#[component]
pub fn FinancialReportList() -> impl IntoView {
    let establishment = use_establishment();

    let (items, set_items) = signal(Vec::<ReportRow>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (sort_field, set_sort_field) = signal("period".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);
    let (editing_id, set_editing_id) = signal(Option::<String>::None);

    let fetch = move || {
        let Some(id) = establishment.active_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_reports(&id).await {
                Ok(reports) => {
                    if establishment.active_id.get_untracked().as_deref() != Some(id.as_str()) {
                        return;
                    }
                    set_items.set(reports.into_iter().map(Into::into).collect());
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    Effect::new(move |_| {
        let _ = establishment.active_id.get();
        fetch();
    });

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get_untracked() == field {
                set_sort_ascending.update(|a| *a = !*a);
            } else {
                set_sort_field.set(field.to_string());
                set_sort_ascending.set(true);
            }
        }
    };

    let sorted_items = move || {
        let mut rows = items.get();
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

    let delete_report = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Delete this monthly report?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_report(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let header_cell = move |field: &'static str, label: &'static str| {
        view! {
            <th on:click=toggle_sort(field)>
                {label}
                {move || sort_indicator(&sort_field.get(), field, sort_ascending.get())}
            </th>
        }
    };

    view! {
        <PageFrame page_id="financial_report--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Financial reports"</h2>
            </div>
            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <table class="data-table">
                    <thead>
                        <tr>
                            {header_cell("period", "Month")}
                            {header_cell("revenue", "Revenue")}
                            <th>"Gross margin"</th>
                            {header_cell("ebitda", "EBITDA")}
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || sorted_items().into_iter().map(|row| {
                            let edit_id = row.id.clone();
                            let delete_id = row.id.clone();
                            view! {
                                <tr>
                                    <td>{period_label(&row.period)}</td>
                                    <td>{row.revenue_total.map(format_money).unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{format_percent(row.gross_margin_pct)}</td>
                                    <td>{row.ebitda.map(format_money).unwrap_or_else(|| "-".to_string())}</td>
                                    <td>
                                        <button
                                            class="button button--icon"
                                            on:click=move |_| set_editing_id.set(Some(edit_id.clone()))
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="button button--icon"
                                            on:click=move |_| delete_report(delete_id.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>

                {move || editing_id.get().map(|id| {
                    view! {
                        <Modal
                            title="Monthly report".to_string()
                            on_close=Callback::new(move |_| set_editing_id.set(None))
                        >
                            <FinancialReportDetails
                                id=id.clone()
                                on_saved=Callback::new(move |_| {
                                    set_editing_id.set(None);
                                    fetch();
                                })
                                on_cancel=Callback::new(move |_| set_editing_id.set(None))
                            />
                        </Modal>
                    }
                })}
            </div>
        </PageFrame>
    }
}
