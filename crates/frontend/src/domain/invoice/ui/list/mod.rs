use std::cmp::Ordering;

use contracts::domain::invoice::Invoice;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::establishment::context::use_establishment;
use crate::domain::invoice::api;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, sort_indicator, sort_list, Searchable, Sortable};
use crate::shared::number_format::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[derive(Clone, Debug)]
struct InvoiceRow {
    id: String,
    supplier_name: String,
    invoice_date: String,
    total_amount: Option<f64>,
    status: &'static str,
}

impl From<Invoice> for InvoiceRow {
    fn from(i: Invoice) -> Self {
        Self {
            id: i.id.to_string(),
            supplier_name: i.supplier_name.unwrap_or_else(|| "-".to_string()),
            invoice_date: i
                .invoice_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            total_amount: i.total_amount,
            status: i.status.display_name(),
        }
    }
}

impl Sortable for InvoiceRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "supplier" => self
                .supplier_name
                .to_lowercase()
                .cmp(&other.supplier_name.to_lowercase()),
            "date" => self.invoice_date.cmp(&other.invoice_date),
            "total" => self
                .total_amount
                .partial_cmp(&other.total_amount)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for InvoiceRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.supplier_name
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }
}

/// Invoice list for the active establishment.
#[component]
pub fn InvoiceList() -> impl IntoView {
    let establishment = use_establishment();

    let (items, set_items) = signal(Vec::<InvoiceRow>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());
    let (sort_field, set_sort_field) = signal("date".to_string());
    let (sort_ascending, set_sort_ascending) = signal(false);

    let fetch = move || {
        let Some(id) = establishment.active_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_invoices(&id).await {
                Ok(invoices) => {
                    if establishment.active_id.get_untracked().as_deref() != Some(id.as_str()) {
                        return;
                    }
                    set_items.set(invoices.into_iter().map(Into::into).collect());
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

    let visible_items = move || {
        let mut rows = filter_list(items.get(), &search.get());
        sort_list(&mut rows, &sort_field.get(), sort_ascending.get());
        rows
    };

    let delete_row = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message("Delete this invoice?").unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_invoice(&id).await {
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
        <PageFrame page_id="invoice--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Invoices"</h2>
                <div class="header__actions">
                    <input
                        type="text"
                        placeholder="Search by supplier..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <table class="data-table">
                    <thead>
                        <tr>
                            {header_cell("supplier", "Supplier")}
                            {header_cell("date", "Date")}
                            {header_cell("total", "Total")}
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_items().into_iter().map(|row| {
                            let delete_id = row.id.clone();
                            view! {
                                <tr>
                                    <td>{row.supplier_name.clone()}</td>
                                    <td>{format_date(&row.invoice_date)}</td>
                                    <td>{row.total_amount.map(format_money).unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{row.status}</td>
                                    <td>
                                        <button
                                            class="button button--icon"
                                            on:click=move |_| delete_row(delete_id.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
