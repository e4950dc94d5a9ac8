pub mod state;

use std::cmp::Ordering;

use contracts::domain::mercuriale::{
    Mercuriale, MercurialeArticle, MercurialeMasterArticle, MercurialeSupplier,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use self::state::create_state;
use crate::domain::establishment::context::use_establishment;
use crate::domain::mercuriale::api;
use crate::domain::mercuriale::join::{
    access_level_for_plan, join_supplier_articles, visible_suppliers,
};
use crate::shared::list_utils::{filter_list, sort_indicator, sort_list, Searchable, Sortable};
use crate::shared::number_format::{format_money, format_percent};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[derive(Clone, Debug)]
struct ArticleRow {
    name: String,
    category: String,
    unit: String,
    price: Option<f64>,
    delta_ratio: Option<f64>,
}

impl Sortable for ArticleRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "category" => self
                .category
                .to_lowercase()
                .cmp(&other.category.to_lowercase()),
            "price" => self
                .price
                .partial_cmp(&other.price)
                .unwrap_or(Ordering::Equal),
            "delta" => self
                .delta_ratio
                .partial_cmp(&other.delta_ratio)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for ArticleRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
    }
}

/// Mercuriale browser: pick a supplier allowed by the plan tier, see
/// its joined article rows with price movements.
#[component]
pub fn MercurialeList() -> impl IntoView {
    let establishment = use_establishment();
    let list_state = create_state();

    let (suppliers, set_suppliers) = signal(Vec::<MercurialeSupplier>::new());
    let (mercuriales, set_mercuriales) = signal(Vec::<Mercuriale>::new());
    let (masters, set_masters) = signal(Vec::<MercurialeMasterArticle>::new());
    let (articles, set_articles) = signal(Vec::<MercurialeArticle>::new());
    let (active_supplier, set_active_supplier) = signal(Option::<Uuid>::None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    // Fan-out the four collection fetches and await them together.
    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            let (suppliers_res, mercuriales_res, masters_res, articles_res) = futures::join!(
                api::fetch_suppliers(),
                api::fetch_mercuriales(),
                api::fetch_master_articles(),
                api::fetch_articles()
            );

            let results = (suppliers_res, mercuriales_res, masters_res, articles_res);
            match results {
                (Ok(s), Ok(m), Ok(ma), Ok(a)) => {
                    set_suppliers.set(s);
                    set_mercuriales.set(m);
                    set_masters.set(ma);
                    set_articles.set(a);
                    set_error.set(None);
                }
                (s, m, ma, a) => {
                    let msg = [
                        s.err(),
                        m.err(),
                        ma.err(),
                        a.err(),
                    ]
                    .into_iter()
                    .flatten()
                    .next()
                    .unwrap_or_else(|| "Unknown error".to_string());
                    set_error.set(Some(msg));
                }
            }
            set_loading.set(false);
        });
    };

    fetch();

    // Suppliers visible at the active plan's tier
    let tier_suppliers = move || {
        let plan_code = establishment
            .details
            .get()
            .and_then(|e| e.plan_code)
            .unwrap_or_else(|| "free".to_string());
        visible_suppliers(&suppliers.get(), access_level_for_plan(&plan_code))
    };

    // Default the selection to the first visible supplier
    Effect::new(move |_| {
        let visible = tier_suppliers();
        if active_supplier.get().is_none() {
            if let Some(first) = visible.first() {
                set_active_supplier.set(Some(first.id));
            }
        }
    });

    let rows = move || {
        let Some(supplier_id) = active_supplier.get() else {
            return Vec::new();
        };
        let joined = join_supplier_articles(
            &mercuriales.get(),
            &masters.get(),
            &articles.get(),
            supplier_id,
        );
        let mut items: Vec<ArticleRow> = joined
            .into_iter()
            .map(|j| ArticleRow {
                name: j.master.name,
                category: j.master.category.unwrap_or_else(|| "-".to_string()),
                unit: j.master.unit.unwrap_or_else(|| "-".to_string()),
                price: j.article.price,
                delta_ratio: j.article.price_delta_ratio(),
            })
            .collect();

        let s = list_state.get();
        items = filter_list(items, &s.search);
        sort_list(&mut items, &s.sort_field, s.sort_ascending);
        items
    };

    let toggle_sort = move |field: &'static str| {
        move |_| {
            list_state.update(|s| {
                if s.sort_field == field {
                    s.sort_ascending = !s.sort_ascending;
                } else {
                    s.sort_field = field.to_string();
                    s.sort_ascending = true;
                }
            });
        }
    };

    let header_cell = move |field: &'static str, label: &'static str| {
        view! {
            <th on:click=toggle_sort(field)>
                {label}
                {move || {
                    let s = list_state.get();
                    sort_indicator(&s.sort_field, field, s.sort_ascending)
                }}
            </th>
        }
    };

    view! {
        <PageFrame page_id="mercuriale--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Mercuriales"</h2>
                <div class="header__actions">
                    <select on:change=move |ev| {
                        let value = event_target_value(&ev);
                        set_active_supplier.set(Uuid::parse_str(&value).ok());
                    }>
                        {move || tier_suppliers().into_iter().map(|s| {
                            let selected = active_supplier.get() == Some(s.id);
                            view! {
                                <option value=s.id.to_string() selected=selected>
                                    {s.name.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    <input
                        type="text"
                        placeholder="Search articles..."
                        prop:value=move || list_state.get().search
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            list_state.update(|s| s.search = value);
                        }
                    />
                </div>
            </div>
            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
                <Show when=move || loading.get()>
                    <div class="loading">"Loading price lists..."</div>
                </Show>

                <table class="data-table">
                    <thead>
                        <tr>
                            {header_cell("name", "Article")}
                            {header_cell("category", "Category")}
                            <th>"Unit"</th>
                            {header_cell("price", "Price")}
                            {header_cell("delta", "Change")}
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|row| {
                            let delta = row.delta_ratio;
                            view! {
                                <tr>
                                    <td>{row.name.clone()}</td>
                                    <td>{row.category.clone()}</td>
                                    <td>{row.unit.clone()}</td>
                                    <td>{row.price.map(format_money).unwrap_or_else(|| "-".to_string())}</td>
                                    <td class:delta--up=move || delta.map(|d| d > 0.0).unwrap_or(false)
                                        class:delta--down=move || delta.map(|d| d < 0.0).unwrap_or(false)>
                                        {delta.map(|d| format_percent(d * 100.0)).unwrap_or_else(|| "-".to_string())}
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
