use std::cmp::Ordering;

use contracts::domain::recipe::Recipe;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::establishment::context::use_establishment;
use crate::domain::recipe::api;
use crate::shared::list_utils::{filter_list, sort_indicator, sort_list, Searchable, Sortable};
use crate::shared::number_format::{format_money, format_percent};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[derive(Clone, Debug)]
struct RecipeRow {
    name: String,
    selling_price: Option<f64>,
    material_cost: Option<f64>,
    cost_ratio: Option<f64>,
    is_active: bool,
}

impl From<Recipe> for RecipeRow {
    fn from(r: Recipe) -> Self {
        let cost_ratio = r.cost_ratio();
        Self {
            name: r.name,
            selling_price: r.selling_price,
            material_cost: r.material_cost,
            cost_ratio,
            is_active: r.is_active,
        }
    }
}

impl Sortable for RecipeRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            "price" => self
                .selling_price
                .partial_cmp(&other.selling_price)
                .unwrap_or(Ordering::Equal),
            "cost" => self
                .material_cost
                .partial_cmp(&other.material_cost)
                .unwrap_or(Ordering::Equal),
            "ratio" => self
                .cost_ratio
                .partial_cmp(&other.cost_ratio)
                .unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for RecipeRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

/// Recipe costing list for the active establishment.
#[component]
pub fn RecipeList() -> impl IntoView {
    let establishment = use_establishment();

    let (items, set_items) = signal(Vec::<RecipeRow>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (search, set_search) = signal(String::new());
    let (sort_field, set_sort_field) = signal("name".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let fetch = move || {
        let Some(id) = establishment.active_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_recipes(&id).await {
                Ok(recipes) => {
                    if establishment.active_id.get_untracked().as_deref() != Some(id.as_str()) {
                        return;
                    }
                    set_items.set(recipes.into_iter().map(Into::into).collect());
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

    let header_cell = move |field: &'static str, label: &'static str| {
        view! {
            <th on:click=toggle_sort(field)>
                {label}
                {move || sort_indicator(&sort_field.get(), field, sort_ascending.get())}
            </th>
        }
    };

    view! {
        <PageFrame page_id="recipe--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>"Recipes"</h2>
                <div class="header__actions">
                    <input
                        type="text"
                        placeholder="Search recipes..."
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
                            {header_cell("name", "Recipe")}
                            {header_cell("price", "Selling price")}
                            {header_cell("cost", "Material cost")}
                            {header_cell("ratio", "Cost ratio")}
                            <th>"Active"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || visible_items().into_iter().map(|row| {
                            view! {
                                <tr>
                                    <td>{row.name.clone()}</td>
                                    <td>{row.selling_price.map(format_money).unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{row.material_cost.map(format_money).unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{row.cost_ratio.map(|r| format_percent(r * 100.0)).unwrap_or_else(|| "-".to_string())}</td>
                                    <td>{if row.is_active { "Yes" } else { "No" }}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </PageFrame>
    }
}
