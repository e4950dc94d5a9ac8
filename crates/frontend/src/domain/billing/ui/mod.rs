use contracts::domain::billing::{BillingAccount, StripeProduct};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::billing::api;
use crate::domain::establishment::context::use_establishment;
use crate::shared::number_format::{format_money, format_number_int};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

/// Billing page: current plan, usage counters, upgrade catalog.
#[component]
pub fn BillingPage() -> impl IntoView {
    let establishment = use_establishment();

    let (account, set_account) = signal(Option::<BillingAccount>::None);
    let (products, set_products) = signal(Vec::<StripeProduct>::new());
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        let Some(id) = establishment.active_id.get() else {
            set_account.set(None);
            return;
        };
        spawn_local(async move {
            let (account_res, products_res) =
                futures::join!(api::fetch_billing_account(&id), api::fetch_stripe_products());

            if establishment.active_id.get_untracked().as_deref() != Some(id.as_str()) {
                return;
            }

            match account_res {
                Ok(a) => set_account.set(Some(a)),
                Err(e) => set_error.set(Some(e)),
            }
            match products_res {
                Ok(p) => set_products.set(p),
                Err(e) => log::warn!("Failed to load plan catalog: {}", e),
            }
        });
    });

    view! {
        <PageFrame page_id="billing--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h2>"Billing & usage"</h2>
            </div>
            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="billing-summary">
                    {move || {
                        let plan_name = establishment
                            .plan
                            .get()
                            .map(|p| p.name)
                            .unwrap_or_else(|| "-".to_string());
                        let free_mode = account.get().map(|a| a.free_mode).unwrap_or(true);
                        view! {
                            <div class="billing-summary__plan">
                                <span class="billing-summary__label">"Current plan"</span>
                                <strong>{plan_name}</strong>
                                <Show when=move || free_mode>
                                    <span class="badge badge--free">"Free mode"</span>
                                </Show>
                            </div>
                        }
                    }}
                </div>

                <h3>"Usage this period"</h3>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Category"</th>
                            <th>"Used"</th>
                            <th>"Limit"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || establishment.usage.get().into_iter().map(|counter| {
                            let exhausted = counter.is_exhausted();
                            let fill = counter.usage_ratio() * 100.0;
                            view! {
                                <tr class:usage--exhausted=move || exhausted>
                                    <td>{counter.category.code()}</td>
                                    <td>{format_number_int(counter.used as f64)}</td>
                                    <td>{format_number_int(counter.limit as f64)}</td>
                                    <td>
                                        <div class="usage-track">
                                            <div
                                                class="usage-track__fill"
                                                style:width=format!("{:.0}%", fill)
                                            ></div>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>

                <h3>"Plans"</h3>
                <div class="plan-catalog">
                    {move || products.get().into_iter().map(|product| {
                        view! {
                            <div class="plan-card">
                                <div class="plan-card__name">{product.label.clone()}</div>
                                <div class="plan-card__price">
                                    {format_money(product.monthly_price)}
                                    <span class="plan-card__cycle">"/month"</span>
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
