use leptos::prelude::*;

use super::view_model::FinancialReportDetailsVm;
use crate::shared::date_utils::period_label;
use crate::shared::icons::icon;

/// Edit dialog body for one monthly report. The caller wraps it in a
/// modal and closes it through `on_saved` / `on_cancel`.
#[component]
pub fn FinancialReportDetails(
    id: String,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = FinancialReportDetailsVm::new();
    vm.load(id.clone());

    let id_for_save = StoredValue::new(id);

    let field = move |label: &'static str,
                      get: fn(&super::view_model::ReportForm) -> String,
                      set: fn(&mut super::view_model::ReportForm, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type="text"
                    prop:value=move || get(&vm.form.get())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.form.update(|f| set(f, value));
                    }
                />
            </div>
        }
    };

    view! {
        <div class="details-container report-details">
            <div class="details-header">
                <h3>{move || format!("Edit report — {}", period_label(&vm.form.get().period))}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                {field("Total revenue", |f| f.revenue_total.clone(), |f, v| f.revenue_total = v)}
                {field("Food revenue", |f| f.revenue_food.clone(), |f, v| f.revenue_food = v)}
                {field("Drink revenue", |f| f.revenue_drink.clone(), |f, v| f.revenue_drink = v)}
                {field("Total purchases", |f| f.purchases_total.clone(), |f, v| f.purchases_total = v)}
                {field("Payroll", |f| f.payroll_total.clone(), |f, v| f.payroll_total = v)}
                {field("Covers", |f| f.covers.clone(), |f, v| f.covers = v)}
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| vm.save_command(id_for_save.get_value(), on_saved)
                    disabled=move || vm.saving.get()
                >
                    {icon("edit")}
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
