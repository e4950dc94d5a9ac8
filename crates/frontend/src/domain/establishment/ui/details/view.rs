use leptos::prelude::*;

use super::view_model::EstablishmentSettingsVm;
use crate::domain::establishment::context::use_establishment;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// Settings form for the active establishment (name, address, logo).
#[component]
pub fn EstablishmentSettings() -> impl IntoView {
    let ctx = use_establishment();
    let vm = EstablishmentSettingsVm::new();

    // Reseed the form whenever the active tenant's details change
    Effect::new(move |_| {
        let _ = ctx.details.get();
        vm.load_from(ctx);
    });

    let on_logo_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|list| list.get(0)) {
            vm.upload_logo_command(ctx, file);
        }
    };

    view! {
        <PageFrame page_id="establishment--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <h2>"Establishment settings"</h2>
            </div>
            <div class="page__content">
                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
                <Show when=move || vm.saved.get()>
                    <div class="info-message">"Settings saved."</div>
                </Show>

                <div class="details-form">
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || vm.form.get().name
                            on:input=move |ev| {
                                vm.form.update(|f| f.name = event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="address">"Address"</label>
                        <textarea
                            id="address"
                            prop:value=move || vm.form.get().address
                            on:input=move |ev| {
                                vm.form.update(|f| f.address = event_target_value(&ev));
                            }
                            rows="3"
                        />
                    </div>

                    <div class="form-group">
                        <label for="logo">"Logo"</label>
                        <input type="file" id="logo" accept="image/*" on:change=on_logo_change />
                        {move || vm.form.get().logo_path.map(|path| view! {
                            <div class="form-hint">{"Stored at: "}{path}</div>
                        })}
                    </div>
                </div>

                <div class="details-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| vm.save_command(ctx)
                        disabled=move || vm.saving.get()
                    >
                        {icon("edit")}
                        {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}
