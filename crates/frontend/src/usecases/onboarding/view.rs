use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api::{self, ProvisionError};
use super::provision::{validate_form, OnboardingForm, ProvisionStep};
use crate::domain::establishment::context::use_establishment;
use crate::domain::membership::context::use_memberships;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::system::session::context::use_session;

/// Linear wizard pages. No branching: Details -> Branding -> Running.
#[derive(Clone, Copy, PartialEq)]
enum WizardStep {
    Details,
    Branding,
    Running,
}

/// Multi-step modal that provisions a new establishment.
#[component]
pub fn OnboardingWizard(on_close: Callback<()>) -> impl IntoView {
    let (session, _) = use_session();
    let establishment = use_establishment();
    let memberships = use_memberships();

    let (step, set_step) = signal(WizardStep::Details);
    let form = RwSignal::new(OnboardingForm::default());
    let logo_file = StoredValue::new_local(None::<web_sys::File>);
    let (logo_name, set_logo_name) = signal(Option::<String>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (running_step, set_running_step) = signal(Option::<ProvisionStep>::None);
    let (failure, set_failure) = signal(Option::<ProvisionError>::None);
    let (done, set_done) = signal(false);

    let next_from_details = move |_| {
        if let Err(msg) = validate_form(&form.get()) {
            set_error.set(Some(msg.to_string()));
            return;
        }
        set_error.set(None);
        set_step.set(WizardStep::Branding);
    };

    let on_logo_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|list| list.get(0));
        set_logo_name.set(file.as_ref().map(|f| f.name()));
        logo_file.set_value(file);
    };

    let submit = move |_| {
        let Some(user) = session.get_untracked().user else {
            set_error.set(Some("No active session".to_string()));
            return;
        };
        let form_value = form.get_untracked();
        let logo = logo_file.get_value();

        set_step.set(WizardStep::Running);
        set_error.set(None);
        set_failure.set(None);

        spawn_local(async move {
            let result = api::provision(form_value, logo, user.id, move |current| {
                set_running_step.set(Some(current));
            })
            .await;

            match result {
                Ok(new_id) => {
                    set_done.set(true);
                    // Activate the fresh tenant and pick up the new
                    // ownership link
                    establishment.select(&new_id.to_string());
                    memberships.refresh();
                }
                Err(e) => {
                    crate::domain::support::api::ship_error_log(
                        format!("Onboarding halted at {}: {}", e.step.label(), e.message),
                        Some("onboarding".to_string()),
                    )
                    .await;
                    set_failure.set(Some(e));
                }
            }
        });
    };

    let step_index = |step: ProvisionStep| {
        ProvisionStep::all()
            .iter()
            .position(|s| *s == step)
            .unwrap_or(0)
    };

    let checklist = move || {
        let current = running_step.get();
        let failed = failure.get();
        let finished = done.get();
        let current_index = current.map(step_index).unwrap_or(0);

        ProvisionStep::all()
            .into_iter()
            .map(|s| {
                let index = step_index(s);
                let is_failed = failed.as_ref().map(|f| f.step == s).unwrap_or(false);
                let is_done = finished || (!is_failed && index < current_index);
                let is_running =
                    !finished && !is_failed && current == Some(s) && failed.is_none();
                view! {
                    <li
                        class="provision-step"
                        class:provision-step--done=move || is_done
                        class:provision-step--running=move || is_running
                        class:provision-step--failed=move || is_failed
                    >
                        {s.label()}
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <Modal title="New establishment".to_string() on_close=on_close>
            <Show when=move || step.get() == WizardStep::Details>
                <div class="wizard-step">
                    <p class="wizard-step__hint">"Step 1 of 2 — identity"</p>
                    {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
                    <div class="form-group">
                        <label for="onboarding-name">"Establishment name"</label>
                        <input
                            type="text"
                            id="onboarding-name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            placeholder="Chez Nino"
                        />
                    </div>
                    <div class="form-group">
                        <label for="onboarding-address">"Address"</label>
                        <textarea
                            id="onboarding-address"
                            prop:value=move || form.get().address
                            on:input=move |ev| form.update(|f| f.address = event_target_value(&ev))
                            rows="2"
                        />
                    </div>
                    <div class="details-actions">
                        <button class="btn btn-primary" on:click=next_from_details>
                            {"Continue"}
                            {icon("chevron-right")}
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || step.get() == WizardStep::Branding>
                <div class="wizard-step">
                    <p class="wizard-step__hint">"Step 2 of 2 — branding"</p>
                    <div class="form-group">
                        <label for="onboarding-logo">"Logo (optional)"</label>
                        <input type="file" id="onboarding-logo" accept="image/*" on:change=on_logo_change />
                        {move || logo_name.get().map(|name| view! {
                            <div class="form-hint">{name}</div>
                        })}
                    </div>
                    <p class="wizard-step__hint">
                        "Your establishment starts on the free plan. You can upgrade later from the billing page."
                    </p>
                    <div class="details-actions">
                        <button class="btn btn-secondary" on:click=move |_| set_step.set(WizardStep::Details)>
                            {"Back"}
                        </button>
                        <button class="btn btn-primary" on:click=submit>
                            {icon("plus")}
                            {"Create establishment"}
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || step.get() == WizardStep::Running>
                <div class="wizard-step">
                    <ul class="provision-checklist">
                        {checklist}
                    </ul>

                    {move || failure.get().map(|f| view! {
                        <div class="error">
                            {format!("Failed at \"{}\": {}", f.step.label(), f.message)}
                        </div>
                    })}

                    <Show when=move || done.get()>
                        <div class="info-message">"All set. Welcome aboard!"</div>
                        <div class="details-actions">
                            <button class="btn btn-primary" on:click=move |_| on_close.run(())>
                                {"Open my establishment"}
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </Modal>
    }
}
