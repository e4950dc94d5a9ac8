use contracts::domain::support::SupportTicket;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::support::api;
use crate::shared::modal::Modal;
use crate::shared::validation::use_validation;
use crate::system::session::context::use_session;

/// Support dialog opened from the sidebar. Prefills the reply address
/// from the session.
#[component]
pub fn SupportDialog(on_close: Callback<()>) -> impl IntoView {
    let (session, _) = use_session();
    let validation = use_validation();

    let initial_email = session
        .get_untracked()
        .user
        .and_then(|u| u.email)
        .unwrap_or_default();

    let (subject, set_subject) = signal(String::new());
    let (body, set_body) = signal(String::new());
    let (email, set_email) = signal(initial_email);
    let (error, set_error) = signal(Option::<String>::None);
    let (sending, set_sending) = signal(false);
    let (sent, set_sent) = signal(false);

    let submit = move |_| {
        let email_val = email.get();
        if !validation.is_valid("email", &email_val) {
            set_error.set(Some("Invalid reply address".to_string()));
            return;
        }
        if subject.get().trim().is_empty() || body.get().trim().is_empty() {
            set_error.set(Some("Subject and message are required".to_string()));
            return;
        }

        let ticket = SupportTicket {
            subject: subject.get().trim().to_string(),
            body: body.get().trim().to_string(),
            email: email_val,
        };

        set_sending.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::create_ticket(&ticket).await {
                Ok(()) => set_sent.set(true),
                Err(e) => set_error.set(Some(e)),
            }
            set_sending.set(false);
        });
    };

    view! {
        <Modal title="Contact support".to_string() on_close=on_close>
            <Show
                when=move || !sent.get()
                fallback=move || view! {
                    <div class="info-message">"Ticket sent. We'll get back to you by email."</div>
                }
            >
                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="details-form">
                    <div class="form-group">
                        <label for="ticket-subject">"Subject"</label>
                        <input
                            type="text"
                            id="ticket-subject"
                            prop:value=move || subject.get()
                            on:input=move |ev| set_subject.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="ticket-body">"Message"</label>
                        <textarea
                            id="ticket-body"
                            prop:value=move || body.get()
                            on:input=move |ev| set_body.set(event_target_value(&ev))
                            rows="6"
                        />
                    </div>
                    <div class="form-group">
                        <label for="ticket-email">"Reply to"</label>
                        <input
                            type="email"
                            id="ticket-email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="details-actions">
                    <button class="btn btn-primary" on:click=submit disabled=move || sending.get()>
                        {move || if sending.get() { "Sending..." } else { "Send" }}
                    </button>
                </div>
            </Show>
        </Modal>
    }
}
