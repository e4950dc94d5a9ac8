use contracts::domain::membership::UserEstablishment;
use contracts::enums::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::establishment::context::use_establishment;
use crate::domain::membership::api;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::validation::use_validation;
use crate::system::session::api as session_api;
use crate::system::session::storage;

#[derive(Clone, Debug)]
struct MemberRow {
    user_id: String,
    display_name: String,
    role: Role,
}

fn member_rows(
    memberships: Vec<UserEstablishment>,
    profiles: &[contracts::domain::user::UserProfile],
) -> Vec<MemberRow> {
    memberships
        .into_iter()
        .map(|m| {
            let display_name = profiles
                .iter()
                .find(|p| p.user_id == m.user_id)
                .map(|p| p.full_name())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| m.user_id.to_string());
            MemberRow {
                user_id: m.user_id.to_string(),
                display_name,
                role: m.role,
            }
        })
        .collect()
}

/// Team page: members of the active establishment plus invite-by-email.
#[component]
pub fn TeamList() -> impl IntoView {
    let establishment = use_establishment();
    let validation = use_validation();

    let (items, set_items) = signal(Vec::<MemberRow>::new());
    let (error, set_error) = signal(Option::<String>::None);
    let (invite_email, set_invite_email) = signal(String::new());
    let (invite_error, set_invite_error) = signal(Option::<String>::None);
    let (inviting, set_inviting) = signal(false);

    let fetch = move || {
        let Some(id) = establishment.active_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let (members, profiles) =
                futures::join!(api::fetch_members_of(&id), api::fetch_member_profiles(&id));

            // The active tenant may have changed mid-flight
            if establishment.active_id.get_untracked().as_deref() != Some(id.as_str()) {
                return;
            }

            match members {
                Ok(rows) => {
                    let profiles = profiles.unwrap_or_else(|e| {
                        log::warn!("Failed to load member profiles: {}", e);
                        Vec::new()
                    });
                    set_items.set(member_rows(rows, &profiles));
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    // Reload on tenant switch
    Effect::new(move |_| {
        let _ = establishment.active_id.get();
        fetch();
    });

    let invite = move |_| {
        let email = invite_email.get();
        if !validation.is_valid("email", &email) {
            set_invite_error.set(Some("Invalid email address".to_string()));
            return;
        }
        let Some(token) = storage::get_access_token() else {
            return;
        };
        set_inviting.set(true);
        set_invite_error.set(None);
        spawn_local(async move {
            match session_api::invite_by_email(&token, email).await {
                Ok(()) => {
                    set_invite_email.set(String::new());
                    fetch();
                }
                Err(e) => set_invite_error.set(Some(e)),
            }
            set_inviting.set(false);
        });
    };

    let remove_member = move |user_id: String| {
        let Some(establishment_id) = establishment.active_id.get_untracked() else {
            return;
        };
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Remove this member from the establishment?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete_membership(&user_id, &establishment_id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <PageFrame page_id="membership--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h2>"Team"</h2>
                <div class="header__actions">
                    <input
                        type="email"
                        placeholder="colleague@example.com"
                        prop:value=move || invite_email.get()
                        on:input=move |ev| set_invite_email.set(event_target_value(&ev))
                        disabled=move || inviting.get()
                    />
                    <button class="button button--primary" on:click=invite disabled=move || inviting.get()>
                        {icon("plus")}
                        {"Invite"}
                    </button>
                </div>
            </div>
            <div class="page__content">
                {move || invite_error.get().map(|e| view! { <div class="error">{e}</div> })}
                {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"User"</th>
                            <th>"Role"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|row| {
                            let user_id = row.user_id.clone();
                            view! {
                                <tr>
                                    <td>{row.display_name.clone()}</td>
                                    <td>{row.role.display_name()}</td>
                                    <td>
                                        <button
                                            class="button button--icon"
                                            on:click=move |_| remove_member(user_id.clone())
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
