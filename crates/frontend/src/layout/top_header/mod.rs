//! TopHeader component - application top bar.
//!
//! Contains the sidebar toggle, brand, the active establishment,
//! user info and sign-out.

use crate::domain::establishment::context::use_establishment;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::session::context::{do_sign_out, use_session};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let establishment = use_establishment();
    let (session, set_session) = use_session();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let sign_out = move |_| {
        spawn_local(async move {
            let _ = do_sign_out(set_session).await;
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title="Toggle navigation"
                >
                    {icon("panel-left")}
                </button>
                <span class="top-header__title">"Brigade"</span>
                {move || establishment.details.get().map(|e| view! {
                    <span class="top-header__establishment">
                        {icon("building")}
                        {e.name.clone()}
                    </span>
                })}
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || session.get().display_name()}</span>
                </div>

                <button class="top-header__icon-btn" on:click=sign_out title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
