use leptos::prelude::*;

use super::context::use_session;
use crate::system::pages::login::LoginPage;

/// Renders children only when a session exists; otherwise the login
/// page.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            {children()}
        </Show>
    }
}
