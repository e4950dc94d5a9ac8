use contracts::domain::membership::UserEstablishment;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::system::session::context::use_session;

/// The signed-in user's memberships, refetched wholesale whenever the
/// session user changes. Drives the establishment switcher and the
/// access-control hook.
#[derive(Clone, Copy)]
pub struct MembershipContext {
    pub memberships: RwSignal<Vec<UserEstablishment>>,
    pub loaded: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    reload: RwSignal<u32>,
}

impl MembershipContext {
    pub fn new() -> Self {
        Self {
            memberships: RwSignal::new(Vec::new()),
            loaded: RwSignal::new(false),
            error: RwSignal::new(None),
            reload: RwSignal::new(0),
        }
    }

    /// Refetch the membership list (after onboarding creates a link).
    pub fn refresh(&self) {
        self.reload.update(|n| *n = n.wrapping_add(1));
    }
}

#[component]
pub fn MembershipProvider(children: ChildrenFn) -> impl IntoView {
    let ctx = MembershipContext::new();
    provide_context(ctx);

    let (session, _) = use_session();

    Effect::new(move |_| {
        ctx.reload.get();
        let Some(user_id) = session.get().user_id() else {
            ctx.memberships.set(Vec::new());
            ctx.loaded.set(false);
            return;
        };

        spawn_local(async move {
            let result = api::fetch_memberships_for_user(&user_id).await;

            // A sign-out (or account switch) may have happened while the
            // request was in flight; drop the stale response.
            if session.get_untracked().user_id().as_deref() != Some(user_id.as_str()) {
                return;
            }

            match result {
                Ok(rows) => {
                    ctx.memberships.set(rows);
                    ctx.loaded.set(true);
                    ctx.error.set(None);
                }
                Err(e) => {
                    ctx.error.set(Some(e));
                    ctx.loaded.set(true);
                }
            }
        });
    });

    children()
}

/// Hook to access the membership list
pub fn use_memberships() -> MembershipContext {
    use_context::<MembershipContext>().expect("MembershipProvider not found in component tree")
}
