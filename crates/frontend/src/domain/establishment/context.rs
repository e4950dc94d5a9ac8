use contracts::domain::establishment::{Establishment, Plan, UsageCounter};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::system::session::storage;

/// Active-tenant state. Exactly one establishment id is active per
/// browser session; it is restored from localStorage on startup and
/// every tenant-scoped fetch in the application keys off it.
#[derive(Clone, Copy)]
pub struct EstablishmentContext {
    pub active_id: RwSignal<Option<String>>,
    pub details: RwSignal<Option<Establishment>>,
    pub usage: RwSignal<Vec<UsageCounter>>,
    pub plan: RwSignal<Option<Plan>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Bumped to force a refetch of the active tenant's data.
    reload: RwSignal<u32>,
}

impl EstablishmentContext {
    pub fn new() -> Self {
        Self {
            active_id: RwSignal::new(storage::get_current_establishment_id()),
            details: RwSignal::new(None),
            usage: RwSignal::new(Vec::new()),
            plan: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            reload: RwSignal::new(0),
        }
    }

    /// Persist and activate a tenant. Membership is NOT validated here;
    /// the backend authorizes every call and the access-control helper
    /// gates rendering.
    pub fn select(&self, id: &str) {
        storage::save_current_establishment_id(id);
        self.active_id.set(Some(id.to_string()));
    }

    /// Deactivate the current tenant and forget the persisted id.
    pub fn clear(&self) {
        storage::clear_current_establishment_id();
        self.active_id.set(None);
        self.details.set(None);
        self.usage.set(Vec::new());
        self.plan.set(None);
        self.error.set(None);
    }

    /// Refetch details/usage/plan for the active tenant.
    pub fn refresh(&self) {
        self.reload.update(|n| *n = n.wrapping_add(1));
    }
}

/// Fetches establishment details, usage counters and the plan whenever
/// the active tenant changes.
#[component]
pub fn EstablishmentProvider(children: ChildrenFn) -> impl IntoView {
    let ctx = EstablishmentContext::new();
    provide_context(ctx);

    Effect::new(move |_| {
        ctx.reload.get();
        let Some(id) = ctx.active_id.get() else {
            ctx.details.set(None);
            ctx.usage.set(Vec::new());
            ctx.plan.set(None);
            return;
        };

        ctx.loading.set(true);
        ctx.error.set(None);

        spawn_local(async move {
            let (details, counters) =
                futures::join!(api::fetch_establishment(&id), api::fetch_usage_counters(&id));

            // The user may have switched tenants while these requests
            // were in flight; stale responses are dropped, not aborted.
            if ctx.active_id.get_untracked().as_deref() != Some(id.as_str()) {
                return;
            }

            match details {
                Ok(establishment) => {
                    let plan_code = establishment.plan_code.clone();
                    ctx.details.set(Some(establishment));

                    if let Some(code) = plan_code {
                        match api::fetch_plan(&code).await {
                            Ok(plan) => {
                                if ctx.active_id.get_untracked().as_deref() == Some(id.as_str()) {
                                    ctx.plan.set(Some(plan));
                                }
                            }
                            Err(e) => log::warn!("Failed to load plan {}: {}", code, e),
                        }
                    } else {
                        ctx.plan.set(None);
                    }
                }
                Err(e) => ctx.error.set(Some(e)),
            }

            match counters {
                Ok(list) => ctx.usage.set(list),
                Err(e) => log::warn!("Failed to load usage counters: {}", e),
            }

            ctx.loading.set(false);
        });
    });

    children()
}

/// Hook to access the active establishment context
pub fn use_establishment() -> EstablishmentContext {
    use_context::<EstablishmentContext>()
        .expect("EstablishmentProvider not found in component tree")
}
