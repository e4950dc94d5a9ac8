use contracts::domain::support::MaintenanceStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::establishment::context::EstablishmentProvider;
use crate::domain::membership::context::MembershipProvider;
use crate::domain::support::api as support_api;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::icons::icon;
use crate::shared::validation::ValidationService;
use crate::system::session::context::SessionProvider;

/// Maintenance flag, checked once at application start.
#[component]
fn MaintenanceBanner() -> impl IntoView {
    let (status, set_status) = signal(MaintenanceStatus::default());

    Effect::new(move |_| {
        spawn_local(async move {
            match support_api::fetch_maintenance_status().await {
                Ok(s) => set_status.set(s),
                Err(e) => log::debug!("Maintenance check failed: {}", e),
            }
        });
    });

    view! {
        <Show when=move || status.get().enabled>
            <div class="maintenance-banner">
                {icon("alert")}
                {move || status.get().message.unwrap_or_else(|| {
                    "Scheduled maintenance in progress — some data may be stale.".to_string()
                })}
            </div>
        </Show>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // App-wide UI state (tabs, sidebar) via context
    provide_context(AppGlobalContext::new());

    // Server-managed validation patterns with compiled-in fallbacks
    let validation = ValidationService::new();
    validation.load();
    provide_context(validation);

    view! {
        <SessionProvider>
            <EstablishmentProvider>
                <MembershipProvider>
                    <MaintenanceBanner />
                    <AppRoutes />
                </MembershipProvider>
            </EstablishmentProvider>
        </SessionProvider>
    }
}
