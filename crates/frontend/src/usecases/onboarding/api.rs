//! Executor half of the onboarding workflow.
//!
//! Runs the provisioning sequence step by step against the REST API.
//! Sequential and non-transactional: the first failure halts the
//! sequence and is reported with the step it happened in; records
//! created by earlier steps are left in place.

use contracts::domain::billing::NewBillingAccount;
use contracts::domain::establishment::{EstablishmentPatch, NewUsageCounter};
use contracts::domain::membership::NewUserEstablishment;
use uuid::Uuid;

use super::provision::{counter_specs, establishment_payload, OnboardingForm, ProvisionStep};
use crate::domain::billing::api as billing_api;
use crate::domain::establishment::api as establishment_api;
use crate::domain::membership::api as membership_api;
use crate::shared::api_utils::{api_url, post_json};

/// A failure carries the step it halted in.
#[derive(Debug, Clone)]
pub struct ProvisionError {
    pub step: ProvisionStep,
    pub message: String,
}

pub type StepResult<T> = Result<T, ProvisionError>;

fn fail(step: ProvisionStep) -> impl Fn(String) -> ProvisionError {
    move |message| ProvisionError { step, message }
}

async fn create_usage_counter(new: &NewUsageCounter) -> Result<(), String> {
    let _: serde_json::Value = post_json(&api_url("/usage_counters"), new).await?;
    Ok(())
}

/// Run the whole sequence. `on_step` fires when a step starts, driving
/// the wizard's progress checklist. Returns the new establishment id.
pub async fn provision(
    form: OnboardingForm,
    logo: Option<web_sys::File>,
    user_id: Uuid,
    on_step: impl Fn(ProvisionStep),
) -> StepResult<Uuid> {
    // 1. Establishment record
    on_step(ProvisionStep::CreateEstablishment);
    let establishment = establishment_api::create_establishment(&establishment_payload(&form))
        .await
        .map_err(fail(ProvisionStep::CreateEstablishment))?;
    let establishment_id = establishment.id;

    // 2. Ownership link
    on_step(ProvisionStep::LinkOwner);
    membership_api::create_membership(&NewUserEstablishment {
        user_id,
        establishment_id,
        role: contracts::enums::Role::Owner,
    })
    .await
    .map_err(fail(ProvisionStep::LinkOwner))?;

    // 3. Logo (optional)
    on_step(ProvisionStep::UploadLogo);
    if let Some(file) = logo {
        let id_str = establishment_id.to_string();
        let path = establishment_api::upload_logo(&id_str, file)
            .await
            .map_err(fail(ProvisionStep::UploadLogo))?;
        establishment_api::update_establishment(
            &id_str,
            &EstablishmentPatch {
                logo_path: Some(path),
                ..Default::default()
            },
        )
        .await
        .map_err(fail(ProvisionStep::UploadLogo))?;
    }

    // 4. Free plan definition
    on_step(ProvisionStep::FetchFreePlan);
    let plan = establishment_api::fetch_plan("free")
        .await
        .map_err(fail(ProvisionStep::FetchFreePlan))?;

    // 5. Billing account, falling back to an existing record so a
    //    re-run after a partial failure does not halt here
    on_step(ProvisionStep::CreateBillingAccount);
    let created = billing_api::create_billing_account(&NewBillingAccount {
        establishment_id,
        free_mode: true,
        billing_cycle: contracts::domain::billing::BillingCycle::Monthly,
    })
    .await;
    if created.is_err() {
        billing_api::fetch_billing_account(&establishment_id.to_string())
            .await
            .map_err(fail(ProvisionStep::CreateBillingAccount))?;
    }

    // 6. Usage counters for categories not already present
    on_step(ProvisionStep::CreateUsageCounters);
    let existing = establishment_api::fetch_usage_counters(&establishment_id.to_string())
        .await
        .map_err(fail(ProvisionStep::CreateUsageCounters))?;
    for spec in counter_specs(&plan, &existing) {
        create_usage_counter(&NewUsageCounter {
            establishment_id,
            category: spec.category,
            limit: spec.limit,
        })
        .await
        .map_err(fail(ProvisionStep::CreateUsageCounters))?;
    }

    Ok(establishment_id)
}
