//! Pure planning half of the onboarding workflow.
//!
//! The wizard gathers a form; this module turns it into the exact set
//! of records to create, so the sequence in `api::provision` stays a
//! dumb executor and the record set is unit-testable.

use contracts::domain::billing::BillingCycle;
use contracts::domain::establishment::{NewEstablishment, Plan, UsageCounter};
use contracts::enums::{Role, UsageCategory};

/// Everything the wizard collects before submission.
#[derive(Debug, Clone, Default)]
pub struct OnboardingForm {
    pub name: String,
    pub address: String,
}

/// One usage counter to create, with the limit copied from the free
/// plan.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSpec {
    pub category: UsageCategory,
    pub limit: i64,
}

/// Billing account template (ids are assigned mid-sequence).
#[derive(Debug, Clone, PartialEq)]
pub struct BillingSpec {
    pub free_mode: bool,
    pub billing_cycle: BillingCycle,
}

/// The full record set provisioning will create.
#[derive(Debug, Clone)]
pub struct ProvisioningPlan {
    pub establishment: NewEstablishment,
    pub owner_role: Role,
    pub billing: BillingSpec,
    pub counters: Vec<CounterSpec>,
}

/// Ordered steps of the provisioning sequence. Progress is reported
/// per step so a failure names exactly where it halted. The sequence
/// is not transactional: there is no rollback of completed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionStep {
    CreateEstablishment,
    LinkOwner,
    UploadLogo,
    FetchFreePlan,
    CreateBillingAccount,
    CreateUsageCounters,
}

impl ProvisionStep {
    pub fn all() -> Vec<ProvisionStep> {
        vec![
            ProvisionStep::CreateEstablishment,
            ProvisionStep::LinkOwner,
            ProvisionStep::UploadLogo,
            ProvisionStep::FetchFreePlan,
            ProvisionStep::CreateBillingAccount,
            ProvisionStep::CreateUsageCounters,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProvisionStep::CreateEstablishment => "Create establishment",
            ProvisionStep::LinkOwner => "Link you as owner",
            ProvisionStep::UploadLogo => "Upload logo",
            ProvisionStep::FetchFreePlan => "Fetch free plan",
            ProvisionStep::CreateBillingAccount => "Create billing account",
            ProvisionStep::CreateUsageCounters => "Create usage counters",
        }
    }
}

/// Establishment payload from the wizard form. New tenants always
/// start on the free plan.
pub fn establishment_payload(form: &OnboardingForm) -> NewEstablishment {
    NewEstablishment {
        name: form.name.trim().to_string(),
        address: {
            let address = form.address.trim();
            if address.is_empty() {
                None
            } else {
                Some(address.to_string())
            }
        },
        plan_code: Some("free".to_string()),
    }
}

/// Counters to create: every metered category not already present,
/// with limits copied from the free plan.
pub fn counter_specs(plan: &Plan, existing: &[UsageCounter]) -> Vec<CounterSpec> {
    UsageCategory::all()
        .into_iter()
        .filter(|category| !existing.iter().any(|c| c.category == *category))
        .map(|category| CounterSpec {
            category,
            limit: plan.limit_for(category),
        })
        .collect()
}

/// Assemble the whole record set for a valid form.
pub fn build_plan(form: &OnboardingForm, plan: &Plan, existing: &[UsageCounter]) -> ProvisioningPlan {
    ProvisioningPlan {
        establishment: establishment_payload(form),
        owner_role: Role::Owner,
        billing: BillingSpec {
            free_mode: true,
            billing_cycle: BillingCycle::Monthly,
        },
        counters: counter_specs(plan, existing),
    }
}

/// Client-side form validation: step 1 cannot be submitted without a
/// usable name.
pub fn validate_form(form: &OnboardingForm) -> Result<(), &'static str> {
    if form.name.trim().len() < 2 {
        return Err("Establishment name must be at least 2 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn free_plan() -> Plan {
        Plan {
            code: "free".into(),
            name: "Free".into(),
            seat_limit: 2,
            invoice_limit: 20,
            recipe_limit: 15,
        }
    }

    fn form() -> OnboardingForm {
        OnboardingForm {
            name: "Chez Nino".into(),
            address: "4 rue des Halles".into(),
        }
    }

    fn existing_counter(category: UsageCategory) -> UsageCounter {
        UsageCounter {
            establishment_id: Uuid::nil(),
            category,
            used: 0,
            limit: 1,
            period_start: None,
            period_end: None,
        }
    }

    #[test]
    fn test_plan_creates_exactly_one_of_each_record() {
        let plan = build_plan(&form(), &free_plan(), &[]);

        assert_eq!(plan.establishment.name, "Chez Nino");
        assert_eq!(plan.establishment.plan_code.as_deref(), Some("free"));
        assert_eq!(plan.owner_role, Role::Owner);
        assert!(plan.billing.free_mode);

        // Three counters with limits copied from the free plan
        assert_eq!(plan.counters.len(), 3);
        let limit_of = |category: UsageCategory| {
            plan.counters
                .iter()
                .find(|c| c.category == category)
                .map(|c| c.limit)
        };
        assert_eq!(limit_of(UsageCategory::Seat), Some(2));
        assert_eq!(limit_of(UsageCategory::Invoices), Some(20));
        assert_eq!(limit_of(UsageCategory::Recipe), Some(15));
    }

    #[test]
    fn test_counters_skip_existing_categories() {
        let existing = vec![existing_counter(UsageCategory::Seat)];
        let specs = counter_specs(&free_plan(), &existing);
        assert_eq!(specs.len(), 2);
        assert!(specs.iter().all(|c| c.category != UsageCategory::Seat));
    }

    #[test]
    fn test_establishment_payload_trims_and_drops_empty_address() {
        let payload = establishment_payload(&OnboardingForm {
            name: "  Chez Nino  ".into(),
            address: "   ".into(),
        });
        assert_eq!(payload.name, "Chez Nino");
        assert_eq!(payload.address, None);
    }

    #[test]
    fn test_validate_form() {
        assert!(validate_form(&form()).is_ok());
        assert!(validate_form(&OnboardingForm::default()).is_err());
    }
}
