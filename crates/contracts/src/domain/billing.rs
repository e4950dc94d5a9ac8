use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Billing cycle for a paid subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl Default for BillingCycle {
    fn default() -> Self {
        BillingCycle::Monthly
    }
}

/// One billing account per establishment, created at onboarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingAccount {
    pub establishment_id: Uuid,
    pub free_mode: bool,
    #[serde(default)]
    pub billing_cycle: BillingCycle,
}

/// Payload for creating the billing account during onboarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBillingAccount {
    pub establishment_id: Uuid,
    pub free_mode: bool,
    pub billing_cycle: BillingCycle,
}

/// Catalog entry mirrored from the payment provider, shown on the
/// billing page for plan upgrades.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeProduct {
    pub id: String,
    pub plan_code: String,
    pub label: String,
    pub monthly_price: f64,
}
