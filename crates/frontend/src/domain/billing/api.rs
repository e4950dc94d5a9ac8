use contracts::domain::billing::{BillingAccount, NewBillingAccount, StripeProduct};

use crate::shared::api_utils::{api_url, get_json, post_json};

/// Billing account of an establishment.
pub async fn fetch_billing_account(establishment_id: &str) -> Result<BillingAccount, String> {
    let url = api_url(&format!(
        "/billing_account?establishment_id={}",
        urlencoding::encode(establishment_id)
    ));
    get_json(&url).await
}

/// Create the billing account (onboarding). The endpoint rejects
/// duplicates; callers fall back to the existing record.
pub async fn create_billing_account(new: &NewBillingAccount) -> Result<BillingAccount, String> {
    post_json(&api_url("/billing_account"), new).await
}

/// Plan catalog mirrored from the payment provider.
pub async fn fetch_stripe_products() -> Result<Vec<StripeProduct>, String> {
    get_json(&api_url("/product_stripe")).await
}
