use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::UsageCategory;

/// A tenant. Every tenant-scoped fetch in the application is
/// parameterized by one establishment id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Establishment {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub plan_code: Option<String>,
}

/// Payload for creating an establishment during onboarding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEstablishment {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub plan_code: Option<String>,
}

/// Partial update of establishment settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstablishmentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<String>,
}

/// Subscription plan definition. Limits are copied into usage counters
/// when an establishment is provisioned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    pub code: String,
    pub name: String,
    pub seat_limit: i64,
    pub invoice_limit: i64,
    pub recipe_limit: i64,
}

impl Plan {
    /// Limit for a given metered category.
    pub fn limit_for(&self, category: UsageCategory) -> i64 {
        match category {
            UsageCategory::Seat => self.seat_limit,
            UsageCategory::Invoices => self.invoice_limit,
            UsageCategory::Recipe => self.recipe_limit,
        }
    }
}

/// Payload for provisioning one usage counter at onboarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUsageCounter {
    pub establishment_id: Uuid,
    pub category: UsageCategory,
    pub limit: i64,
}

/// Metered usage for one category over a billing period.
/// Mutated by backend jobs; read-only on the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageCounter {
    pub establishment_id: Uuid,
    pub category: UsageCategory,
    pub used: i64,
    pub limit: i64,
    #[serde(default)]
    pub period_start: Option<NaiveDate>,
    #[serde(default)]
    pub period_end: Option<NaiveDate>,
}

impl UsageCounter {
    /// Fraction of the limit consumed, clamped to [0, 1].
    /// A non-positive limit means unlimited and reports 0.
    pub fn usage_ratio(&self) -> f64 {
        if self.limit <= 0 {
            return 0.0;
        }
        (self.used as f64 / self.limit as f64).clamp(0.0, 1.0)
    }

    pub fn is_exhausted(&self) -> bool {
        self.limit > 0 && self.used >= self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter(used: i64, limit: i64) -> UsageCounter {
        UsageCounter {
            establishment_id: Uuid::nil(),
            category: UsageCategory::Recipe,
            used,
            limit,
            period_start: None,
            period_end: None,
        }
    }

    #[test]
    fn test_usage_ratio() {
        assert_eq!(counter(5, 10).usage_ratio(), 0.5);
        assert_eq!(counter(15, 10).usage_ratio(), 1.0);
        assert_eq!(counter(5, 0).usage_ratio(), 0.0);
    }

    #[test]
    fn test_is_exhausted() {
        assert!(counter(10, 10).is_exhausted());
        assert!(!counter(9, 10).is_exhausted());
        assert!(!counter(9, 0).is_exhausted());
    }
}
