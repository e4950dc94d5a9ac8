use serde::{Deserialize, Serialize};

/// Metered resource categories tracked by usage counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageCategory {
    Seat,
    Invoices,
    Recipe,
}

impl UsageCategory {
    pub fn code(&self) -> &'static str {
        match self {
            UsageCategory::Seat => "seat",
            UsageCategory::Invoices => "invoices",
            UsageCategory::Recipe => "recipe",
        }
    }

    /// All categories an establishment is provisioned with.
    pub fn all() -> Vec<UsageCategory> {
        vec![
            UsageCategory::Seat,
            UsageCategory::Invoices,
            UsageCategory::Recipe,
        ]
    }
}
