use serde::{Deserialize, Serialize};

/// Application feature areas gated by the role-based access table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Invoices,
    Recipes,
    Analytics,
    Performance,
    Mercuriales,
    Team,
    Settings,
    Billing,
}

impl Feature {
    pub fn code(&self) -> &'static str {
        match self {
            Feature::Invoices => "invoices",
            Feature::Recipes => "recipes",
            Feature::Analytics => "analytics",
            Feature::Performance => "performance",
            Feature::Mercuriales => "mercuriales",
            Feature::Team => "team",
            Feature::Settings => "settings",
            Feature::Billing => "billing",
        }
    }

    pub fn all() -> Vec<Feature> {
        vec![
            Feature::Invoices,
            Feature::Recipes,
            Feature::Analytics,
            Feature::Performance,
            Feature::Mercuriales,
            Feature::Team,
            Feature::Settings,
            Feature::Billing,
        ]
    }
}
