use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::numeric::lenient_f64;

/// A costed recipe. Selling price and material cost feed the recipe
/// margin figures on the performance dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Uuid,
    pub establishment_id: Uuid,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub selling_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub material_cost: Option<f64>,
    #[serde(default)]
    pub is_active: bool,
}

impl Recipe {
    /// Material cost as a fraction of the selling price.
    /// `None` when either side is missing or the price is zero.
    pub fn cost_ratio(&self) -> Option<f64> {
        match (self.material_cost, self.selling_price) {
            (Some(cost), Some(price)) if price != 0.0 => Some(cost / price),
            _ => None,
        }
    }
}

/// A purchasable ingredient with its latest known unit price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Uuid,
    pub establishment_id: Uuid,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(cost: Option<f64>, price: Option<f64>) -> Recipe {
        Recipe {
            id: Uuid::nil(),
            establishment_id: Uuid::nil(),
            name: "test".into(),
            selling_price: price,
            material_cost: cost,
            is_active: true,
        }
    }

    #[test]
    fn test_cost_ratio() {
        assert_eq!(recipe(Some(3.0), Some(12.0)).cost_ratio(), Some(0.25));
        assert_eq!(recipe(Some(3.0), Some(0.0)).cost_ratio(), None);
        assert_eq!(recipe(None, Some(12.0)).cost_ratio(), None);
    }
}
