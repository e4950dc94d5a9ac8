use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::numeric::lenient_f64;

/// Precomputed performance metrics per establishment, refreshed
/// continuously by backend jobs. Used for the dashboard tiles and the
/// cross-tenant ranking.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiveScore {
    pub establishment_id: Uuid,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub global_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub purchase_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub recipe_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub financial_score: Option<f64>,
}
