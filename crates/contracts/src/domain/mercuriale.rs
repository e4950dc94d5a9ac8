use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::numeric::lenient_f64;
use crate::enums::AccessLevel;

/// A supplier publishing mercuriales (price lists).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MercurialeSupplier {
    pub id: Uuid,
    pub name: String,
    pub access_level: AccessLevel,
}

/// A supplier-specific price list, versioned by validity window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mercuriale {
    pub id: Uuid,
    pub supplier_id: Uuid,
    pub label: String,
    #[serde(default)]
    pub valid_from: Option<NaiveDate>,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
}

/// Catalog entry inside a mercuriale (the article identity, without a
/// price).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MercurialeMasterArticle {
    pub id: Uuid,
    pub mercuriale_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Priced article row attached to a master article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MercurialeArticle {
    pub id: Uuid,
    pub master_article_id: Uuid,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub previous_price: Option<f64>,
}

impl MercurialeArticle {
    /// Relative price move against the previous version of the list,
    /// as a fraction. `None` when either price is missing or the
    /// previous price is zero.
    pub fn price_delta_ratio(&self) -> Option<f64> {
        match (self.price, self.previous_price) {
            (Some(now), Some(prev)) if prev != 0.0 => Some((now - prev) / prev),
            _ => None,
        }
    }
}
