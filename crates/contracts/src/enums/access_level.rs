use serde::{Deserialize, Serialize};

/// Mercuriale access tier. Suppliers are published per tier; a plan at a
/// given tier sees its own tier and every tier below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccessLevel {
    Standard,
    Plus,
    Premium,
}

impl AccessLevel {
    pub fn code(&self) -> &'static str {
        match self {
            AccessLevel::Standard => "STANDARD",
            AccessLevel::Plus => "PLUS",
            AccessLevel::Premium => "PREMIUM",
        }
    }

    /// Numeric rank used for tier comparison (Standard lowest).
    pub fn rank(&self) -> u8 {
        match self {
            AccessLevel::Standard => 0,
            AccessLevel::Plus => 1,
            AccessLevel::Premium => 2,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "STANDARD" => Some(AccessLevel::Standard),
            "PLUS" => Some(AccessLevel::Plus),
            "PREMIUM" => Some(AccessLevel::Premium),
            _ => None,
        }
    }
}
