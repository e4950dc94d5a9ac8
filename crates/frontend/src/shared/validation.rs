//! Form validation against server-managed regex patterns.
//!
//! Patterns come from the `/regex_patterns` endpoint so the backend and
//! the client validate with the same expressions. Compiled-in fallbacks
//! cover the period before the fetch lands (or when it fails).

use std::collections::HashMap;

use leptos::prelude::*;
use once_cell::sync::Lazy;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::support::RegexPattern;

use crate::shared::api_utils::{api_url, get_json};

static FALLBACK_PATTERNS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("email", r"^[^\s@]+@[^\s@]+\.[^\s@]+$"),
        ("phone", r"^\+?[0-9 .\-]{6,20}$"),
        ("establishment_name", r"^.{2,80}$"),
    ])
});

/// Provided once in the app root; pages read patterns through it.
#[derive(Clone, Copy)]
pub struct ValidationService {
    patterns: RwSignal<HashMap<String, String>>,
}

impl ValidationService {
    pub fn new() -> Self {
        Self {
            patterns: RwSignal::new(HashMap::new()),
        }
    }

    /// Fetch server patterns. Failure keeps the fallbacks; nothing to
    /// retry (the next full page load will try again).
    pub fn load(&self) {
        let patterns = self.patterns;
        spawn_local(async move {
            match get_json::<Vec<RegexPattern>>(&api_url("/regex_patterns")).await {
                Ok(rows) => {
                    patterns.set(rows.into_iter().map(|r| (r.key, r.pattern)).collect());
                }
                Err(e) => {
                    log::warn!("Validation patterns unavailable, using fallbacks: {}", e);
                }
            }
        });
    }

    /// Pattern for a field kind, server value first, fallback second.
    pub fn pattern_for(&self, key: &str) -> Option<String> {
        let from_server = self
            .patterns
            .with_untracked(|map| map.get(key).cloned());
        from_server.or_else(|| FALLBACK_PATTERNS.get(key).map(|p| p.to_string()))
    }

    /// Validate a field value. Unknown keys accept anything.
    pub fn is_valid(&self, key: &str, value: &str) -> bool {
        match self.pattern_for(key) {
            Some(pattern) => js_sys::RegExp::new(&pattern, "u").test(value),
            None => true,
        }
    }
}

pub fn use_validation() -> ValidationService {
    use_context::<ValidationService>().expect("ValidationService not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks_cover_form_fields() {
        for key in ["email", "phone", "establishment_name"] {
            assert!(FALLBACK_PATTERNS.contains_key(key), "missing fallback: {}", key);
        }
    }
}
