//! Tab labels — the single source of truth for tab titles.

/// Readable tab title for a tab key. Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "performance" => "Performance",
        "financial_reports" => "Financial reports",
        "invoices" => "Invoices",
        "recipes" => "Recipes",
        "mercuriales" => "Mercuriales",
        "team" => "Team",
        "billing" => "Billing",
        "settings" => "Settings",
        _ => "Page",
    }
}
