use contracts::domain::financial_report::FinancialReport;
use contracts::domain::live_score::LiveScore;
use contracts::domain::recipe::{Ingredient, Recipe};

use crate::domain::financial_report::api as report_api;
use crate::domain::recipe::api as recipe_api;
use crate::shared::api_utils::{api_url, get_json};

/// Live scores of one establishment.
pub async fn fetch_live_score(establishment_id: &str) -> Result<LiveScore, String> {
    let url = api_url(&format!(
        "/live_scores?establishment_id={}",
        urlencoding::encode(establishment_id)
    ));
    get_json(&url).await
}

/// Live scores of every tenant, in the backend's fetch order. Feeds
/// the cross-tenant ranking.
pub async fn fetch_all_live_scores() -> Result<Vec<LiveScore>, String> {
    get_json(&api_url("/live_scores")).await
}

/// Everything the performance dashboard needs for one tenant.
#[derive(Debug, Clone)]
pub struct PerformanceData {
    pub reports: Vec<FinancialReport>,
    pub recipes: Vec<Recipe>,
    pub ingredients: Vec<Ingredient>,
    pub live_score: Option<LiveScore>,
    pub all_scores: Vec<LiveScore>,
}

/// Fan-out the five independent fetches and await them together. The
/// reports fetch is the only hard requirement; the others degrade to
/// empty sections.
pub async fn load_performance_data(establishment_id: &str) -> Result<PerformanceData, String> {
    let (reports, recipes, ingredients, live_score, all_scores) = futures::join!(
        report_api::fetch_reports(establishment_id),
        recipe_api::fetch_recipes(establishment_id),
        recipe_api::fetch_ingredients(establishment_id),
        fetch_live_score(establishment_id),
        fetch_all_live_scores()
    );

    let reports = reports?;

    Ok(PerformanceData {
        reports,
        recipes: recipes.unwrap_or_else(|e| {
            log::warn!("Failed to load recipes: {}", e);
            Vec::new()
        }),
        ingredients: ingredients.unwrap_or_else(|e| {
            log::warn!("Failed to load ingredients: {}", e);
            Vec::new()
        }),
        live_score: live_score.ok(),
        all_scores: all_scores.unwrap_or_else(|e| {
            log::warn!("Failed to load live scores: {}", e);
            Vec::new()
        }),
    })
}
