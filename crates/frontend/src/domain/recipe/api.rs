use contracts::domain::recipe::{Ingredient, Recipe};

use crate::shared::api_utils::{api_url, get_json, Direction, ListQuery};

/// Recipes of an establishment, alphabetical.
pub async fn fetch_recipes(establishment_id: &str) -> Result<Vec<Recipe>, String> {
    let query = ListQuery::ordered("name", Direction::Asc);
    let path = query.append_to("/recipes");
    let url = api_url(&format!(
        "{}&establishment_id={}",
        path,
        urlencoding::encode(establishment_id)
    ));
    get_json(&url).await
}

/// Ingredients of an establishment with their latest unit prices.
pub async fn fetch_ingredients(establishment_id: &str) -> Result<Vec<Ingredient>, String> {
    let url = api_url(&format!(
        "/ingredients?establishment_id={}",
        urlencoding::encode(establishment_id)
    ));
    get_json(&url).await
}
