use contracts::domain::mercuriale::{
    Mercuriale, MercurialeArticle, MercurialeMasterArticle, MercurialeSupplier,
};

use crate::shared::api_utils::{api_url, get_json, Direction, ListQuery};

/// All published suppliers, ordered by name. Tier filtering happens
/// client-side against the active plan.
pub async fn fetch_suppliers() -> Result<Vec<MercurialeSupplier>, String> {
    let query = ListQuery::ordered("name", Direction::Asc);
    get_json(&api_url(&query.append_to("/mercuriale_suppliers"))).await
}

/// All price lists. The validity window ordering puts the freshest
/// list first for each supplier.
pub async fn fetch_mercuriales() -> Result<Vec<Mercuriale>, String> {
    let query = ListQuery::ordered("valid_from", Direction::Desc);
    get_json(&api_url(&query.append_to("/mercuriales"))).await
}

/// Master-article catalog across all mercuriales.
pub async fn fetch_master_articles() -> Result<Vec<MercurialeMasterArticle>, String> {
    get_json(&api_url("/mercuriale_master_articles")).await
}

/// Priced article rows across all mercuriales.
pub async fn fetch_articles() -> Result<Vec<MercurialeArticle>, String> {
    get_json(&api_url("/mercuriale_articles")).await
}
