//! In-memory join of the mercuriale hierarchy.
//!
//! The API exposes flat collections (suppliers, mercuriales, master
//! articles, priced articles); there is no server-side join. This
//! module stitches them together by foreign-key id sets and filters to
//! the supplier being viewed.

use std::collections::{HashMap, HashSet};

use contracts::domain::mercuriale::{
    Mercuriale, MercurialeArticle, MercurialeMasterArticle, MercurialeSupplier,
};
use contracts::enums::AccessLevel;
use uuid::Uuid;

/// One display row: a priced article with its catalog identity.
#[derive(Debug, Clone)]
pub struct JoinedArticle {
    pub master: MercurialeMasterArticle,
    pub article: MercurialeArticle,
}

/// Mercuriale tier granted by a plan code. Unknown codes fall back to
/// the entry tier.
pub fn access_level_for_plan(plan_code: &str) -> AccessLevel {
    match plan_code {
        "premium" => AccessLevel::Premium,
        "plus" => AccessLevel::Plus,
        _ => AccessLevel::Standard,
    }
}

/// Suppliers visible at a given tier (own tier and below).
pub fn visible_suppliers(
    suppliers: &[MercurialeSupplier],
    level: AccessLevel,
) -> Vec<MercurialeSupplier> {
    suppliers
        .iter()
        .filter(|s| s.access_level.rank() <= level.rank())
        .cloned()
        .collect()
}

/// Join supplier → mercuriale → master article → article, keeping only
/// rows belonging to `supplier_id`. Input order is preserved.
pub fn join_supplier_articles(
    mercuriales: &[Mercuriale],
    master_articles: &[MercurialeMasterArticle],
    articles: &[MercurialeArticle],
    supplier_id: Uuid,
) -> Vec<JoinedArticle> {
    let mercuriale_ids: HashSet<Uuid> = mercuriales
        .iter()
        .filter(|m| m.supplier_id == supplier_id)
        .map(|m| m.id)
        .collect();

    let masters_by_id: HashMap<Uuid, &MercurialeMasterArticle> = master_articles
        .iter()
        .filter(|a| mercuriale_ids.contains(&a.mercuriale_id))
        .map(|a| (a.id, a))
        .collect();

    articles
        .iter()
        .filter_map(|article| {
            let master = masters_by_id.get(&article.master_article_id)?;
            Some(JoinedArticle {
                master: (*master).clone(),
                article: article.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uuid(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    fn supplier(id: u128, level: AccessLevel) -> MercurialeSupplier {
        MercurialeSupplier {
            id: uuid(id),
            name: format!("supplier-{}", id),
            access_level: level,
        }
    }

    fn mercuriale(id: u128, supplier_id: u128) -> Mercuriale {
        Mercuriale {
            id: uuid(id),
            supplier_id: uuid(supplier_id),
            label: format!("list-{}", id),
            valid_from: None,
            valid_until: None,
        }
    }

    fn master(id: u128, mercuriale_id: u128) -> MercurialeMasterArticle {
        MercurialeMasterArticle {
            id: uuid(id),
            mercuriale_id: uuid(mercuriale_id),
            name: format!("article-{}", id),
            category: None,
            unit: None,
        }
    }

    fn article(id: u128, master_id: u128, price: f64) -> MercurialeArticle {
        MercurialeArticle {
            id: uuid(id),
            master_article_id: uuid(master_id),
            price: Some(price),
            previous_price: None,
        }
    }

    #[test]
    fn test_join_filters_to_supplier() {
        let mercuriales = vec![mercuriale(10, 1), mercuriale(11, 2)];
        let masters = vec![master(100, 10), master(101, 11)];
        let articles = vec![
            article(1000, 100, 2.5),
            article(1001, 101, 9.0),
            // orphan row pointing at an unknown master
            article(1002, 999, 4.0),
        ];

        let joined = join_supplier_articles(&mercuriales, &masters, &articles, uuid(1));
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].master.id, uuid(100));
        assert_eq!(joined[0].article.price, Some(2.5));
    }

    #[test]
    fn test_join_empty_for_unknown_supplier() {
        let mercuriales = vec![mercuriale(10, 1)];
        let masters = vec![master(100, 10)];
        let articles = vec![article(1000, 100, 2.5)];

        let joined = join_supplier_articles(&mercuriales, &masters, &articles, uuid(42));
        assert!(joined.is_empty());
    }

    #[test]
    fn test_visible_suppliers_by_tier() {
        let suppliers = vec![
            supplier(1, AccessLevel::Standard),
            supplier(2, AccessLevel::Plus),
            supplier(3, AccessLevel::Premium),
        ];

        assert_eq!(visible_suppliers(&suppliers, AccessLevel::Standard).len(), 1);
        assert_eq!(visible_suppliers(&suppliers, AccessLevel::Plus).len(), 2);
        assert_eq!(visible_suppliers(&suppliers, AccessLevel::Premium).len(), 3);
    }

    #[test]
    fn test_access_level_for_plan() {
        assert_eq!(access_level_for_plan("free"), AccessLevel::Standard);
        assert_eq!(access_level_for_plan("plus"), AccessLevel::Plus);
        assert_eq!(access_level_for_plan("premium"), AccessLevel::Premium);
        assert_eq!(access_level_for_plan("unknown"), AccessLevel::Standard);
    }
}
