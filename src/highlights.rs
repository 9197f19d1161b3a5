//! Derived views over the catalog for landing, details and dashboard screens

use crate::models::Listing;
use crate::search::category;
use crate::search::filter::{self, FilterCriteria};
use crate::search::sort::{self, SortKey};
use crate::search::TypeFilter;
use crate::store::{FavoritesStore, PropertyStore};
use serde::Serialize;

/// Featured listings in catalog order
pub fn featured(store: &PropertyStore, limit: usize) -> Vec<&Listing> {
    store
        .all()
        .iter()
        .filter(|l| l.is_featured)
        .take(limit)
        .collect()
}

/// Newest listings first
pub fn most_recent(store: &PropertyStore, limit: usize) -> Vec<&Listing> {
    let mut listings = sort::sort(store.all().iter().collect(), SortKey::Newest);
    listings.truncate(limit);
    listings
}

/// Other listings sharing the type or the exact location of `id`.
/// Empty when `id` is not in the catalog.
pub fn similar<'a>(store: &'a PropertyStore, id: &str, limit: usize) -> Vec<&'a Listing> {
    let Some(subject) = store.by_id(id) else {
        return Vec::new();
    };
    store
        .all()
        .iter()
        .filter(|l| l.id != subject.id)
        .filter(|l| l.property_type == subject.property_type || l.location == subject.location)
        .take(limit)
        .collect()
}

/// Listings of one category narrowed by the structured criteria.
///
/// The category decides the type, so the criteria's own type constraint is
/// not applied. Search text plays no part in category browsing.
pub fn category_listings<'a>(
    store: &'a PropertyStore,
    category_name: &str,
    criteria: &FilterCriteria,
) -> Vec<&'a Listing> {
    let criteria = FilterCriteria {
        property_type: TypeFilter::Any,
        ..criteria.clone()
    };
    category::filter_by_type(store.all(), category_name)
        .into_iter()
        .filter(|l| filter::matches(l, &criteria))
        .collect()
}

/// Featured listings among an already browsed category, in input order
pub fn category_featured<'a>(listings: &[&'a Listing], limit: usize) -> Vec<&'a Listing> {
    listings
        .iter()
        .copied()
        .filter(|l| l.is_featured)
        .take(limit)
        .collect()
}

/// Resolve favorite ids in the order they were marked. Dangling ids are skipped.
pub fn favorite_listings<'a>(store: &'a PropertyStore, favorites: &FavoritesStore) -> Vec<&'a Listing> {
    favorites
        .all()
        .iter()
        .filter_map(|id| store.by_id(id))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub listings: usize,
    pub total_views: u64,
    /// `None` for an empty portfolio
    pub average_price: Option<f64>,
}

pub fn portfolio_stats(listings: &[&Listing]) -> PortfolioStats {
    let total_views = listings.iter().map(|l| l.views).sum();
    let average_price = if listings.is_empty() {
        None
    } else {
        let total: u128 = listings.iter().map(|l| l.price as u128).sum();
        Some(total as f64 / listings.len() as f64)
    };
    PortfolioStats {
        listings: listings.len(),
        total_views,
        average_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::SampleCatalog;
    use crate::store::MemoryBlobStore;

    fn sample_store() -> PropertyStore {
        PropertyStore::new(SampleCatalog::listings().unwrap()).unwrap()
    }

    fn ids<'a>(listings: &[&'a Listing]) -> Vec<&'a str> {
        listings.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn featured_and_recent() {
        let store = sample_store();
        assert_eq!(ids(&featured(&store, 3)), vec!["1", "3", "6"]);
        assert_eq!(ids(&most_recent(&store, 3)), vec!["12", "11", "10"]);
        assert!(featured(&store, 0).is_empty());
    }

    #[test]
    fn similar_by_type_or_location() {
        let store = sample_store();
        // "1" is a house in Yangon
        assert_eq!(ids(&similar(&store, "1", 3)), vec!["3", "4", "9"]);
        assert!(similar(&store, "missing", 3).is_empty());
    }

    #[test]
    fn category_browsing_applies_criteria_but_not_type() {
        let store = sample_store();

        let houses = category_listings(&store, "house", &FilterCriteria::default());
        assert_eq!(ids(&houses), vec!["1", "4", "10"]);

        let criteria = FilterCriteria {
            property_type: TypeFilter::Only(crate::models::PropertyType::Apartment),
            max_price: 400_000,
            min_bedrooms: 4,
            ..Default::default()
        };
        assert_eq!(ids(&category_listings(&store, "house", &criteria)), vec!["4", "10"]);

        let yangon = FilterCriteria {
            location: "yangon".to_string(),
            amenities: ["Security".to_string()].into(),
            ..Default::default()
        };
        assert_eq!(ids(&category_listings(&store, "all", &yangon)), vec!["1", "12"]);

        assert!(category_listings(&store, "villa", &FilterCriteria::default()).is_empty());
    }

    #[test]
    fn featured_within_category() {
        let store = sample_store();

        let all = category_listings(&store, "all", &FilterCriteria::default());
        assert_eq!(ids(&category_featured(&all, 3)), vec!["1", "3", "6"]);

        let condos = category_listings(&store, "condominium", &FilterCriteria::default());
        assert_eq!(ids(&category_featured(&condos, 3)), vec!["8", "12"]);

        let cabins = category_listings(&store, "cabin", &FilterCriteria::default());
        assert!(category_featured(&cabins, 3).is_empty());
    }

    #[test]
    fn favorites_skip_dangling_ids() {
        let store = sample_store();
        let mut favorites = FavoritesStore::load(Box::new(MemoryBlobStore::new()));
        for id in ["7", "ghost", "2"] {
            let _ = favorites.toggle(id);
        }
        assert_eq!(ids(&favorite_listings(&store, &favorites)), vec!["7", "2"]);
    }

    #[test]
    fn stats_over_listings() {
        let store = sample_store();
        let picked: Vec<&Listing> = store.all().iter().take(2).collect();
        let stats = portfolio_stats(&picked);
        assert_eq!(stats.listings, 2);
        assert_eq!(stats.total_views, 245 + 189);
        assert_eq!(stats.average_price, Some(385000.0));

        assert_eq!(portfolio_stats(&[]).average_price, None);
    }
}
