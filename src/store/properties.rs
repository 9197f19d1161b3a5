use crate::error::CatalogError;
use crate::models::Listing;
use crate::sources::ListingSource;
use anyhow::{Context, Result};
use std::collections::HashMap;
use tracing::info;

/// Immutable listing collection with O(1) lookup by id
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    listings: Vec<Listing>,
    index: HashMap<String, usize>,
}

impl PropertyStore {
    /// Build a store, keeping insertion order. Ids must be unique and
    /// every area positive.
    pub fn new(listings: Vec<Listing>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(listings.len());
        for (pos, listing) in listings.iter().enumerate() {
            if listing.area.is_nan() || listing.area <= 0.0 {
                return Err(CatalogError::InvalidArea {
                    id: listing.id.clone(),
                    area: listing.area,
                });
            }
            if index.insert(listing.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(listing.id.clone()));
            }
        }
        Ok(Self { listings, index })
    }

    /// Pull every listing from `source` and index it
    pub async fn load(source: &dyn ListingSource) -> Result<Self> {
        let listings = source
            .load()
            .await
            .with_context(|| format!("Failed to load listings from {}", source.source_name()))?;
        let store = Self::new(listings)
            .with_context(|| format!("Invalid catalog from {}", source.source_name()))?;
        info!("Loaded {} listings from {}", store.len(), source.source_name());
        Ok(store)
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn by_id(&self, id: &str) -> Option<&Listing> {
        self.index.get(id).map(|&pos| &self.listings[pos])
    }

    pub(crate) fn get(&self, pos: usize) -> Option<&Listing> {
        self.listings.get(pos)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
