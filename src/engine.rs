use crate::models::Listing;
use crate::search::{matcher, sort, FilterCriteria, FilterUpdate, SortKey};
use crate::store::{FavoritesStore, PropertyStore, Toggle};
use tracing::debug;

/// Search, filter and sort over a fixed catalog, plus the user's favorites.
///
/// Every setter recomputes the result set before returning, so a read that
/// follows a setter always sees the new state.
#[derive(Debug)]
pub struct PropertyEngine {
    store: PropertyStore,
    favorites: FavoritesStore,
    search_text: String,
    criteria: FilterCriteria,
    sort_key: SortKey,
    /// Positions into `store`, in result order
    results: Vec<usize>,
}

impl PropertyEngine {
    pub fn new(store: PropertyStore, favorites: FavoritesStore) -> Self {
        let mut engine = Self {
            store,
            favorites,
            search_text: String::new(),
            criteria: FilterCriteria::default(),
            sort_key: SortKey::default(),
            results: Vec::new(),
        };
        engine.recompute();
        engine
    }

    pub fn with_sort_key(mut self, key: SortKey) -> Self {
        self.set_sort_key(key);
        self
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.recompute();
    }

    /// Merge `update` into the current criteria field by field
    pub fn set_filter_criteria(&mut self, update: FilterUpdate) {
        self.criteria.merge(update);
        self.recompute();
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.recompute();
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.recompute();
    }

    pub fn results(&self) -> Vec<&Listing> {
        self.results
            .iter()
            .filter_map(|&pos| self.store.get(pos))
            .collect()
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Toggle {
        self.favorites.toggle(id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn store(&self) -> &PropertyStore {
        &self.store
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoritesStore {
        &mut self.favorites
    }

    fn recompute(&mut self) {
        let all = self.store.all();
        let mut matched: Vec<usize> = (0..all.len())
            .filter(|&pos| matcher::matches_all(&all[pos], &self.search_text, &self.criteria))
            .collect();
        matched.sort_by(|&a, &b| sort::compare(&all[a], &all[b], self.sort_key));

        debug!(
            "Recomputed results: {} of {} (text={:?}, sort={})",
            matched.len(),
            all.len(),
            self.search_text,
            self.sort_key
        );
        self.results = matched;
    }
}
