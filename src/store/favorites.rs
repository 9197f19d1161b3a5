use super::blob::BlobStore;
use crate::error::StorageError;
use tracing::{debug, warn};

/// Key the favorites blob is stored under
pub const FAVORITES_KEY: &str = "favorites";

/// Result of a single toggle
#[derive(Debug)]
#[must_use]
pub struct Toggle {
    /// Membership after the toggle
    pub is_favorite: bool,
    /// Outcome of writing the new set. The in-memory set has changed
    /// either way.
    pub persisted: Result<(), StorageError>,
}

/// Listing ids the user has marked, persisted as a JSON array of strings.
///
/// Ids are never checked against the catalog.
pub struct FavoritesStore {
    backend: Box<dyn BlobStore>,
    ids: Vec<String>,
    needs_persist: bool,
}

impl FavoritesStore {
    /// Load the saved set. Missing, unreadable or corrupt blobs give an
    /// empty set.
    pub fn load(backend: Box<dyn BlobStore>) -> Self {
        let ids = match backend.read(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => dedup(ids),
                Err(e) => {
                    warn!("Ignoring corrupt favorites blob: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read favorites, starting empty: {}", e);
                Vec::new()
            }
        };
        debug!("Loaded {} favorites", ids.len());

        Self {
            backend,
            ids,
            needs_persist: false,
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Remove `id` if present, otherwise append it, then write the whole set
    pub fn toggle(&mut self, id: &str) -> Toggle {
        let is_favorite = match self.ids.iter().position(|f| f == id) {
            Some(pos) => {
                self.ids.remove(pos);
                false
            }
            None => {
                self.ids.push(id.to_string());
                true
            }
        };
        debug!("Toggled favorite {} -> {}", id, is_favorite);

        let persisted = self.persist();
        Toggle {
            is_favorite,
            persisted,
        }
    }

    /// Snapshot of the set in the order ids were marked
    pub fn all(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True while the last write failed
    pub fn needs_persist(&self) -> bool {
        self.needs_persist
    }

    /// Write the current set again after a failed toggle
    pub fn retry_persist(&mut self) -> Result<(), StorageError> {
        self.persist()
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let result = serde_json::to_string(&self.ids)
            .map_err(StorageError::from)
            .and_then(|blob| self.backend.write(FAVORITES_KEY, &blob));
        match &result {
            Ok(()) => self.needs_persist = false,
            Err(e) => {
                warn!("Failed to persist favorites: {}", e);
                self.needs_persist = true;
            }
        }
        result
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("ids", &self.ids)
            .field("needs_persist", &self.needs_persist)
            .finish()
    }
}

fn dedup(ids: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
