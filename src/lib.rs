//! Search, filter and favorites engine for a real-estate listing catalog

pub mod config;
pub mod engine;
pub mod error;
pub mod highlights;
pub mod models;
pub mod search;
pub mod sources;
pub mod store;

pub use config::AppConfig;
pub use engine::PropertyEngine;
pub use error::{CatalogError, ParseError, StorageError};
pub use models::{Listing, PropertyType};
pub use search::{Category, FilterCriteria, FilterUpdate, SortKey, TypeFilter};
pub use sources::{JsonFileSource, ListingSource, SampleCatalog};
pub use store::{BlobStore, FavoritesStore, FileBlobStore, MemoryBlobStore, PropertyStore};
