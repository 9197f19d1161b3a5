pub mod blob;
pub mod favorites;
pub mod properties;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use favorites::{FavoritesStore, Toggle, FAVORITES_KEY};
pub use properties::PropertyStore;
