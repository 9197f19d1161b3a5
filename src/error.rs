use thiserror::Error;

/// Failure to build a property catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Duplicate listing id: {0}")]
    DuplicateId(String),
    #[error("Listing {id} has non-positive area {area}")]
    InvalidArea { id: String, area: f64 },
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure to read or write a persisted blob
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
    #[error("Storage I/O error for key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Unrecognised name for one of the closed enumerations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown property type: {0}")]
    PropertyType(String),
    #[error("Unknown sort key: {0}")]
    SortKey(String),
}
