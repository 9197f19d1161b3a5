use crate::error::CatalogError;
use crate::models::Listing;
use crate::sources::traits::ListingSource;
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Catalog stored as a JSON array of listings on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListingSource for JsonFileSource {
    async fn load(&self) -> Result<Vec<Listing>> {
        let path = self.path.display().to_string();
        debug!("Reading catalog from {}", path);

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Read {
                path: path.clone(),
                source,
            })?;
        let listings: Vec<Listing> = serde_json::from_str(&raw)
            .map_err(|source| CatalogError::Parse { path, source })?;

        debug!("Parsed {} listings ({} bytes)", listings.len(), raw.len());
        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "JSON file"
    }
}
