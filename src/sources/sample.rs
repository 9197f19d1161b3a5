use crate::error::CatalogError;
use crate::models::Listing;
use crate::sources::traits::ListingSource;
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

const SAMPLE_CATALOG: &str = include_str!("sample_catalog.json");

/// Built-in demo catalog, used when no catalog file is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl SampleCatalog {
    pub fn listings() -> Result<Vec<Listing>, CatalogError> {
        serde_json::from_str(SAMPLE_CATALOG).map_err(|source| CatalogError::Parse {
            path: "sample_catalog.json".to_string(),
            source,
        })
    }
}

#[async_trait]
impl ListingSource for SampleCatalog {
    async fn load(&self) -> Result<Vec<Listing>> {
        info!("📋 Using the built-in sample catalog");
        Ok(Self::listings()?)
    }

    fn source_name(&self) -> &'static str {
        "sample catalog"
    }
}
