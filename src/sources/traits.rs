use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for anything that can supply the listing catalog.
/// The catalog is read once at start-up; sources are never polled again.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Load every listing, in catalog order
    async fn load(&self) -> Result<Vec<Listing>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
