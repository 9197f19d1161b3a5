use crate::search::SortKey;
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "housing-finder";

/// Runtime settings for the finder
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Catalog JSON file. `None` uses the built-in sample catalog.
    pub catalog: Option<PathBuf>,
    /// Directory holding persisted blobs (favorites)
    pub data_dir: PathBuf,
    pub default_sort: SortKey,
    /// Maximum listings printed by a search
    pub result_limit: usize,
    /// How many similar listings to show on a details view
    pub similar_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            data_dir: default_data_dir(),
            default_sort: SortKey::Newest,
            result_limit: 50,
            similar_limit: 3,
        }
    }
}

/// Platform data directory, falling back to the working directory
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert!(config.catalog.is_none());
        assert_eq!(config.default_sort, SortKey::Newest);
        assert!(config.data_dir.ends_with(APP_DIR_NAME));
    }
}
