use clap::{Args, Parser, Subcommand};
use housing_finder::{AppConfig, FilterCriteria, FilterUpdate, SortKey, TypeFilter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "housing-finder", version, about = "Search and shortlist property listings")]
pub struct Cli {
    /// Catalog JSON file (defaults to the built-in sample catalog)
    #[arg(long, global = true, env = "HOUSING_FINDER_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Directory where favorites are stored
    #[arg(long, global = true, env = "HOUSING_FINDER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Sort order used when a search gives no --sort
    #[arg(long, global = true, env = "HOUSING_FINDER_SORT")]
    pub default_sort: Option<SortKey>,

    /// How many similar listings `show` prints
    #[arg(long, global = true, env = "HOUSING_FINDER_SIMILAR_LIMIT")]
    pub similar_limit: Option<usize>,

    /// Output machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search and filter the catalog
    Search(SearchArgs),
    /// Show one listing with similar listings
    Show { id: String },
    /// Listing counts per category
    Categories,
    /// Browse one category ("all" for every type) with its featured picks
    Category {
        name: String,
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, default_value_t = 3)]
        featured: usize,
    },
    /// Featured listings
    Featured {
        #[arg(long, default_value_t = 3)]
        limit: usize,
    },
    /// Most recently added listings
    Recent {
        #[arg(long, default_value_t = 3)]
        limit: usize,
    },
    /// Mark or unmark a listing as favorite
    Favorite { id: String },
    /// List favorites with summary statistics
    Favorites,
}

/// Structured filter flags shared by `search` and `category`
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    #[arg(long)]
    pub min_price: Option<u64>,

    #[arg(long)]
    pub max_price: Option<u64>,

    /// Case-insensitive location substring
    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub min_bedrooms: Option<u32>,

    #[arg(long)]
    pub min_bathrooms: Option<u32>,

    /// Required amenity; repeat for several
    #[arg(long = "amenity")]
    pub amenities: Vec<String>,
}

impl FilterArgs {
    /// Partial update with no type constraint
    pub fn filter_update(&self) -> FilterUpdate {
        FilterUpdate {
            property_type: None,
            min_price: self.min_price,
            max_price: self.max_price,
            location: self.location.clone(),
            min_bedrooms: self.min_bedrooms,
            min_bathrooms: self.min_bathrooms,
            amenities: if self.amenities.is_empty() {
                None
            } else {
                Some(self.amenities.iter().cloned().collect())
            },
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::default().merged(self.filter_update())
    }
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Free text matched against title and location
    pub text: Option<String>,

    /// Property type (house, apartment, commercial, cabin, condominium, bungalow)
    #[arg(long = "type")]
    pub property_type: Option<String>,

    #[command(flatten)]
    pub filters: FilterArgs,

    /// newest, price-ascending, price-descending or most-viewed
    #[arg(long)]
    pub sort: Option<SortKey>,

    #[arg(long)]
    pub limit: Option<usize>,
}

impl SearchArgs {
    pub fn filter_update(&self) -> FilterUpdate {
        FilterUpdate {
            property_type: self.property_type.as_deref().map(TypeFilter::parse),
            ..self.filters.filter_update()
        }
    }
}

impl Cli {
    pub fn config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        if let Some(catalog) = &self.catalog {
            config.catalog = Some(catalog.clone());
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(key) = self.default_sort {
            config.default_sort = key;
        }
        if let Some(limit) = self.similar_limit {
            config.similar_limit = limit;
        }
        config
    }
}
