use crate::error::ParseError;
use crate::models::Listing;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to a result set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Most recently created first
    #[default]
    Newest,
    #[serde(alias = "price-low")]
    PriceAscending,
    #[serde(alias = "price-high")]
    PriceDescending,
    #[serde(alias = "views")]
    MostViewed,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Newest,
        SortKey::PriceAscending,
        SortKey::PriceDescending,
        SortKey::MostViewed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceAscending => "price-ascending",
            SortKey::PriceDescending => "price-descending",
            SortKey::MostViewed => "most-viewed",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "price-ascending" | "price-low" => Ok(SortKey::PriceAscending),
            "price-descending" | "price-high" => Ok(SortKey::PriceDescending),
            "most-viewed" | "views" => Ok(SortKey::MostViewed),
            other => Err(ParseError::SortKey(other.to_string())),
        }
    }
}

/// Primary-key comparison for `key`; equal keys compare `Equal`
pub fn compare(a: &Listing, b: &Listing, key: SortKey) -> Ordering {
    match key {
        SortKey::Newest => b.created_at.cmp(&a.created_at),
        SortKey::PriceAscending => a.price.cmp(&b.price),
        SortKey::PriceDescending => b.price.cmp(&a.price),
        SortKey::MostViewed => b.views.cmp(&a.views),
    }
}

/// Stable in-place sort; equal keys keep their relative order
pub fn sort_in_place(listings: &mut [&Listing], key: SortKey) {
    listings.sort_by(|a, b| compare(a, b, key));
}

pub fn sort<'a>(mut listings: Vec<&'a Listing>, key: SortKey) -> Vec<&'a Listing> {
    sort_in_place(&mut listings, key);
    listings
}
