use super::filter::TypeFilter;
use crate::models::{Listing, PropertyType};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Browsing bucket: every listing, or a single property type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    All,
    Type(PropertyType),
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Type(t) => t.as_str(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Count per property type plus the synthetic `all` bucket.
/// Types with no listings are present with a zero count.
pub fn count_by_type<'a, I>(listings: I) -> BTreeMap<Category, usize>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut counts: BTreeMap<Category, usize> = PropertyType::ALL
        .into_iter()
        .map(|t| (Category::Type(t), 0))
        .collect();
    let mut total = 0;
    for listing in listings {
        *counts.entry(Category::Type(listing.property_type)).or_default() += 1;
        total += 1;
    }
    counts.insert(Category::All, total);
    counts
}

/// `"all"` or an empty name returns the input unchanged; an unknown name
/// matches nothing, same as an invalid type in filter criteria.
pub fn filter_by_type<'a, I>(listings: I, category: &str) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    if category.is_empty() || category == Category::All.as_str() {
        return listings.into_iter().collect();
    }
    let filter = TypeFilter::parse(category);
    listings
        .into_iter()
        .filter(|listing| filter.matches(listing.property_type))
        .collect()
}
