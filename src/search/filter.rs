use crate::models::{Listing, PropertyType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Type constraint as supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum TypeFilter {
    #[default]
    Any,
    Only(PropertyType),
    /// A name outside the closed set of property types. Matches nothing.
    Invalid(String),
}

impl TypeFilter {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return TypeFilter::Any;
        }
        match raw.parse::<PropertyType>() {
            Ok(t) => TypeFilter::Only(t),
            Err(_) => TypeFilter::Invalid(raw.to_string()),
        }
    }

    pub fn matches(&self, property_type: PropertyType) -> bool {
        match self {
            TypeFilter::Any => true,
            TypeFilter::Only(t) => *t == property_type,
            TypeFilter::Invalid(_) => false,
        }
    }
}

impl From<String> for TypeFilter {
    fn from(raw: String) -> Self {
        TypeFilter::parse(&raw)
    }
}

impl From<TypeFilter> for String {
    fn from(filter: TypeFilter) -> Self {
        match filter {
            TypeFilter::Any => String::new(),
            TypeFilter::Only(t) => t.as_str().to_string(),
            TypeFilter::Invalid(raw) => raw,
        }
    }
}

impl From<PropertyType> for TypeFilter {
    fn from(t: PropertyType) -> Self {
        TypeFilter::Only(t)
    }
}

/// Structured constraints applied to listings.
///
/// `FilterCriteria::default()` is the single "no filter" value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    #[serde(rename = "type")]
    pub property_type: TypeFilter,
    /// Inclusive lower bound
    pub min_price: u64,
    /// Inclusive upper bound
    pub max_price: u64,
    /// Case-insensitive substring of the listing location
    pub location: String,
    pub min_bedrooms: u32,
    pub min_bathrooms: u32,
    /// Tags that must all be present on the listing
    pub amenities: BTreeSet<String>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            property_type: TypeFilter::Any,
            min_price: 0,
            max_price: u64::MAX,
            location: String::new(),
            min_bedrooms: 0,
            min_bathrooms: 0,
            amenities: BTreeSet::new(),
        }
    }
}

/// Partial criteria; `None` fields leave the current value untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterUpdate {
    #[serde(rename = "type")]
    pub property_type: Option<TypeFilter>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub location: Option<String>,
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
    pub amenities: Option<BTreeSet<String>>,
}

impl FilterCriteria {
    pub fn is_unconstrained(&self) -> bool {
        *self == FilterCriteria::default()
    }

    /// Field-by-field merge of a partial update
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(t) = update.property_type {
            self.property_type = t;
        }
        if let Some(min) = update.min_price {
            self.min_price = min;
        }
        if let Some(max) = update.max_price {
            self.max_price = max;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(beds) = update.min_bedrooms {
            self.min_bedrooms = beds;
        }
        if let Some(baths) = update.min_bathrooms {
            self.min_bathrooms = baths;
        }
        if let Some(amenities) = update.amenities {
            self.amenities = amenities;
        }
    }

    pub fn merged(mut self, update: FilterUpdate) -> Self {
        self.merge(update);
        self
    }
}

/// True iff `listing` satisfies every constraint in `criteria`
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    criteria.property_type.matches(listing.property_type)
        && listing.price >= criteria.min_price
        && listing.price <= criteria.max_price
        && contains_ignore_case(&listing.location, &criteria.location)
        && listing.bedrooms >= criteria.min_bedrooms
        && listing.bathrooms >= criteria.min_bathrooms
        && criteria.amenities.iter().all(|tag| listing.has_amenity(tag))
}

/// Stable filter: survivors keep their input order
pub fn apply<'a, I>(listings: I, criteria: &FilterCriteria) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    listings
        .into_iter()
        .filter(|listing| matches(listing, criteria))
        .collect()
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
