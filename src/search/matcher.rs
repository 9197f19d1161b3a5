use super::filter::{self, contains_ignore_case, FilterCriteria};
use crate::models::Listing;

/// Free-text match over title and location. Empty text matches everything.
pub fn matches(listing: &Listing, text: &str) -> bool {
    contains_ignore_case(&listing.title, text) || contains_ignore_case(&listing.location, text)
}

/// Search text and structured criteria must both hold
pub fn matches_all(listing: &Listing, text: &str, criteria: &FilterCriteria) -> bool {
    matches(listing, text) && filter::matches(listing, criteria)
}
