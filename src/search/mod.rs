//! Predicates and orderings evaluated over listings

pub mod category;
pub mod filter;
pub mod matcher;
pub mod sort;

pub use category::Category;
pub use filter::{FilterCriteria, FilterUpdate, TypeFilter};
pub use sort::SortKey;
