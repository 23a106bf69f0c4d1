//! Search filter types.

use crate::catalog::{Category, Product};
use crate::search::PriceRange;
use serde::{Deserialize, Serialize};

/// A single product predicate.
///
/// Filters are independent of each other, so any set of them can be applied
/// in any order with the same surviving products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Case-insensitive substring of name or description.
    Text(String),
    /// Exact category match.
    Category(Category),
    /// Inclusive price bounds.
    PriceRange(PriceRange),
}

impl Filter {
    /// Create a text search filter.
    pub fn text(query: impl AsRef<str>) -> Self {
        Filter::Text(query.as_ref().to_lowercase())
    }

    /// Create a category filter.
    pub fn category(category: Category) -> Self {
        Filter::Category(category)
    }

    /// Create a price range filter.
    pub fn price_range(range: PriceRange) -> Self {
        Filter::PriceRange(range)
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(needle) => {
                let needle = needle.to_lowercase();
                needle.is_empty()
                    || product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            }
            Filter::Category(category) => product.category == *category,
            Filter::PriceRange(range) => range.contains(&product.price),
        }
    }
}

/// Keep the products that pass every filter, preserving input order.
pub fn apply_filters<'a, I>(products: I, filters: &[Filter]) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| filters.iter().all(|f| f.matches(p)))
        .collect()
}
