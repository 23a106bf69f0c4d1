//! Search module.
//!
//! Contains query criteria, filters, the query engine and category facets.

mod engine;
mod filter;
mod query;

pub use engine::{category_facets, collate, query, sort_products, FacetValue};
pub use filter::{apply_filters, Filter};
pub use query::{CategoryFilter, PriceRange, QueryCriteria, SortKey};
