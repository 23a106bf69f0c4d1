//! Product catalog module.
//!
//! Contains products, categories, detail records, bundles and the
//! read-only store that holds them.

mod builtin;
mod bundle;
mod category;
pub mod collections;
mod detail;
mod product;
mod store;

pub use bundle::{Bundle, BundleItem};
pub use category::Category;
pub use detail::{NutritionFacts, ProductDetail, Review};
pub use product::{Badge, Product};
pub use store::CatalogStore;
