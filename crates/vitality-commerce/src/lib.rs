//! Catalog and storefront logic for Vitality Drinks.
//!
//! This crate provides the pieces behind the product listing and product pages:
//!
//! - **Catalog**: Products, categories, detail records, bundles and curated collections
//! - **Search**: Query criteria, filters, sorting and category facets
//! - **Present**: Display-ready card and page records
//! - **Submission**: Newsletter and contact form handling
//!
//! # Example
//!
//! ```rust
//! use vitality_commerce::prelude::*;
//!
//! let store = CatalogStore::builtin().unwrap();
//!
//! let criteria = QueryCriteria::new()
//!     .with_category(Category::Berries)
//!     .with_sort(SortKey::PriceLow);
//! let results = store.query(&criteria).unwrap();
//!
//! let cards = present(&results);
//! assert_eq!(cards[0].name, "Berry Boost");
//! assert_eq!(cards[0].price_display, "$7.49");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod present;
pub mod search;
pub mod submission;

pub use error::{CommerceError, Result};
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CommerceError, Result};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Badge, Bundle, BundleItem, CatalogStore, Category, NutritionFacts, Product,
        ProductDetail, Review,
    };

    // Search
    pub use crate::search::{
        CategoryFilter, FacetValue, Filter, PriceRange, QueryCriteria, SortKey,
    };

    // Presentation
    pub use crate::present::{present, present_detail, BundleView, DetailView, ViewRecord};

    // Submission
    pub use crate::submission::{
        ContactMessage, ContactSubject, NewsletterSignup, SimulatedSubmissionService,
        SubmissionReceipt, SubmissionService,
    };
}
