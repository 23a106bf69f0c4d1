//! The catalog query engine.
//!
//! `query` is a pure function of the product slice and the criteria: it
//! validates, filters (text, category, price; conjunctive) and then sorts
//! with a stable sort so that ties always keep catalog order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::{CatalogStore, Category, Product};
use crate::error::Result;
use crate::search::{apply_filters, Filter, QueryCriteria, SortKey};

/// Run a query against `products`.
///
/// Returns borrowed products in the order dictated by `criteria.sort`. An
/// empty result is `Ok(vec![])`. Fails with
/// [`CommerceError::InvalidCriteria`](crate::CommerceError::InvalidCriteria)
/// when the price range is inverted or negative.
pub fn query<'a>(products: &'a [Product], criteria: &QueryCriteria) -> Result<Vec<&'a Product>> {
    criteria.validate()?;

    let filters = criteria.filters();
    let mut results = apply_filters(products, &filters);
    sort_products(&mut results, criteria.sort);

    debug!(
        search = %criteria.search_text,
        category = %criteria.category,
        price_range = %criteria.price_range,
        sort = %criteria.sort,
        scanned = products.len(),
        matched = results.len(),
        "catalog query"
    );
    Ok(results)
}

/// Sort in place. Stable for every key.
pub fn sort_products(products: &mut [&Product], sort: SortKey) {
    match sort {
        SortKey::Featured => {}
        SortKey::PriceLow => products.sort_by_key(|p| p.price.amount_cents),
        SortKey::PriceHigh => products.sort_by(|a, b| b.price.amount_cents.cmp(&a.price.amount_cents)),
        SortKey::Name => products.sort_by(|a, b| collate(&a.name, &b.name)),
    }
}

/// Locale-style name comparison.
///
/// Three levels, each consulted only when the previous one ties:
/// base letters with accents and case folded away, then accents (unaccented
/// first), then case (lowercase first at the first differing position).
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| {
            a.nfd()
                .map(char::is_uppercase)
                .cmp(b.nfd().map(char::is_uppercase))
        })
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Product count for one category option in the filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetValue {
    pub category: Category,
    /// Products in this category passing the text and price filters.
    pub count: usize,
    /// Whether this category is the current selection.
    pub selected: bool,
}

/// Category facet counts for the current criteria.
///
/// The category criterion itself is ignored when counting so every option
/// shows how many products selecting it would yield. Only categories that
/// occur in `products` are listed, in [`Category::ALL`] order.
pub fn category_facets(products: &[Product], criteria: &QueryCriteria) -> Result<Vec<FacetValue>> {
    criteria.validate()?;

    let filters: Vec<Filter> = criteria
        .filters()
        .into_iter()
        .filter(|f| !matches!(f, Filter::Category(_)))
        .collect();
    let survivors = apply_filters(products, &filters);

    let facets: Vec<FacetValue> = Category::ALL
        .into_iter()
        .filter(|c| products.iter().any(|p| p.category == *c))
        .map(|category| FacetValue {
            category,
            count: survivors.iter().filter(|p| p.category == category).count(),
            selected: criteria.category.is_selected(category),
        })
        .collect();

    debug!(facets = facets.len(), matched = survivors.len(), "category facets");
    Ok(facets)
}

impl CatalogStore {
    /// Run a query against every product in the store.
    pub fn query(&self, criteria: &QueryCriteria) -> Result<Vec<&Product>> {
        query(self.list_all(), criteria)
    }

    /// Category facets over every product in the store.
    pub fn category_facets(&self, criteria: &QueryCriteria) -> Result<Vec<FacetValue>> {
        category_facets(self.list_all(), criteria)
    }
}
