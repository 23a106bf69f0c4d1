//! Presentation adapter: display-ready records for product cards and pages.

use serde::Serialize;

use crate::catalog::{Bundle, CatalogStore, NutritionFacts, Product, Review};
use crate::error::Result;
use crate::ids::{BundleId, ProductId};

/// Route for a product's detail page.
pub fn product_href(id: ProductId) -> String {
    format!("/products/{}", id)
}

/// A product card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewRecord {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Price with exactly two decimals (e.g., "6.99").
    pub price: String,
    /// Price with currency symbol (e.g., "$6.99").
    pub price_display: String,
    /// Badge text, unchanged.
    pub badge: Option<String>,
    /// Units sold.
    pub sales: u32,
    pub href: String,
}

impl From<&Product> for ViewRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.to_string(),
            price: product.price.display_amount(),
            price_display: product.price.display(),
            badge: product.badge.as_ref().map(|b| b.as_str().to_string()),
            sales: product.sales,
            href: product_href(product.id),
        }
    }
}

/// Map query results to view records, keeping their order.
pub fn present(results: &[&Product]) -> Vec<ViewRecord> {
    results.iter().map(|p| ViewRecord::from(*p)).collect()
}

/// Everything a product page shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub product: ViewRecord,
    pub long_description: Option<String>,
    pub ingredients: Option<String>,
    pub nutrition: Option<NutritionFacts>,
    pub reviews: Vec<Review>,
    /// Mean star rating, one decimal.
    pub average_rating: Option<f64>,
    pub related: Vec<ViewRecord>,
}

/// Assemble the detail page for `id`.
///
/// Products without a detail record still get a page with the card fields.
pub fn present_detail(store: &CatalogStore, id: ProductId) -> Result<DetailView> {
    let product = store.get(id)?;
    let detail = store.detail(id);

    Ok(DetailView {
        product: ViewRecord::from(product),
        long_description: detail.map(|d| d.long_description.clone()),
        ingredients: detail.map(|d| d.ingredients.clone()),
        nutrition: detail.map(|d| d.nutrition.clone()),
        reviews: detail.map(|d| d.reviews.clone()).unwrap_or_default(),
        average_rating: detail.and_then(|d| d.average_rating()),
        related: present(&store.related(id)),
    })
}

/// A bundle card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleView {
    pub id: BundleId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub price_display: String,
    pub original_price_display: String,
    pub savings_display: String,
    pub savings_percent: u32,
    pub badge: Option<String>,
    pub includes: Vec<String>,
}

impl From<&Bundle> for BundleView {
    fn from(bundle: &Bundle) -> Self {
        Self {
            id: bundle.id,
            name: bundle.name.clone(),
            description: bundle.description.clone(),
            price: bundle.price.display_amount(),
            price_display: bundle.price.display(),
            original_price_display: bundle.original_price.display(),
            savings_display: bundle.savings().display(),
            savings_percent: bundle.savings_percent(),
            badge: bundle.badge.as_ref().map(|b| b.as_str().to_string()),
            includes: bundle.includes.iter().map(|item| item.label()).collect(),
        }
    }
}

/// Map bundles to cards, keeping their order.
pub fn present_bundles(bundles: &[Bundle]) -> Vec<BundleView> {
    bundles.iter().map(BundleView::from).collect()
}
