//! The read-only product catalog.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::{Badge, Bundle, BundleItem, Category, Product, ProductDetail};
use crate::error::{CommerceError, Result};
use crate::ids::{BundleId, ProductId};
use crate::money::{Currency, Money};

/// Immutable catalog of products, detail records and bundles.
///
/// Every constructor validates eagerly, so a store that exists is well-formed:
/// ids are unique and positive, text fields are non-blank, prices are
/// non-negative and in the catalog currency, and every cross-reference
/// resolves.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    currency: Currency,
    products: Vec<Product>,
    details: HashMap<ProductId, ProductDetail>,
    bundles: Vec<Bundle>,
}

impl CatalogStore {
    /// Build a store from already-typed parts.
    pub fn from_parts(
        currency: Currency,
        products: Vec<Product>,
        details: Vec<ProductDetail>,
        bundles: Vec<Bundle>,
    ) -> Result<Self> {
        let mut by_product = HashMap::with_capacity(details.len());
        for detail in details {
            let id = detail.product_id;
            if by_product.insert(id, detail).is_some() {
                return Err(invalid(format!("duplicate detail record for product {}", id)));
            }
        }

        let store = Self {
            currency,
            products,
            details: by_product,
            bundles,
        };

        if let Err(e) = store.validate() {
            warn!(error = %e, "rejected catalog");
            return Err(e);
        }

        debug!(
            products = store.products.len(),
            details = store.details.len(),
            bundles = store.bundles.len(),
            currency = %store.currency,
            "catalog loaded"
        );
        Ok(store)
    }

    /// Build a store holding only products.
    pub fn from_products(currency: Currency, products: Vec<Product>) -> Result<Self> {
        Self::from_parts(currency, products, Vec::new(), Vec::new())
    }

    /// Parse a JSON catalog document.
    ///
    /// Prices are decimal amounts in the document's `currency` (USD when
    /// omitted). Missing required fields are rejected, never defaulted.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        file.into_store()
    }

    /// Every product, in declaration order. This is the "featured" order.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(CommerceError::ProductNotFound(id))
    }

    /// Extended detail for a product, if the catalog carries one.
    pub fn detail(&self, id: ProductId) -> Option<&ProductDetail> {
        self.details.get(&id)
    }

    /// Products related to `id`, in the order the detail record lists them.
    pub fn related(&self, id: ProductId) -> Vec<&Product> {
        self.detail(id)
            .map(|detail| {
                detail
                    .related
                    .iter()
                    .filter_map(|rid| self.get(*rid).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn bundles(&self) -> &[Bundle] {
        &self.bundles
    }

    /// Look up a bundle by id.
    pub fn bundle(&self, id: BundleId) -> Option<&Bundle> {
        self.bundles.iter().find(|b| b.id == id)
    }

    /// Currency every price in this catalog is expressed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.products.len());
        for product in &self.products {
            if !product.id.is_valid() {
                return Err(invalid(format!("product {:?} has id 0", product.name)));
            }
            if !seen.insert(product.id) {
                return Err(invalid(format!("duplicate product id {}", product.id)));
            }
            if product.name.trim().is_empty() {
                return Err(invalid(format!("product {} has an empty name", product.id)));
            }
            if product.description.trim().is_empty() {
                return Err(invalid(format!(
                    "product {} has an empty description",
                    product.id
                )));
            }
            self.check_price(&product.price, || format!("product {}", product.id))?;
        }

        for (id, detail) in &self.details {
            if !seen.contains(id) {
                return Err(invalid(format!("detail record for unknown product {}", id)));
            }
            for related in &detail.related {
                if related == id {
                    return Err(invalid(format!("product {} lists itself as related", id)));
                }
                if !seen.contains(related) {
                    return Err(invalid(format!(
                        "product {} references unknown related product {}",
                        id, related
                    )));
                }
            }
            if let Some(review) = detail.reviews.iter().find(|r| !r.has_valid_rating()) {
                return Err(invalid(format!(
                    "review by {:?} on product {} has rating {}",
                    review.author, id, review.rating
                )));
            }
        }

        let mut bundle_ids = HashSet::with_capacity(self.bundles.len());
        for bundle in &self.bundles {
            if !bundle.id.is_valid() || !bundle_ids.insert(bundle.id) {
                return Err(invalid(format!("bundle id {} is zero or duplicated", bundle.id)));
            }
            if bundle.name.trim().is_empty() {
                return Err(invalid(format!("bundle {} has an empty name", bundle.id)));
            }
            if bundle.description.trim().is_empty() {
                return Err(invalid(format!(
                    "bundle {} has an empty description",
                    bundle.id
                )));
            }
            self.check_price(&bundle.price, || format!("bundle {}", bundle.id))?;
            self.check_price(&bundle.original_price, || format!("bundle {}", bundle.id))?;
            if bundle.original_price.amount_cents < bundle.price.amount_cents {
                return Err(invalid(format!(
                    "bundle {} costs more than its items",
                    bundle.id
                )));
            }
            for item in &bundle.includes {
                if item.quantity == 0 {
                    return Err(invalid(format!("bundle {} includes zero bottles", bundle.id)));
                }
                if !self.products.iter().any(|p| p.name == item.product_name) {
                    return Err(invalid(format!(
                        "bundle {} includes unknown product {:?}",
                        bundle.id, item.product_name
                    )));
                }
            }
        }

        Ok(())
    }

    fn check_price(&self, price: &Money, owner: impl Fn() -> String) -> Result<()> {
        if price.is_negative() {
            return Err(invalid(format!("{} has a negative price", owner())));
        }
        if price.currency != self.currency {
            return Err(invalid(format!(
                "{} is priced in {}, catalog uses {}",
                owner(),
                price.currency,
                self.currency
            )));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> CommerceError {
    CommerceError::InvalidCatalog(reason)
}

/// On-disk catalog layout with decimal prices.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    currency: Currency,
    products: Vec<ProductRecord>,
    #[serde(default)]
    details: Vec<ProductDetail>,
    #[serde(default)]
    bundles: Vec<BundleRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    description: String,
    price: f64,
    category: Category,
    #[serde(default)]
    badge: Option<Badge>,
    #[serde(default)]
    sales: u32,
}

#[derive(Debug, Deserialize)]
struct BundleRecord {
    id: BundleId,
    name: String,
    description: String,
    price: f64,
    original_price: f64,
    #[serde(default)]
    badge: Option<Badge>,
    includes: Vec<BundleItem>,
}

impl CatalogFile {
    fn into_store(self) -> Result<CatalogStore> {
        let currency = self.currency;

        let products = self
            .products
            .into_iter()
            .map(|r| {
                Ok(Product {
                    id: r.id,
                    price: decimal_price(r.price, currency, || format!("product {}", r.id))?,
                    name: r.name,
                    description: r.description,
                    category: r.category,
                    badge: r.badge,
                    sales: r.sales,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let bundles = self
            .bundles
            .into_iter()
            .map(|r| {
                Ok(Bundle {
                    id: r.id,
                    price: decimal_price(r.price, currency, || format!("bundle {}", r.id))?,
                    original_price: decimal_price(r.original_price, currency, || {
                        format!("bundle {}", r.id)
                    })?,
                    name: r.name,
                    description: r.description,
                    badge: r.badge,
                    includes: r.includes,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        CatalogStore::from_parts(currency, products, self.details, bundles)
    }
}

fn decimal_price(amount: f64, currency: Currency, owner: impl Fn() -> String) -> Result<Money> {
    if !amount.is_finite() {
        return Err(invalid(format!("{} has a non-finite price", owner())));
    }
    Ok(Money::from_decimal(amount, currency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{NutritionFacts, Review};

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn two_products() -> Vec<Product> {
        vec![
            Product::new(1, "Green Vitality", "Kale and apple", usd(699), Category::Greens),
            Product::new(2, "Berry Boost", "Blueberries", usd(749), Category::Berries),
        ]
    }

    fn detail_for(id: u32, related: &[u32]) -> ProductDetail {
        ProductDetail {
            product_id: ProductId::new(id),
            long_description: "Long".to_string(),
            ingredients: "Water".to_string(),
            nutrition: NutritionFacts::default(),
            reviews: vec![Review::new("Sarah J.", 5, "Great", "2 months ago")],
            related: related.iter().copied().map(ProductId::new).collect(),
        }
    }

    #[test]
    fn test_list_all_preserves_order() {
        let store = CatalogStore::from_products(Currency::USD, two_products()).unwrap();
        let ids: Vec<u32> = store.list_all().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_and_not_found() {
        let store = CatalogStore::from_products(Currency::USD, two_products()).unwrap();
        assert_eq!(store.get(ProductId::new(2)).unwrap().name, "Berry Boost");
        assert_eq!(
            store.get(ProductId::new(9)).unwrap_err(),
            CommerceError::ProductNotFound(ProductId::new(9))
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut products = two_products();
        products[1].id = ProductId::new(1);
        let err = CatalogStore::from_products(Currency::USD, products).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCatalog(msg) if msg.contains("duplicate")));
    }

    #[test]
    fn test_zero_id_rejected() {
        let mut products = two_products();
        products[0].id = ProductId::new(0);
        assert!(CatalogStore::from_products(Currency::USD, products).is_err());
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut products = two_products();
        products[0].name = "   ".to_string();
        assert!(CatalogStore::from_products(Currency::USD, products).is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut products = two_products();
        products[0].price = usd(-1);
        assert!(CatalogStore::from_products(Currency::USD, products).is_err());
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut products = two_products();
        products[1].price = Money::new(749, Currency::EUR);
        let err = CatalogStore::from_products(Currency::USD, products).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCatalog(msg) if msg.contains("EUR")));
    }

    #[test]
    fn test_related_products() {
        let store = CatalogStore::from_parts(
            Currency::USD,
            two_products(),
            vec![detail_for(1, &[2])],
            Vec::new(),
        )
        .unwrap();
        let related: Vec<&str> = store
            .related(ProductId::new(1))
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(related, vec!["Berry Boost"]);
        assert!(store.related(ProductId::new(2)).is_empty());
    }

    #[test]
    fn test_dangling_related_rejected() {
        let result = CatalogStore::from_parts(
            Currency::USD,
            two_products(),
            vec![detail_for(1, &[7])],
            Vec::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_self_related_rejected() {
        let result = CatalogStore::from_parts(
            Currency::USD,
            two_products(),
            vec![detail_for(1, &[1])],
            Vec::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_review_rating_rejected() {
        let mut detail = detail_for(1, &[2]);
        detail.reviews.push(Review::new("Bot", 9, "", ""));
        let result =
            CatalogStore::from_parts(Currency::USD, two_products(), vec![detail], Vec::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "currency": "USD",
            "products": [
                {"id": 1, "name": "Green Vitality", "description": "Kale", "price": 6.99,
                 "category": "Greens", "badge": "Bestseller", "sales": 1250},
                {"id": 2, "name": "Berry Boost", "description": "Berries", "price": 7.49,
                 "category": "Berries"}
            ],
            "bundles": [
                {"id": 101, "name": "Starter", "description": "Intro", "price": 29.99,
                 "original_price": 35.94, "includes": [{"product_name": "Green Vitality", "quantity": 2}]}
            ]
        }"#;
        let store = CatalogStore::from_json(json).unwrap();
        assert_eq!(store.len(), 2);
        let first = store.get(ProductId::new(1)).unwrap();
        assert_eq!(first.price, usd(699));
        assert_eq!(first.badge.as_ref().map(Badge::as_str), Some("Bestseller"));
        assert_eq!(first.sales, 1250);
        assert!(store.get(ProductId::new(2)).unwrap().badge.is_none());
        assert_eq!(store.bundles()[0].original_price, usd(3594));
    }

    #[test]
    fn test_from_json_missing_field_fails_fast() {
        let json = r#"{"products": [{"id": 1, "description": "No name", "price": 1.0, "category": "Greens"}]}"#;
        let err = CatalogStore::from_json(json).unwrap_err();
        assert!(matches!(err, CommerceError::Serialization(_)));
    }

    #[test]
    fn test_from_json_unknown_category_fails_fast() {
        let json = r#"{"products": [{"id": 1, "name": "X", "description": "Y", "price": 1.0, "category": "greens"}]}"#;
        assert!(CatalogStore::from_json(json).is_err());
    }

    #[test]
    fn test_bundle_cheaper_than_items_required() {
        let json = r#"{
            "products": [{"id": 1, "name": "X", "description": "Y", "price": 1.0, "category": "Greens"}],
            "bundles": [{"id": 101, "name": "B", "description": "D", "price": 10.0,
                         "original_price": 5.0, "includes": []}]
        }"#;
        assert!(CatalogStore::from_json(json).is_err());
    }

    #[test]
    fn test_bundle_blank_description_rejected() {
        let json = r#"{
            "products": [{"id": 1, "name": "X", "description": "Y", "price": 1.0, "category": "Greens"}],
            "bundles": [{"id": 101, "name": "B", "description": "  ", "price": 1.0,
                         "original_price": 2.0, "includes": [{"product_name": "X", "quantity": 2}]}]
        }"#;
        let err = CatalogStore::from_json(json).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCatalog(msg) if msg.contains("description")));
    }

    #[test]
    fn test_bundle_unknown_product_rejected() {
        let json = r#"{
            "products": [{"id": 1, "name": "X", "description": "Y", "price": 1.0, "category": "Greens"}],
            "bundles": [{"id": 101, "name": "B", "description": "D", "price": 1.0,
                         "original_price": 2.0, "includes": [{"product_name": "Espresso Shot", "quantity": 1}]}]
        }"#;
        let err = CatalogStore::from_json(json).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidCatalog(msg) if msg.contains("Espresso Shot")));
    }
}
