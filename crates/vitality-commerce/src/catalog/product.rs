//! Product types.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A merchandising label shown on a product card (e.g., "Bestseller").
///
/// The text is passed through to the display layer unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Badge(String);

impl Badge {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this badge marks a new arrival.
    pub fn is_new(&self) -> bool {
        self.0 == "New"
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Short description for listings.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Category this product belongs to.
    pub category: Category,
    /// Optional merchandising badge.
    pub badge: Option<Badge>,
    /// Units sold, used to rank bestsellers.
    #[serde(default)]
    pub sales: u32,
}

impl Product {
    /// Create a new product without badge or sales history.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            category,
            badge: None,
            sales: 0,
        }
    }

    /// Set the badge.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(Badge::new(badge));
        self
    }

    /// Set the sales count.
    pub fn with_sales(mut self, sales: u32) -> Self {
        self.sales = sales;
        self
    }

    /// Check if the product carries the "New" badge.
    pub fn is_new(&self) -> bool {
        self.badge.as_ref().is_some_and(Badge::is_new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_creation() {
        let product = Product::new(
            1,
            "Green Vitality",
            "A refreshing blend of kale, spinach, apple, and ginger",
            Money::new(699, Currency::USD),
            Category::Greens,
        );
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price.amount_cents, 699);
        assert!(product.badge.is_none());
        assert_eq!(product.sales, 0);
    }

    #[test]
    fn test_product_badges() {
        let product = Product::new(2, "Berry Boost", "Berries", Money::default(), Category::Berries)
            .with_badge("New");
        assert!(product.is_new());
        assert_eq!(product.badge.as_ref().map(Badge::as_str), Some("New"));

        let product = product.with_badge("Bestseller");
        assert!(!product.is_new());
    }
}
