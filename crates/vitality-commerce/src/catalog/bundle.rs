//! Multi-product bundles sold at a discount.

use crate::catalog::Badge;
use crate::ids::BundleId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One line of a bundle's contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BundleItem {
    /// Name of the included drink.
    pub product_name: String,
    /// Number of bottles.
    pub quantity: u32,
}

impl BundleItem {
    pub fn new(product_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
        }
    }

    /// Label as shown in the bundle card (e.g., "Berry Boost (2 bottles)").
    pub fn label(&self) -> String {
        let unit = if self.quantity == 1 { "bottle" } else { "bottles" };
        format!("{} ({} {})", self.product_name, self.quantity, unit)
    }
}

/// A bundle of drinks at a reduced price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bundle {
    pub id: BundleId,
    pub name: String,
    pub description: String,
    /// Bundle price.
    pub price: Money,
    /// Sum of the individual prices.
    pub original_price: Money,
    pub badge: Option<Badge>,
    pub includes: Vec<BundleItem>,
}

impl Bundle {
    /// Amount saved against buying the items individually.
    ///
    /// Zero if the prices are in different currencies.
    pub fn savings(&self) -> Money {
        self.original_price
            .try_subtract(&self.price)
            .unwrap_or_else(|| Money::zero(self.price.currency))
    }

    /// Savings as a whole percentage of the original price.
    pub fn savings_percent(&self) -> u32 {
        let original = self.original_price.amount_cents;
        let saved = self.savings().amount_cents;
        if original <= 0 || saved <= 0 {
            return 0;
        }
        ((saved as f64 / original as f64) * 100.0).round() as u32
    }

    /// Total bottles across all items.
    pub fn bottle_count(&self) -> u32 {
        self.includes.iter().map(|item| item.quantity).sum()
    }
}
