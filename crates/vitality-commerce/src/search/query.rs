//! Query criteria: what the shopper typed, ticked and selected.

use std::fmt;
use std::str::FromStr;

use crate::catalog::Category;
use crate::error::{CommerceError, Result};
use crate::money::Money;
use crate::search::Filter;
use serde::{Deserialize, Serialize};

/// Sort options for query results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog declaration order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// Sort by name A-Z.
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Name,
    ];

    /// Wire value (e.g., "price-low").
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Name => "name",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Name => "Name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CommerceError::InvalidCriteria(format!("unknown sort key {:?}", s)))
    }
}

/// Category selection: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Check whether `category` is the selected one.
    pub fn is_selected(&self, category: Category) -> bool {
        matches!(self, CategoryFilter::Only(c) if *c == category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "All" {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Inclusive price bounds in cents.
///
/// Construction does not check the bounds; [`PriceRange::validate`] does, and
/// the query engine calls it before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PriceRange {
    pub min_cents: i64,
    pub max_cents: i64,
}

impl PriceRange {
    pub fn new(min_cents: i64, max_cents: i64) -> Self {
        Self {
            min_cents,
            max_cents,
        }
    }

    /// Build from decimal amounts.
    ///
    /// `min` rounds up and `max` rounds down to whole cents, so a price
    /// passes the cent range exactly when it passes the decimal one.
    /// Non-finite or negative bounds are rejected. Order is left to
    /// [`PriceRange::validate`].
    pub fn from_decimal(min: f64, max: f64) -> Result<Self> {
        for bound in [min, max] {
            if !bound.is_finite() {
                return Err(CommerceError::InvalidCriteria(format!(
                    "price bound {} is not a number",
                    bound
                )));
            }
            if bound < 0.0 {
                return Err(CommerceError::InvalidCriteria(format!(
                    "price bound {} is negative",
                    bound
                )));
            }
        }
        Ok(Self::new(bound_cents(min, f64::ceil), bound_cents(max, f64::floor)))
    }

    /// Check `min <= price <= max`.
    pub fn contains(&self, price: &Money) -> bool {
        self.min_cents <= price.amount_cents && price.amount_cents <= self.max_cents
    }

    /// Reject negative bounds and `min > max`.
    pub fn validate(&self) -> Result<()> {
        if self.min_cents < 0 || self.max_cents < 0 {
            return Err(CommerceError::InvalidCriteria(format!(
                "price range {} has a negative bound",
                self
            )));
        }
        if self.min_cents > self.max_cents {
            return Err(CommerceError::InvalidCriteria(format!(
                "price range {} has min above max",
                self
            )));
        }
        Ok(())
    }
}

/// Scale to cents, snapping values within float noise of a whole cent.
fn bound_cents(amount: f64, round: fn(f64) -> f64) -> i64 {
    let scaled = amount * 100.0;
    let nearest = scaled.round();
    if (scaled - nearest).abs() < 1e-6 {
        nearest as i64
    } else {
        round(scaled) as i64
    }
}

impl Default for PriceRange {
    /// The storefront slider's initial position, 0.00 to 10.00.
    fn default() -> Self {
        Self::new(0, 1000)
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt_cents = |cents: i64| {
            let sign = if cents < 0 { "-" } else { "" };
            let abs = cents.unsigned_abs();
            format!("{}{}.{:02}", sign, abs / 100, abs % 100)
        };
        write!(f, "[{}, {}]", fmt_cents(self.min_cents), fmt_cents(self.max_cents))
    }
}

/// A catalog query, built fresh for every interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QueryCriteria {
    /// Free text matched against name and description.
    pub search_text: String,
    pub category: CategoryFilter,
    pub price_range: PriceRange,
    pub sort: SortKey,
}

impl QueryCriteria {
    /// Criteria matching the storefront's initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Set the category selection.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.price_range.validate()
    }

    /// The active filters, one per criterion that can exclude products.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::with_capacity(3);
        if !self.search_text.is_empty() {
            filters.push(Filter::text(&self.search_text));
        }
        if let CategoryFilter::Only(category) = self.category {
            filters.push(Filter::category(category));
        }
        filters.push(Filter::price_range(self.price_range));
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("featured".parse::<SortKey>().unwrap(), SortKey::Featured);
        assert_eq!("price-low".parse::<SortKey>().unwrap(), SortKey::PriceLow);
        assert_eq!("price-high".parse::<SortKey>().unwrap(), SortKey::PriceHigh);
        assert_eq!("name".parse::<SortKey>().unwrap(), SortKey::Name);
        assert!("relevance".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_sort_key_serde_matches_wire_value() {
        for key in SortKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Berries".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Berries)
        );
        assert!("all".parse::<CategoryFilter>().is_err());
        assert!(CategoryFilter::Only(Category::Roots).is_selected(Category::Roots));
        assert!(!CategoryFilter::All.is_selected(Category::Roots));
    }

    #[test]
    fn test_price_range_validation() {
        assert!(PriceRange::new(0, 1000).validate().is_ok());
        assert!(PriceRange::new(500, 500).validate().is_ok());
        assert!(matches!(
            PriceRange::new(1000, 500).validate(),
            Err(CommerceError::InvalidCriteria(_))
        ));
        assert!(PriceRange::new(-1, 500).validate().is_err());
    }

    #[test]
    fn test_price_range_from_decimal() {
        assert_eq!(PriceRange::from_decimal(0.0, 10.0).unwrap(), PriceRange::new(0, 1000));
        assert_eq!(PriceRange::from_decimal(6.99, 7.49).unwrap(), PriceRange::new(699, 749));
        assert_eq!(PriceRange::from_decimal(0.29, 0.57).unwrap(), PriceRange::new(29, 57));
        assert_eq!(PriceRange::new(50, 1000).to_string(), "[0.50, 10.00]");
    }

    #[test]
    fn test_from_decimal_keeps_bounds_inclusive() {
        let range = PriceRange::from_decimal(6.994, 7.496).unwrap();
        assert_eq!(range, PriceRange::new(700, 749));

        let usd = |cents| Money::new(cents, crate::money::Currency::USD);
        assert!(!range.contains(&usd(699)));
        assert!(range.contains(&usd(749)));
    }

    #[test]
    fn test_from_decimal_rejects_bad_bounds() {
        for (min, max) in [(-0.004, 10.0), (-1.0, 10.0), (f64::NAN, 10.0), (0.0, f64::INFINITY)] {
            assert!(matches!(
                PriceRange::from_decimal(min, max),
                Err(CommerceError::InvalidCriteria(_))
            ));
        }
        // Inverted bounds convert; validation rejects them.
        let inverted = PriceRange::from_decimal(10.0, 5.0).unwrap();
        assert!(inverted.validate().is_err());
    }

    #[test]
    fn test_default_criteria() {
        let criteria = QueryCriteria::new();
        assert_eq!(criteria.search_text, "");
        assert_eq!(criteria.category, CategoryFilter::All);
        assert_eq!(criteria.price_range, PriceRange::new(0, 1000));
        assert_eq!(criteria.sort, SortKey::Featured);
        assert_eq!(criteria.filters().len(), 1);
    }

    #[test]
    fn test_criteria_builder_filters() {
        let criteria = QueryCriteria::new()
            .with_search("Berry")
            .with_category(Category::Berries)
            .with_price_range(PriceRange::new(0, 800))
            .with_sort(SortKey::Name);

        assert_eq!(
            criteria.filters(),
            vec![
                Filter::Text("berry".to_string()),
                Filter::Category(Category::Berries),
                Filter::PriceRange(PriceRange::new(0, 800)),
            ]
        );
    }
}
