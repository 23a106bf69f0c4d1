//! Product detail records: long copy, nutrition, reviews and related products.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Nutrition facts per bottle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct NutritionFacts {
    pub calories: u32,
    /// Free-form amount with unit (e.g., "2g").
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    /// Vitamins and minerals, in label order.
    #[serde(default)]
    pub vitamins: Vec<String>,
}

/// A customer review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Display name of the reviewer.
    pub author: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
    /// Relative posting label (e.g., "2 months ago").
    pub posted: String,
}

impl Review {
    pub const MIN_RATING: u8 = 1;
    pub const MAX_RATING: u8 = 5;

    pub fn new(
        author: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
        posted: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            rating,
            comment: comment.into(),
            posted: posted.into(),
        }
    }

    /// Check the rating is within the star scale.
    pub fn has_valid_rating(&self) -> bool {
        (Self::MIN_RATING..=Self::MAX_RATING).contains(&self.rating)
    }
}

/// Extended information shown on a product's detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDetail {
    /// Product this detail belongs to.
    pub product_id: ProductId,
    pub long_description: String,
    /// Ingredient list as printed on the label.
    pub ingredients: String,
    pub nutrition: NutritionFacts,
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Products suggested alongside this one.
    #[serde(default)]
    pub related: Vec<ProductId>,
}

impl ProductDetail {
    /// Average star rating, rounded to one decimal. `None` without reviews.
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let total: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        let average = f64::from(total) / self.reviews.len() as f64;
        Some((average * 10.0).round() / 10.0)
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_with_ratings(ratings: &[u8]) -> ProductDetail {
        ProductDetail {
            product_id: ProductId::new(1),
            long_description: "Long".to_string(),
            ingredients: "Water".to_string(),
            nutrition: NutritionFacts::default(),
            reviews: ratings
                .iter()
                .map(|&r| Review::new("Someone", r, "Nice", "1 week ago"))
                .collect(),
            related: Vec::new(),
        }
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(detail_with_ratings(&[5, 4]).average_rating(), Some(4.5));
        assert_eq!(detail_with_ratings(&[5, 5, 4]).average_rating(), Some(4.7));
        assert_eq!(detail_with_ratings(&[]).average_rating(), None);
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Review::new("a", 1, "", "").has_valid_rating());
        assert!(Review::new("a", 5, "", "").has_valid_rating());
        assert!(!Review::new("a", 0, "", "").has_valid_rating());
        assert!(!Review::new("a", 6, "", "").has_valid_rating());
    }
}
