//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CommerceError;

/// A product category from the fixed catalog set.
///
/// Names are matched exactly and case-sensitively, the way they are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Greens,
    Berries,
    Tropical,
    Herbal,
    Citrus,
    Roots,
    Protein,
    Wellness,
    Energy,
    Hydration,
}

impl Category {
    /// Every category, in the order the catalog filter lists them.
    pub const ALL: [Category; 10] = [
        Category::Greens,
        Category::Berries,
        Category::Tropical,
        Category::Herbal,
        Category::Citrus,
        Category::Roots,
        Category::Protein,
        Category::Wellness,
        Category::Energy,
        Category::Hydration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Greens => "Greens",
            Category::Berries => "Berries",
            Category::Tropical => "Tropical",
            Category::Herbal => "Herbal",
            Category::Citrus => "Citrus",
            Category::Roots => "Roots",
            Category::Protein => "Protein",
            Category::Wellness => "Wellness",
            Category::Energy => "Energy",
            Category::Hydration => "Hydration",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CommerceError::InvalidCriteria(format!("unknown category {:?}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact() {
        assert_eq!("Greens".parse::<Category>().unwrap(), Category::Greens);
        assert_eq!("Hydration".parse::<Category>().unwrap(), Category::Hydration);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("greens".parse::<Category>().is_err());
        assert!("GREENS".parse::<Category>().is_err());
        assert!("All".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }
}
