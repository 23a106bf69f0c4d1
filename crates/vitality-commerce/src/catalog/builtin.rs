//! The Vitality Drinks house catalog.

use crate::catalog::{
    Badge, Bundle, BundleItem, CatalogStore, Category, NutritionFacts, Product, ProductDetail,
    Review,
};
use crate::error::Result;
use crate::ids::{BundleId, ProductId};
use crate::money::{Currency, Money};

const CURRENCY: Currency = Currency::USD;

impl CatalogStore {
    /// The built-in catalog: eleven drinks, detail pages for the first four,
    /// and four bundles.
    pub fn builtin() -> Result<Self> {
        Self::from_parts(CURRENCY, products(), details(), bundles())
    }
}

fn usd(cents: i64) -> Money {
    Money::new(cents, CURRENCY)
}

fn products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Green Vitality",
            "A refreshing blend of kale, spinach, apple, and ginger",
            usd(699),
            Category::Greens,
        )
        .with_badge("Bestseller")
        .with_sales(1250),
        Product::new(
            2,
            "Berry Boost",
            "Antioxidant-rich mix of blueberries, strawberries, and acai",
            usd(749),
            Category::Berries,
        )
        .with_badge("New")
        .with_sales(875),
        Product::new(
            3,
            "Tropical Cleanse",
            "Detoxifying blend of pineapple, mango, and coconut water",
            usd(699),
            Category::Tropical,
        ),
        Product::new(
            4,
            "Zen Balance",
            "Calming infusion of chamomile, lavender, and lemon balm",
            usd(599),
            Category::Herbal,
        ),
        Product::new(
            5,
            "Citrus Refresh",
            "Energizing blend of orange, lemon, and grapefruit",
            usd(649),
            Category::Citrus,
        )
        .with_sales(680),
        Product::new(
            6,
            "Root Revival",
            "Earthy blend of beetroot, carrot, and ginger",
            usd(799),
            Category::Roots,
        )
        .with_badge("Popular")
        .with_sales(980),
        Product::new(
            7,
            "Protein Power",
            "Plant-based protein with banana, almond milk, and cacao",
            usd(849),
            Category::Protein,
        )
        .with_sales(750),
        Product::new(
            8,
            "Immunity Boost",
            "Immune-supporting blend with turmeric, ginger, and orange",
            usd(799),
            Category::Wellness,
        )
        .with_sales(820),
        Product::new(
            9,
            "Matcha Energy",
            "Premium matcha green tea with a hint of mint",
            usd(899),
            Category::Energy,
        )
        .with_badge("New"),
        Product::new(
            10,
            "Cucumber Calm",
            "Refreshing cucumber, lime, and mint infusion",
            usd(649),
            Category::Hydration,
        )
        .with_badge("New"),
        Product::new(
            11,
            "Golden Turmeric",
            "Anti-inflammatory blend with turmeric, ginger, and black pepper",
            usd(799),
            Category::Wellness,
        )
        .with_badge("New"),
    ]
}

fn nutrition(calories: u32, protein: &str, carbs: &str, fat: &str, vitamins: &[&str]) -> NutritionFacts {
    NutritionFacts {
        calories,
        protein: protein.to_string(),
        carbs: carbs.to_string(),
        fat: fat.to_string(),
        vitamins: vitamins.iter().map(|v| v.to_string()).collect(),
    }
}

fn related(ids: &[u32]) -> Vec<ProductId> {
    ids.iter().copied().map(ProductId::new).collect()
}

fn details() -> Vec<ProductDetail> {
    vec![
        ProductDetail {
            product_id: ProductId::new(1),
            long_description: "Our Green Vitality drink is a perfect balance of leafy greens and \
                sweet apple, with a kick of ginger to boost your immune system. Each bottle \
                contains over 5 servings of vegetables, making it an easy way to get your daily \
                greens."
                .to_string(),
            ingredients: "Filtered Water, Organic Kale, Organic Spinach, Organic Apple, Organic \
                Ginger, Organic Lemon, Organic Mint"
                .to_string(),
            nutrition: nutrition(
                120,
                "2g",
                "25g",
                "0.5g",
                &["Vitamin A", "Vitamin C", "Vitamin K", "Potassium", "Iron"],
            ),
            reviews: vec![
                Review::new(
                    "Sarah J.",
                    5,
                    "This is my go-to morning drink. Gives me energy without the crash!",
                    "2 months ago",
                ),
                Review::new(
                    "Michael T.",
                    4,
                    "Great taste and I feel healthier already. Would recommend!",
                    "1 month ago",
                ),
            ],
            related: related(&[2, 3]),
        },
        ProductDetail {
            product_id: ProductId::new(2),
            long_description: "Our Berry Boost is packed with antioxidants from a variety of \
                berries to support your immune system and overall health. The natural sweetness \
                makes it a delicious treat without added sugars."
                .to_string(),
            ingredients: "Filtered Water, Organic Blueberries, Organic Strawberries, Organic Acai, \
                Organic Lemon Juice"
                .to_string(),
            nutrition: nutrition(
                140,
                "1g",
                "30g",
                "0g",
                &["Vitamin C", "Vitamin K", "Manganese", "Folate"],
            ),
            reviews: vec![Review::new(
                "Emily R.",
                5,
                "The flavor is amazing! I drink this after my workouts.",
                "3 weeks ago",
            )],
            related: related(&[1, 3]),
        },
        ProductDetail {
            product_id: ProductId::new(3),
            long_description: "Escape to the tropics with our Tropical Cleanse. This refreshing \
                blend combines the natural detoxifying properties of pineapple enzymes with \
                hydrating coconut water and sweet mango."
                .to_string(),
            ingredients: "Organic Coconut Water, Organic Pineapple, Organic Mango, Organic Lime \
                Juice"
                .to_string(),
            nutrition: nutrition(
                150,
                "1g",
                "35g",
                "0g",
                &["Vitamin C", "Vitamin B6", "Potassium", "Magnesium"],
            ),
            reviews: vec![Review::new(
                "Jason K.",
                4,
                "So refreshing on a hot day! Great alternative to sugary drinks.",
                "1 month ago",
            )],
            related: related(&[1, 2]),
        },
        ProductDetail {
            product_id: ProductId::new(4),
            long_description: "Our Zen Balance blend is carefully crafted to help you find your \
                center and maintain calm throughout your day. This soothing combination of \
                traditional herbs known for their relaxing properties creates a moment of \
                tranquility in every sip."
                .to_string(),
            ingredients: "Filtered Water, Organic Chamomile Flowers, Organic Lavender Buds, \
                Organic Lemon Balm, Organic Passionflower, Organic Honey, Organic Lemon Juice"
                .to_string(),
            nutrition: nutrition(
                80,
                "0g",
                "18g",
                "0g",
                &["Magnesium", "Calcium", "Vitamin B6", "Potassium", "Antioxidants"],
            ),
            reviews: vec![
                Review::new(
                    "Emily R.",
                    5,
                    "This is my evening ritual now. Helps me unwind and prepare for a peaceful \
                     night's sleep.",
                    "2 weeks ago",
                ),
                Review::new(
                    "James K.",
                    5,
                    "Perfect for meditation sessions. The blend of herbs is so well balanced.",
                    "1 month ago",
                ),
                Review::new(
                    "Maria S.",
                    4,
                    "Love having this during my workday. Keeps me calm but alert.",
                    "1 month ago",
                ),
            ],
            related: related(&[1, 2, 3]),
        },
    ]
}

fn bundle(
    id: u32,
    name: &str,
    description: &str,
    price: i64,
    original_price: i64,
    badge: &str,
    includes: &[(&str, u32)],
) -> Bundle {
    Bundle {
        id: BundleId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: usd(price),
        original_price: usd(original_price),
        badge: Some(Badge::new(badge)),
        includes: includes
            .iter()
            .map(|(name, qty)| BundleItem::new(*name, *qty))
            .collect(),
    }
}

fn bundles() -> Vec<Bundle> {
    vec![
        bundle(
            101,
            "Wellness Starter Pack",
            "Perfect introduction to our most popular drinks",
            2999,
            3594,
            "Save 15%",
            &[("Green Vitality", 2), ("Berry Boost", 2), ("Tropical Cleanse", 2)],
        ),
        bundle(
            102,
            "Immunity Bundle",
            "Boost your immune system with these nutrient-rich drinks",
            2499,
            2997,
            "Save 20%",
            &[("Immunity Boost", 3), ("Citrus Refresh", 2), ("Golden Turmeric", 1)],
        ),
        bundle(
            103,
            "Energy & Focus Pack",
            "Stay energized and focused throughout your day",
            3299,
            3895,
            "Best Value",
            &[("Matcha Energy", 3), ("Berry Boost", 2), ("Protein Power", 2)],
        ),
        bundle(
            104,
            "Detox & Cleanse Bundle",
            "Reset your system with our detoxifying blends",
            2799,
            3294,
            "Popular",
            &[("Green Vitality", 2), ("Cucumber Calm", 2), ("Tropical Cleanse", 2)],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let store = CatalogStore::builtin().unwrap();
        assert_eq!(store.len(), 11);
        assert_eq!(store.bundles().len(), 4);
        assert_eq!(store.currency(), Currency::USD);
    }

    #[test]
    fn test_builtin_detail_pages() {
        let store = CatalogStore::builtin().unwrap();
        let detail = store.detail(ProductId::new(1)).unwrap();
        assert_eq!(detail.nutrition.calories, 120);
        assert_eq!(detail.average_rating(), Some(4.5));
        assert!(store.detail(ProductId::new(11)).is_none());

        let related: Vec<u32> = store
            .related(ProductId::new(4))
            .iter()
            .map(|p| p.id.get())
            .collect();
        assert_eq!(related, vec![1, 2, 3]);
    }

    #[test]
    fn test_builtin_bundle_lookup() {
        let store = CatalogStore::builtin().unwrap();
        let bundle = store.bundle(BundleId::new(103)).unwrap();
        assert_eq!(bundle.name, "Energy & Focus Pack");
        assert_eq!(bundle.bottle_count(), 7);
        assert!(store.bundle(BundleId::new(1)).is_none());
    }
}
