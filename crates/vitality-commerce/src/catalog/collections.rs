//! Curated product collections: featured, bestsellers, new arrivals, bundles.

use crate::catalog::{Bundle, CatalogStore, Product};

/// The first `limit` products in catalog order.
pub fn featured(store: &CatalogStore, limit: usize) -> Vec<&Product> {
    store.list_all().iter().take(limit).collect()
}

/// Products that have sold at least once, best-selling first.
///
/// Equal sales keep catalog order.
pub fn bestsellers(store: &CatalogStore, limit: usize) -> Vec<&Product> {
    let mut ranked: Vec<&Product> = store.list_all().iter().filter(|p| p.sales > 0).collect();
    ranked.sort_by(|a, b| b.sales.cmp(&a.sales));
    ranked.truncate(limit);
    ranked
}

/// Products badged "New", in catalog order.
pub fn new_arrivals(store: &CatalogStore) -> Vec<&Product> {
    store.list_all().iter().filter(|p| p.is_new()).collect()
}

/// All bundles, in catalog order.
pub fn bundles(store: &CatalogStore) -> &[Bundle] {
    store.bundles()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::money::{Currency, Money};

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_featured_takes_catalog_prefix() {
        let store = CatalogStore::builtin().unwrap();
        assert_eq!(ids(&featured(&store, 4)), vec![1, 2, 3, 4]);
        assert_eq!(featured(&store, 100).len(), store.len());
        assert!(featured(&store, 0).is_empty());
    }

    #[test]
    fn test_bestsellers_ranked_by_sales() {
        let store = CatalogStore::builtin().unwrap();
        assert_eq!(ids(&bestsellers(&store, 6)), vec![1, 6, 2, 8, 7, 5]);
        assert_eq!(ids(&bestsellers(&store, 2)), vec![1, 6]);
    }

    #[test]
    fn test_bestseller_ties_keep_catalog_order() {
        let price = Money::new(100, Currency::USD);
        let store = CatalogStore::from_products(
            Currency::USD,
            vec![
                Product::new(1, "A", "a", price, Category::Greens).with_sales(10),
                Product::new(2, "B", "b", price, Category::Greens).with_sales(20),
                Product::new(3, "C", "c", price, Category::Greens).with_sales(10),
                Product::new(4, "D", "d", price, Category::Greens),
            ],
        )
        .unwrap();
        assert_eq!(ids(&bestsellers(&store, 10)), vec![2, 1, 3]);
    }

    #[test]
    fn test_new_arrivals() {
        let store = CatalogStore::builtin().unwrap();
        assert_eq!(ids(&new_arrivals(&store)), vec![2, 9, 10, 11]);
    }

    #[test]
    fn test_bundles() {
        let store = CatalogStore::builtin().unwrap();
        let names: Vec<&str> = bundles(&store).iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names[0], "Wellness Starter Pack");
        assert_eq!(names.len(), 4);
    }
}
