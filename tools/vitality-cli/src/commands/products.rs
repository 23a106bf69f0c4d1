//! Product listing with search, filters and sorting.

use anyhow::{Context as _, Result};
use serde::Serialize;
use vitality_commerce::present::{present, ViewRecord};
use vitality_commerce::search::{CategoryFilter, FacetValue, PriceRange, QueryCriteria, SortKey};

use super::ProductsArgs;
use crate::config::SearchConfig;
use crate::context::Context;
use crate::output::{badge, truncate};

#[derive(Serialize)]
struct Listing<'a> {
    criteria: &'a QueryCriteria,
    results: Vec<ViewRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    facets: Option<Vec<FacetValue>>,
}

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let criteria = build_criteria(&args, &ctx.config.search)?;
    let store = ctx.catalog()?;

    let results = store.query(&criteria)?;
    let facets = if args.facets {
        Some(store.category_facets(&criteria)?)
    } else {
        None
    };

    let listing = Listing {
        criteria: &criteria,
        results: present(&results),
        facets,
    };

    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return Ok(());
    }

    print_listing(&listing, ctx);
    Ok(())
}

/// Combine command-line flags with the configured defaults.
pub fn build_criteria(args: &ProductsArgs, defaults: &SearchConfig) -> Result<QueryCriteria> {
    let sort: SortKey = match &args.sort {
        Some(sort) => sort.parse()?,
        None => defaults.sort_key()?,
    };

    let category: CategoryFilter = match &args.category {
        Some(category) => category
            .parse()
            .with_context(|| format!("Unknown category: {}", category))?,
        None => CategoryFilter::All,
    };

    let price_range = PriceRange::from_decimal(
        args.min.unwrap_or(defaults.price_min),
        args.max.unwrap_or(defaults.price_max),
    )?;

    Ok(QueryCriteria::new()
        .with_search(args.search.clone().unwrap_or_default())
        .with_category(category)
        .with_price_range(price_range)
        .with_sort(sort))
}

const WIDTHS: [usize; 6] = [4, 18, 10, 8, 12, 0];

fn print_listing(listing: &Listing<'_>, ctx: &Context) {
    let criteria = listing.criteria;
    ctx.output.header(&format!(
        "Products ({} found, sorted by {})",
        listing.results.len(),
        criteria.sort.display_name()
    ));
    ctx.output.kv("category", &criteria.category.to_string());
    ctx.output.kv("price", &criteria.price_range.to_string());
    if !criteria.search_text.is_empty() {
        ctx.output.kv("search", &criteria.search_text);
    }
    ctx.output.line("");

    if listing.results.is_empty() {
        ctx.output.info("No products match these filters.");
    } else {
        let used: usize = WIDTHS[..5].iter().map(|w| w + 2).sum::<usize>() + 2;
        let description_width = ctx.output.term_width().saturating_sub(used).max(20);

        ctx.output.table_row(
            &["ID", "NAME", "CATEGORY", "PRICE", "BADGE", "DESCRIPTION"],
            &WIDTHS,
        );
        for card in &listing.results {
            let id = card.id.to_string();
            let label = card.badge.as_deref().map(badge).unwrap_or_default();
            let description = truncate(&card.description, description_width);
            ctx.output.table_row(
                &[
                    id.as_str(),
                    card.name.as_str(),
                    card.category.as_str(),
                    card.price_display.as_str(),
                    label.as_str(),
                    description.as_str(),
                ],
                &WIDTHS,
            );
        }
    }

    if let Some(facets) = &listing.facets {
        ctx.output.header("Categories");
        for facet in facets {
            let marker = if facet.selected { "*" } else { " " };
            ctx.output
                .list_item(&format!("{} {} ({})", marker, facet.category, facet.count));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitality_commerce::catalog::Category;

    fn args() -> ProductsArgs {
        ProductsArgs {
            search: None,
            category: None,
            min: None,
            max: None,
            sort: None,
            facets: false,
        }
    }

    #[test]
    fn test_defaults_come_from_config() {
        let mut defaults = SearchConfig::default();
        defaults.default_sort = "name".to_string();
        defaults.price_max = 8.0;

        let criteria = build_criteria(&args(), &defaults).unwrap();
        assert_eq!(criteria.sort, SortKey::Name);
        assert_eq!(criteria.price_range, PriceRange::new(0, 800));
        assert_eq!(criteria.category, CategoryFilter::All);
        assert_eq!(criteria.search_text, "");
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = ProductsArgs {
            search: Some("berry".to_string()),
            category: Some("Berries".to_string()),
            min: Some(7.0),
            max: None,
            sort: Some("price-high".to_string()),
            facets: true,
        };
        let criteria = build_criteria(&args, &SearchConfig::default()).unwrap();
        assert_eq!(criteria.search_text, "berry");
        assert_eq!(criteria.category, CategoryFilter::Only(Category::Berries));
        assert_eq!(criteria.price_range, PriceRange::new(700, 1000));
        assert_eq!(criteria.sort, SortKey::PriceHigh);
    }

    #[test]
    fn test_unknown_values_rejected() {
        let mut bad_sort = args();
        bad_sort.sort = Some("cheapest".to_string());
        assert!(build_criteria(&bad_sort, &SearchConfig::default()).is_err());

        let mut bad_category = args();
        bad_category.category = Some("berries".to_string());
        assert!(build_criteria(&bad_category, &SearchConfig::default()).is_err());
    }

    #[test]
    fn test_price_flags_are_not_rounded_away() {
        let mut fractional = args();
        fractional.min = Some(6.994);
        let criteria = build_criteria(&fractional, &SearchConfig::default()).unwrap();
        assert_eq!(criteria.price_range, PriceRange::new(700, 1000));

        for bad in [-0.004, f64::NAN] {
            let mut bad_min = args();
            bad_min.min = Some(bad);
            assert!(build_criteria(&bad_min, &SearchConfig::default()).is_err());
        }
    }
}
