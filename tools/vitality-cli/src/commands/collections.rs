//! Curated collections: featured, bestsellers, new arrivals and bundles.

use anyhow::Result;
use vitality_commerce::catalog::collections;
use vitality_commerce::present::{present, present_bundles, BundleView, ViewRecord};

use super::{Collection, CollectionsArgs};
use crate::context::Context;
use crate::output::{badge, format_count};

/// Run the collections command.
pub async fn run(args: CollectionsArgs, ctx: &Context) -> Result<()> {
    let store = ctx.catalog()?;
    let search = &ctx.config.search;

    let (title, products) = match args.collection {
        Collection::Featured => (
            "Featured Products",
            collections::featured(&store, args.limit.unwrap_or(search.featured_limit)),
        ),
        Collection::Bestsellers => (
            "Bestsellers",
            collections::bestsellers(&store, args.limit.unwrap_or(search.bestseller_limit)),
        ),
        Collection::New => {
            let mut arrivals = collections::new_arrivals(&store);
            arrivals.truncate(args.limit.unwrap_or(usize::MAX));
            ("New Arrivals", arrivals)
        }
        Collection::Bundles => {
            let mut bundles = present_bundles(collections::bundles(&store));
            bundles.truncate(args.limit.unwrap_or(usize::MAX));
            if ctx.output.is_json() {
                ctx.output.json(&bundles);
            } else {
                print_bundles(&bundles, ctx);
            }
            return Ok(());
        }
    };

    let cards = present(&products);
    if ctx.output.is_json() {
        ctx.output.json(&cards);
    } else {
        let show_sales = args.collection == Collection::Bestsellers;
        print_cards(title, &cards, show_sales, ctx);
    }
    Ok(())
}

fn print_cards(title: &str, cards: &[ViewRecord], show_sales: bool, ctx: &Context) {
    ctx.output.header(title);
    if cards.is_empty() {
        ctx.output.info("Nothing here yet.");
        return;
    }
    for card in cards {
        let label = card
            .badge
            .as_deref()
            .map(|b| format!("  [{}]", badge(b)))
            .unwrap_or_default();
        let sold = if show_sales {
            format!("  {} sold", format_count(card.sales))
        } else {
            String::new()
        };
        ctx.output.list_item(&format!(
            "{} {}{}{}  {}",
            card.name, card.price_display, label, sold, card.href
        ));
    }
}

fn print_bundles(bundles: &[BundleView], ctx: &Context) {
    ctx.output.header("Bundles");
    for bundle in bundles {
        ctx.output.line("");
        let label = bundle
            .badge
            .as_deref()
            .map(|b| format!("  [{}]", badge(b)))
            .unwrap_or_default();
        ctx.output.line(&format!("  {}{}", bundle.name, label));
        ctx.output.kv("description", &bundle.description);
        ctx.output.kv(
            "price",
            &format!(
                "{} (was {}, save {} / {}%)",
                bundle.price_display,
                bundle.original_price_display,
                bundle.savings_display,
                bundle.savings_percent
            ),
        );
        for item in &bundle.includes {
            ctx.output.list_item(item);
        }
    }
}
