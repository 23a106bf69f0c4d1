//! Product page.

use anyhow::{Context as _, Result};
use vitality_commerce::present::{present_detail, DetailView};
use vitality_commerce::ProductId;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{badge, format_rating};

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let id: ProductId = args
        .id
        .parse()
        .with_context(|| format!("Invalid product ID: {}", args.id))?;

    let store = ctx.catalog()?;
    let view = present_detail(&store, id)?;

    if ctx.output.is_json() {
        ctx.output.json(&view);
        return Ok(());
    }

    print_detail(&view, ctx);
    Ok(())
}

fn print_detail(view: &DetailView, ctx: &Context) {
    let card = &view.product;
    match &card.badge {
        Some(label) => ctx.output.header(&format!("{}  [{}]", card.name, badge(label))),
        None => ctx.output.header(&card.name),
    }
    ctx.output.kv("price", &card.price_display);
    ctx.output.kv("category", &card.category);
    ctx.output.kv("page", &card.href);
    if let Some(rating) = view.average_rating {
        ctx.output.kv(
            "rating",
            &format!("{} ({} reviews)", format_rating(rating), view.reviews.len()),
        );
    }
    ctx.output.line("");
    ctx.output
        .line(view.long_description.as_deref().unwrap_or(&card.description));

    if let Some(ingredients) = &view.ingredients {
        ctx.output.header("Ingredients");
        ctx.output.line(ingredients);
    }

    if let Some(nutrition) = &view.nutrition {
        ctx.output.header("Nutrition Facts");
        ctx.output.kv("calories", &nutrition.calories.to_string());
        ctx.output.kv("protein", &nutrition.protein);
        ctx.output.kv("carbs", &nutrition.carbs);
        ctx.output.kv("fat", &nutrition.fat);
        if !nutrition.vitamins.is_empty() {
            ctx.output.kv("vitamins", &nutrition.vitamins.join(", "));
        }
    }

    if !view.reviews.is_empty() {
        ctx.output.header("Reviews");
        for review in &view.reviews {
            ctx.output.list_item(&format!(
                "{} {} ({}): {}",
                "★".repeat(review.rating as usize),
                review.author,
                review.posted,
                review.comment
            ));
        }
    }

    if !view.related.is_empty() {
        ctx.output.header("You May Also Like");
        for related in &view.related {
            ctx.output
                .list_item(&format!("{} {} ({})", related.name, related.price_display, related.href));
        }
    }
}
