//! Product search command.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shoplens_commerce::history::{SearchHistory, SearchRecord};
use shoplens_commerce::search::{Facet, FilterCriteria, SearchResults, SortOption};

use super::SearchArgs;
use crate::context::Context;
use crate::output::truncate;

const WIDTHS: [usize; 6] = [12, 12, 12, 6, 20, 44];

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let query = args.query.join(" ");
    let country = ctx.country(args.country.as_deref());
    let criteria = criteria_from(&args);
    ctx.output.debug(&format!("Searching '{}' in {}", query, country));

    let engine = ctx.engine()?;
    let results = match args.seed {
        Some(seed) => engine.search_with_rng(&query, &country, &criteria, &mut StdRng::seed_from_u64(seed)),
        None => engine.search(&query, &country, &criteria),
    };

    if ctx.output.is_json() {
        ctx.output.json(&results);
    } else {
        print_results(&results, &criteria, args.show, ctx);
    }

    if ctx.config.history.enabled && !args.no_history {
        let record = SearchRecord::new(ctx.user_id(), &query, &criteria, results.len(), &results.market);
        let history = ctx.history();
        if let Err(e) = history.append(record).await {
            tracing::warn!(error = %e, path = %history.path().display(), "failed to record search");
            ctx.output.warn(&format!("Search not saved to history: {}", e));
        }
    }

    Ok(())
}

fn criteria_from(args: &SearchArgs) -> FilterCriteria {
    let mut criteria = FilterCriteria::new();
    if let Some(min) = args.min_price {
        criteria = criteria.with_min_price(min);
    }
    if let Some(max) = args.max_price {
        criteria = criteria.with_max_price(max);
    }
    if !args.platforms.is_empty() {
        criteria = criteria.with_platforms(args.platforms.iter().cloned());
    }
    if !args.brands.is_empty() {
        criteria = criteria.with_brands(args.brands.iter().cloned());
    }
    if let Some(rating) = args.min_rating {
        criteria = criteria.with_min_rating(rating);
    }
    if args.free_shipping {
        criteria = criteria.free_shipping_only();
    }
    if let Some(sort) = args.sort {
        criteria = criteria.with_sort(sort);
    }
    criteria
}

/// Label for the sort in effect; no sort reads as relevance.
fn sort_label(criteria: &FilterCriteria) -> &'static str {
    criteria
        .active_sort()
        .unwrap_or(SortOption::Relevance)
        .display_name()
}

fn print_results(results: &SearchResults, criteria: &FilterCriteria, show: usize, ctx: &Context) {
    ctx.output.header(&format!("Results for \"{}\"", results.query));
    ctx.output.kv("Market", &format!("{} ({})", results.market, results.currency));
    ctx.output.kv(
        "Listings",
        &format!(
            "{} shown of {} matching ({} generated)",
            results.len().min(show),
            results.matched,
            results.synthesized
        ),
    );
    ctx.output.kv("Sort", sort_label(criteria));
    ctx.output.kv("Time", &format!("{} ms", results.query_time_ms));

    if results.is_empty() {
        ctx.output.info("");
        ctx.output.info("No listings match these filters. Try widening the price range.");
        return;
    }

    ctx.output.info("");
    ctx.output.table_row(&["PRICE", "WAS", "PLATFORM", "RATING", "SHIPPING", "TITLE"], &WIDTHS);
    for listing in results.listings.iter().take(show) {
        let was = format!("{}{}", listing.currency, listing.original_price);
        let rating = format!("{:.1}", listing.rating);
        ctx.output.table_row(
            &[
                &listing.display_price(),
                &was,
                &listing.platform,
                &rating,
                &listing.shipping,
                &listing.title,
            ],
            &WIDTHS,
        );
    }

    ctx.output.header("Refine");
    print_facet(&results.facets.platforms, ctx);
    print_facet(&results.facets.brands, ctx);
    print_facet(&results.facets.price_ranges, ctx);
}

fn print_facet(facet: &Facet, ctx: &Context) {
    let values: Vec<String> = facet
        .values
        .iter()
        .filter(|v| v.count > 0)
        .map(|v| {
            let marker = if v.selected { "*" } else { "" };
            format!("{}{} ({})", marker, v.value, v.count)
        })
        .collect();
    if !values.is_empty() {
        ctx.output.kv(&facet.name, &truncate(&values.join(", "), 100));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_label() {
        assert_eq!(sort_label(&FilterCriteria::new()), "Relevance");
        let criteria = FilterCriteria::new().with_sort(SortOption::PriceHigh);
        assert_eq!(sort_label(&criteria), "Price: High to Low");
    }
}
