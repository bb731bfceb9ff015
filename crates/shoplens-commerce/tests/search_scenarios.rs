/// End-to-end search scenarios against the built-in markets and catalog.
///
/// Each test drives `SearchEngine` through its public API with a seeded
/// generator so failures reproduce.
use rand::rngs::StdRng;
use rand::SeedableRng;
use shoplens_commerce::prelude::*;
use std::collections::BTreeSet;

fn engine() -> SearchEngine {
    SearchEngine::default()
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Brands carried by the headphone templates.
const HEADPHONE_BRANDS: [&str; 7] = [
    "Sony",
    "Apple",
    "Bose",
    "Samsung",
    "JBL",
    "Audio-Technica",
    "Sennheiser",
];

#[test]
fn headphones_in_india() {
    let engine = SearchEngine::builtin(EngineConfig {
        result_cap: 100_000,
        ..EngineConfig::default()
    })
    .unwrap();
    let results = engine.search_with_rng("headphones", "IN", &FilterCriteria::new(), &mut rng(7));
    let india = engine.markets().lookup("IN");

    assert!(!results.is_empty());
    assert_eq!(results.market, "IN");
    assert_eq!(results.currency, Currency::INR);
    assert_eq!(results.len(), results.matched);
    assert_eq!(results.len(), results.synthesized);
    for listing in &results.listings {
        assert!(india.has_platform(&listing.platform), "{}", listing.platform);
        assert_eq!(listing.currency, "\u{20b9}");
        assert!(
            HEADPHONE_BRANDS.iter().any(|b| listing.title.contains(b)),
            "{}",
            listing.title
        );
        assert!(HEADPHONE_BRANDS.contains(&listing.brand.as_str()), "{}", listing.brand);
    }
}

#[test]
fn laptops_over_500_sorted_by_price() {
    let engine = engine();
    let criteria: FilterCriteria =
        serde_json::from_str(r#"{"minPrice": 500, "sortBy": "price-low"}"#).unwrap();
    let results = engine.search_with_rng("laptop", "US", &criteria, &mut rng(11));
    let us = engine.markets().lookup("US");

    assert!(!results.is_empty());
    let prices: Vec<f64> = results.listings.iter().map(|l| l.price_value()).collect();
    assert!(prices.iter().all(|p| *p >= 500.0));
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    assert!(results.listings.iter().all(|l| us.has_platform(&l.platform)));
    assert!(results
        .listings
        .iter()
        .all(|l| l.category == "Computers"));
}

#[test]
fn unmatched_query_falls_back_to_whole_catalog() {
    let engine = engine();
    let criteria = FilterCriteria::new();
    let results = engine.search_with_rng("xyzzy-nonexistent", "US", &criteria, &mut rng(3));

    let every = engine.catalog().all_templates().collect::<Vec<_>>();
    let expected = ListingSynthesizer::default().expected_count(&every, engine.markets().lookup("US"));
    assert!(!results.is_empty());
    assert_eq!(results.synthesized, expected);
}

#[test]
fn every_query_selects_something() {
    let engine = engine();
    let selector = TemplateSelector::new(engine.catalog());
    for query in ["", "   ", "headphones", "SONY", "a", "garden hose", "\u{1f600}"] {
        assert!(!selector.select(query).is_empty(), "query {:?}", query);
    }
}

#[test]
fn prices_and_discounts_agree() {
    let engine = SearchEngine::builtin(EngineConfig {
        result_cap: 10_000,
        ..EngineConfig::default()
    })
    .unwrap();
    for country in ["US", "IN", "JP", "DE"] {
        let results = engine.search_with_rng("watch", country, &FilterCriteria::new(), &mut rng(5));
        for l in &results.listings {
            let price = l.price_value();
            let original = l.original_price_value();
            assert!(price > 0.0);
            assert!(original >= price);
            assert!((10..40).contains(&l.discount));
            assert!((3.5..=5.0).contains(&l.rating));
            assert!((1..=7).contains(&l.delivery_time));
        }
    }
}

#[test]
fn filters_are_a_conjunction() {
    let engine = engine();
    let criteria = FilterCriteria::new()
        .with_max_price(300.0)
        .with_platforms(["Amazon", "Walmart"])
        .with_min_rating(4.0)
        .free_shipping_only();
    let results = engine.search_with_rng("shoes", "US", &criteria, &mut rng(9));

    for l in &results.listings {
        assert!(l.price_value() <= 300.0);
        assert!(l.platform == "Amazon" || l.platform == "Walmart");
        assert!(l.rating >= 4.0);
        assert!(l.has_free_shipping());
    }
}

#[test]
fn results_never_exceed_cap() {
    let engine = engine();
    for query in ["headphones", "laptop", "xyzzy"] {
        let results = engine.search_with_rng(query, "US", &FilterCriteria::new(), &mut rng(1));
        assert!(results.len() <= 50);
        assert!(results.matched >= results.len());
    }
}

#[test]
fn rating_sort_is_descending() {
    let engine = engine();
    let criteria = FilterCriteria::new().with_sort(SortOption::Rating);
    let results = engine.search_with_rng("speaker", "AU", &criteria, &mut rng(13));
    let ratings: Vec<f64> = results.listings.iter().map(|l| l.rating).collect();
    assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn unknown_sort_key_leaves_order_alone() {
    let engine = engine();
    let criteria: FilterCriteria = serde_json::from_str(r#"{"sortBy": "cheapest"}"#).unwrap();
    let a = engine.search_with_rng("tv", "CA", &criteria, &mut rng(21));
    let b = engine.search_with_rng("tv", "CA", &FilterCriteria::new(), &mut rng(21));

    let titles = |r: &SearchResults| r.listings.iter().map(|l| l.title.clone()).collect::<Vec<_>>();
    assert_eq!(titles(&a), titles(&b));
}

#[test]
fn ids_are_unique_within_a_search() {
    let engine = engine();
    let results = engine.search("backpack", "MX", &FilterCriteria::new());
    let ids: BTreeSet<&str> = results.listings.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids.len(), results.len());
}
