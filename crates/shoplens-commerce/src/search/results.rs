//! Search results and facets.

use crate::listing::Listing;
use crate::market::MarketConfig;
use crate::money::Currency;
use crate::search::FilterCriteria;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// USD thresholds between price buckets.
const PRICE_BUCKETS_USD: [f64; 4] = [50.0, 200.0, 500.0, 1000.0];

/// Search results container.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// The raw query string.
    pub query: String,
    /// Country code of the market searched.
    pub market: String,
    pub currency: Currency,
    /// Final listings, filtered, sorted and capped.
    pub listings: Vec<Listing>,
    /// Listings that passed the filters before the cap.
    pub matched: usize,
    /// Listings synthesized before filtering.
    pub synthesized: usize,
    /// Facets over the matched listings.
    pub facets: SearchFacets,
    /// Query time in milliseconds.
    pub query_time_ms: u64,
}

impl SearchResults {
    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Number of listings returned.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the cap cut matching listings.
    pub fn is_truncated(&self) -> bool {
        self.matched > self.listings.len()
    }
}

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Platform", "Price").
    pub name: String,
    /// Criteria field this facet filters on.
    pub field: String,
    /// Type of facet.
    pub facet_type: FacetType,
    /// Facet values.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create a new terms facet.
    pub fn terms(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            facet_type: FacetType::Terms,
            values: Vec::new(),
        }
    }

    /// Create a new range facet.
    pub fn range(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            facet_type: FacetType::Range,
            ..Self::terms(name, field)
        }
    }

    /// Add a value to the facet.
    pub fn add_value(&mut self, value: impl Into<String>, count: usize, selected: bool) {
        self.values.push(FacetValue {
            value: value.into(),
            count,
            selected,
            min: None,
            max: None,
        });
    }

    /// Count of a value, if present.
    pub fn count_of(&self, value: &str) -> Option<usize> {
        self.values.iter().find(|v| v.value == value).map(|v| v.count)
    }
}

/// Type of facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacetType {
    /// Discrete values (e.g., platforms, brands).
    Terms,
    /// Numeric range (e.g., price).
    Range,
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// The value or bucket label.
    pub value: String,
    /// Number of listings with this value.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
    /// Lower bound of a range bucket, inclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound of a range bucket, exclusive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Facets computed over a result set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchFacets {
    pub platforms: Facet,
    pub brands: Facet,
    pub price_ranges: Facet,
}

impl SearchFacets {
    /// Count platforms, brands and price buckets in `listings`.
    pub fn from_listings(listings: &[Listing], criteria: &FilterCriteria, market: &MarketConfig) -> Self {
        let mut platform_counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut brand_counts: BTreeMap<&str, usize> = BTreeMap::new();
        for listing in listings {
            *platform_counts.entry(&listing.platform).or_insert(0) += 1;
            *brand_counts.entry(&listing.brand).or_insert(0) += 1;
        }

        let mut platforms = Facet::terms("Platform", "platforms");
        for (value, count) in by_count(platform_counts) {
            platforms.add_value(value, count, criteria.selects_platform(value));
        }

        let mut brands = Facet::terms("Brand", "brands");
        for (value, count) in by_count(brand_counts) {
            brands.add_value(value, count, criteria.selects_brand(value));
        }

        Self {
            platforms,
            brands,
            price_ranges: price_buckets(listings, criteria, market),
        }
    }
}

/// Sort term counts by count descending, then name.
fn by_count(counts: BTreeMap<&str, usize>) -> Vec<(&str, usize)> {
    let mut values: Vec<(&str, usize)> = counts.into_iter().collect();
    values.sort_by(|a, b| b.1.cmp(&a.1));
    values
}

fn price_buckets(listings: &[Listing], criteria: &FilterCriteria, market: &MarketConfig) -> Facet {
    let symbol = market.symbol();
    let bounds: Vec<f64> = PRICE_BUCKETS_USD
        .iter()
        .map(|usd| (usd * market.price_multiplier).round())
        .collect();

    let mut facet = Facet::range("Price", "price");
    let mut lower: Option<f64> = None;
    for upper in bounds.iter().copied().map(Some).chain(std::iter::once(None)) {
        let label = match (lower, upper) {
            (None, Some(hi)) => format!("Under {}{:.0}", symbol, hi),
            (Some(lo), Some(hi)) => format!("{}{:.0} - {}{:.0}", symbol, lo, symbol, hi),
            (Some(lo), None) => format!("Over {}{:.0}", symbol, lo),
            (None, None) => "Any price".to_string(),
        };
        let count = listings
            .iter()
            .filter(|l| {
                let price = l.price_value();
                lower.map_or(true, |lo| price >= lo) && upper.map_or(true, |hi| price < hi)
            })
            .count();
        let selected = (criteria.min_price.is_some() || criteria.max_price.is_some())
            && criteria.min_price.unwrap_or(f64::MIN) <= lower.unwrap_or(0.0)
            && criteria.max_price.unwrap_or(f64::MAX) >= upper.unwrap_or(f64::MAX);

        facet.values.push(FacetValue {
            value: label,
            count,
            selected,
            min: lower,
            max: upper,
        });
        lower = upper;
    }
    facet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::fixtures::listing;
    use crate::market::MarketRegistry;

    fn sample() -> Vec<Listing> {
        vec![
            listing("Amazon", "Sony", 30.0, 4.0),
            listing("Amazon", "Bose", 150.0, 4.0),
            listing("eBay", "Sony", 250.0, 4.0),
            listing("Target", "Sony", 1200.0, 4.0),
        ]
    }

    #[test]
    fn test_term_facets_sorted_by_count() {
        let markets = MarketRegistry::builtin();
        let criteria = FilterCriteria::new().with_brands(["Bose"]);
        let facets = SearchFacets::from_listings(&sample(), &criteria, markets.lookup("US"));

        assert_eq!(facets.platforms.values[0].value, "Amazon");
        assert_eq!(facets.platforms.count_of("eBay"), Some(1));
        assert_eq!(facets.brands.values[0].value, "Sony");
        assert_eq!(facets.brands.count_of("Sony"), Some(3));

        let bose = facets.brands.values.iter().find(|v| v.value == "Bose").unwrap();
        assert!(bose.selected);
    }

    #[test]
    fn test_price_buckets_cover_every_listing() {
        let markets = MarketRegistry::builtin();
        let facets = SearchFacets::from_listings(&sample(), &FilterCriteria::new(), markets.lookup("US"));
        let buckets = &facets.price_ranges;

        assert_eq!(buckets.facet_type, FacetType::Range);
        assert_eq!(buckets.values.len(), 5);
        assert_eq!(buckets.values[0].value, "Under $50");
        assert_eq!(buckets.values[4].value, "Over $1000");
        assert_eq!(buckets.values.iter().map(|v| v.count).sum::<usize>(), 4);
        assert!(buckets.values.iter().all(|v| !v.selected));
    }

    #[test]
    fn test_price_buckets_scale_with_market() {
        let markets = MarketRegistry::builtin();
        let facets = SearchFacets::from_listings(&[], &FilterCriteria::new(), markets.lookup("IN"));
        assert_eq!(facets.price_ranges.values[0].value, "Under \u{20b9}4150");
        assert_eq!(facets.price_ranges.values[0].max, Some(4150.0));
    }

    #[test]
    fn test_selected_price_bucket() {
        let markets = MarketRegistry::builtin();
        let criteria = FilterCriteria::new().with_min_price(200.0).with_max_price(500.0);
        let facets = SearchFacets::from_listings(&sample(), &criteria, markets.lookup("US"));
        let selected: Vec<&str> = facets
            .price_ranges
            .values
            .iter()
            .filter(|v| v.selected)
            .map(|v| v.value.as_str())
            .collect();
        assert_eq!(selected, vec!["$200 - $500"]);
    }
}
