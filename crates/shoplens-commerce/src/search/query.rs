//! Filter criteria and sort options.

use crate::error::CommerceError;
use crate::listing::Listing;
use crate::search::Filter;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Keep synthesis order.
    #[default]
    Relevance,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// Sort by highest rated.
    Rating,
    /// Sort by most reviewed.
    Popularity,
    /// Sort by fastest delivery.
    Delivery,
}

impl SortOption {
    /// Every option, in menu order.
    pub const ALL: [SortOption; 6] = [
        SortOption::Relevance,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Rating,
        SortOption::Popularity,
        SortOption::Delivery,
    ];

    /// Wire name (e.g., "price-low").
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Rating => "rating",
            SortOption::Popularity => "popularity",
            SortOption::Delivery => "delivery",
        }
    }

    /// Human-readable label (e.g., "Price: Low to High").
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevance",
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
            SortOption::Popularity => "Most Popular",
            SortOption::Delivery => "Fastest Delivery",
        }
    }

    /// Parse a wire name. `_` is accepted in place of `-`.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        SortOption::ALL
            .into_iter()
            .find(|opt| opt.as_str() == normalized)
    }

    /// Ordering of two listings under this option.
    ///
    /// Relevance treats everything as equal so a stable sort keeps the input
    /// order.
    pub fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        match self {
            SortOption::Relevance => Ordering::Equal,
            SortOption::PriceLow => a.price_money().amount_cents.cmp(&b.price_money().amount_cents),
            SortOption::PriceHigh => b.price_money().amount_cents.cmp(&a.price_money().amount_cents),
            SortOption::Rating => b.rating.total_cmp(&a.rating),
            SortOption::Popularity => b.reviews.cmp(&a.reviews),
            SortOption::Delivery => a.delivery_time.cmp(&b.delivery_time),
        }
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::parse(s).ok_or_else(|| CommerceError::UnknownSortOption(s.to_string()))
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraints and ordering requested for one search.
///
/// Every field is optional; `None` means no constraint on that axis, which
/// keeps "no minimum rating" apart from "minimum rating 0".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brands: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_shipping: Option<bool>,
    /// Unknown sort names deserialize to `None`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_sort"
    )]
    pub sort_by: Option<SortOption>,
}

impl FilterCriteria {
    /// Criteria with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_price(mut self, min: f64) -> Self {
        self.min_price = Some(min);
        self
    }

    pub fn with_max_price(mut self, max: f64) -> Self {
        self.max_price = Some(max);
        self
    }

    /// Restrict to these storefronts.
    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = Some(platforms.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict to these brands.
    pub fn with_brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brands = Some(brands.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Only keep listings that ship free.
    pub fn free_shipping_only(mut self) -> Self {
        self.free_shipping = Some(true);
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort_by = Some(sort);
        self
    }

    /// The predicates these criteria impose, in evaluation order.
    ///
    /// Empty platform or brand lists impose nothing.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();

        if self.min_price.is_some() || self.max_price.is_some() {
            filters.push(Filter::price_range(self.min_price, self.max_price));
        }
        if let Some(platforms) = self.platforms.as_ref().filter(|p| !p.is_empty()) {
            filters.push(Filter::Platforms(platforms.clone()));
        }
        if let Some(brands) = self.brands.as_ref().filter(|b| !b.is_empty()) {
            filters.push(Filter::Brands(brands.clone()));
        }
        if let Some(min) = self.min_rating {
            filters.push(Filter::Rating { min });
        }
        if self.free_shipping == Some(true) {
            filters.push(Filter::FreeShipping);
        }

        filters
    }

    /// Sort to apply, if any. Relevance counts as none.
    pub fn active_sort(&self) -> Option<SortOption> {
        self.sort_by.filter(|s| *s != SortOption::Relevance)
    }

    /// Check whether the criteria constrain nothing.
    pub fn is_empty(&self) -> bool {
        self.filters().is_empty() && self.active_sort().is_none()
    }

    /// Check if a platform is explicitly selected.
    pub fn selects_platform(&self, platform: &str) -> bool {
        self.platforms
            .as_ref()
            .is_some_and(|p| p.iter().any(|x| x == platform))
    }

    /// Check if a brand is explicitly selected.
    pub fn selects_brand(&self, brand: &str) -> bool {
        self.brands
            .as_ref()
            .is_some_and(|b| b.iter().any(|x| x == brand))
    }
}

fn lenient_sort<'de, D>(deserializer: D) -> Result<Option<SortOption>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(SortOption::parse))
}
