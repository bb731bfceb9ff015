//! Search filter predicates.

use crate::listing::Listing;
use serde::{Deserialize, Serialize};

/// A single predicate over listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Price within bounds; either side may be open. Inclusive.
    PriceRange {
        min: Option<f64>,
        max: Option<f64>,
    },
    /// Listed on one of these storefronts.
    Platforms(Vec<String>),
    /// Made by one of these brands.
    Brands(Vec<String>),
    /// Filter by minimum rating.
    Rating {
        min: f64,
    },
    /// Shipping label mentions "free".
    FreeShipping,
}

impl Filter {
    /// Create a price range filter.
    pub fn price_range(min: Option<f64>, max: Option<f64>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create a platform filter.
    pub fn platforms(platforms: &[&str]) -> Self {
        Filter::Platforms(platforms.iter().map(|p| p.to_string()).collect())
    }

    /// Create a brand filter.
    pub fn brands(brands: &[&str]) -> Self {
        Filter::Brands(brands.iter().map(|b| b.to_string()).collect())
    }

    /// Check a listing against this predicate.
    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            Filter::PriceRange { min, max } => {
                let price = listing.price_value();
                min.map_or(true, |min| price >= min) && max.map_or(true, |max| price <= max)
            }
            Filter::Platforms(platforms) => platforms.iter().any(|p| *p == listing.platform),
            Filter::Brands(brands) => brands.iter().any(|b| *b == listing.brand),
            Filter::Rating { min } => listing.rating >= *min,
            Filter::FreeShipping => listing.has_free_shipping(),
        }
    }
}
