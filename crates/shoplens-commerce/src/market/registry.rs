//! Market registry.

use crate::error::CommerceError;
use crate::ids::slugify;
use crate::money::Currency;
use serde::{Deserialize, Serialize};

/// Country code used whenever a lookup has no exact match.
pub const DEFAULT_MARKET: &str = "US";

/// Market attributes for one country.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketConfig {
    /// ISO-style country code (e.g., "IN").
    pub code: String,
    /// Market currency.
    pub currency: Currency,
    /// Multiplier applied to USD base prices.
    pub price_multiplier: f64,
    /// Storefronts, in display order.
    pub platforms: Vec<String>,
    /// Brands that sell well locally.
    pub popular_brands: Vec<String>,
}

impl MarketConfig {
    fn new(
        code: &str,
        currency: Currency,
        price_multiplier: f64,
        platforms: &[&str],
        popular_brands: &[&str],
    ) -> Self {
        Self {
            code: code.to_string(),
            currency,
            price_multiplier,
            platforms: platforms.iter().map(|p| p.to_string()).collect(),
            popular_brands: popular_brands.iter().map(|b| b.to_string()).collect(),
        }
    }

    /// Currency display symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        self.currency.symbol()
    }

    /// Check whether a platform belongs to this market.
    pub fn has_platform(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }
}

/// Immutable country-code to market table.
///
/// Built once and shared; lookups never fail.
#[derive(Debug, Clone)]
pub struct MarketRegistry {
    markets: Vec<MarketConfig>,
    default_index: usize,
}

impl MarketRegistry {
    /// Build a registry from explicit markets.
    ///
    /// The market whose code is [`DEFAULT_MARKET`] becomes the fallback; if
    /// none is present the first market is used. An empty table is rejected.
    pub fn new(markets: Vec<MarketConfig>) -> Result<Self, CommerceError> {
        if markets.is_empty() {
            return Err(CommerceError::ValidationError(
                "market table is empty".to_string(),
            ));
        }
        Ok(Self::from_markets(markets))
    }

    /// Caller guarantees `markets` is non-empty.
    fn from_markets(markets: Vec<MarketConfig>) -> Self {
        let default_index = markets
            .iter()
            .position(|m| m.code == DEFAULT_MARKET)
            .unwrap_or(0);
        Self {
            markets,
            default_index,
        }
    }

    /// The built-in markets.
    pub fn builtin() -> Self {
        Self::from_markets(vec![
            MarketConfig::new(
                "US",
                Currency::USD,
                1.0,
                &["Amazon", "eBay", "Walmart", "Best Buy", "Target"],
                &["Apple", "Bose", "Dell", "HP", "Nike", "Samsung"],
            ),
            MarketConfig::new(
                "IN",
                Currency::INR,
                83.0,
                &["Amazon", "Flipkart", "Meesho", "Myntra", "Snapdeal"],
                &["Samsung", "Xiaomi", "OnePlus", "Realme", "boAt", "Puma"],
            ),
            MarketConfig::new(
                "GB",
                Currency::GBP,
                0.79,
                &["Amazon UK", "eBay UK", "Argos", "Currys", "John Lewis"],
                &["Apple", "Samsung", "Sony", "Dyson", "Adidas"],
            ),
            MarketConfig::new(
                "CA",
                Currency::CAD,
                1.36,
                &["Amazon", "Walmart", "Best Buy", "Canadian Tire", "eBay"],
                &["Apple", "Samsung", "Lenovo", "Canon", "Nike"],
            ),
            MarketConfig::new(
                "AU",
                Currency::AUD,
                1.52,
                &["Amazon", "eBay", "JB Hi-Fi", "Kmart", "Harvey Norman"],
                &["Apple", "Samsung", "Sony", "JBL", "Asics"],
            ),
            MarketConfig::new(
                "DE",
                Currency::EUR,
                0.92,
                &["Amazon", "eBay", "Otto", "MediaMarkt", "Zalando"],
                &["Samsung", "Sennheiser", "Adidas", "Puma", "Lenovo"],
            ),
            MarketConfig::new(
                "JP",
                Currency::JPY,
                150.0,
                &["Amazon", "Rakuten", "Yahoo Shopping", "Yodobashi", "Mercari"],
                &["Sony", "Canon", "Nikon", "Audio-Technica", "Asics"],
            ),
            MarketConfig::new(
                "MX",
                Currency::MXN,
                17.0,
                &["Amazon", "Mercado Libre", "Walmart", "Liverpool", "Coppel"],
                &["Samsung", "Xiaomi", "Motorola", "Nike", "HP"],
            ),
        ])
    }

    /// Look up the market for a country code.
    ///
    /// Case and surrounding whitespace are ignored. Unknown codes resolve to
    /// the default market.
    pub fn lookup(&self, country_code: &str) -> &MarketConfig {
        let code = country_code.trim();
        self.markets
            .iter()
            .find(|m| m.code.eq_ignore_ascii_case(code))
            .unwrap_or(&self.markets[self.default_index])
    }

    /// Check whether a code has its own entry.
    pub fn contains(&self, country_code: &str) -> bool {
        let code = country_code.trim();
        self.markets.iter().any(|m| m.code.eq_ignore_ascii_case(code))
    }

    /// The fallback market.
    pub fn default_market(&self) -> &MarketConfig {
        &self.markets[self.default_index]
    }

    /// Registered country codes in declaration order.
    pub fn codes(&self) -> Vec<&str> {
        self.markets.iter().map(|m| m.code.as_str()).collect()
    }

    /// Iterate over all markets.
    pub fn iter(&self) -> impl Iterator<Item = &MarketConfig> {
        self.markets.iter()
    }
}

impl Default for MarketRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Price multiplier for a storefront relative to the market price.
///
/// Budget storefronts undercut, premium ones mark up. Unlisted names get 1.0.
pub fn platform_price_multiplier(platform: &str) -> f64 {
    match platform {
        "Meesho" => 0.85,
        "Snapdeal" => 0.88,
        "Kmart" | "Coppel" => 0.9,
        "eBay" | "eBay UK" | "Mercari" => 0.92,
        "Flipkart" | "Walmart" | "Mercado Libre" => 0.95,
        "Argos" | "Rakuten" | "Canadian Tire" => 0.97,
        "Myntra" | "Otto" | "Yahoo Shopping" => 1.02,
        "Best Buy" | "Currys" | "MediaMarkt" | "JB Hi-Fi" => 1.05,
        "Zalando" | "Liverpool" | "Yodobashi" | "Harvey Norman" => 1.06,
        "John Lewis" => 1.08,
        _ => 1.0,
    }
}

/// URL slug for a storefront (e.g., "Best Buy" -> "bestbuy").
pub fn platform_slug(platform: &str) -> String {
    slugify(platform).replace('-', "")
}
