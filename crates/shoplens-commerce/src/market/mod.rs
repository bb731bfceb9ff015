//! Country markets.
//!
//! A market fixes the currency, the price scale relative to USD, and the
//! storefronts listings are spread across.

mod detect;
mod registry;

pub use detect::{detect_country, resolve_country};
pub use registry::{platform_price_multiplier, platform_slug, MarketConfig, MarketRegistry, DEFAULT_MARKET};
