//! Synthesized product listings.

use crate::ids::ListingId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One offer for a synthetic product on one storefront.
///
/// Prices are decimal strings in the listing's currency. A listing is never
/// mutated after synthesis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    /// Selling price (e.g., "1299.00").
    pub price: String,
    /// Price before discount.
    pub original_price: String,
    /// Display symbol (e.g., "₹").
    pub currency: String,
    pub currency_code: Currency,
    pub platform: String,
    pub brand: String,
    pub seller: String,
    /// Star rating, one decimal, 3.5 to 5.0.
    pub rating: f64,
    pub reviews: u32,
    pub shipping: String,
    pub availability: String,
    /// Discount in whole percent.
    pub discount: u8,
    pub description: String,
    pub features: Vec<String>,
    pub specifications: BTreeMap<String, String>,
    pub category: String,
    /// Estimated delivery in whole days.
    pub delivery_time: u8,
    pub link: String,
    pub image: String,
}

impl Listing {
    /// Numeric selling price. Malformed strings read as 0.
    pub fn price_value(&self) -> f64 {
        self.price.trim().parse().unwrap_or(0.0)
    }

    /// Numeric pre-discount price. Malformed strings read as 0.
    pub fn original_price_value(&self) -> f64 {
        self.original_price.trim().parse().unwrap_or(0.0)
    }

    /// Selling price as money.
    pub fn price_money(&self) -> Money {
        Money::parse_decimal(&self.price, self.currency_code)
            .unwrap_or_else(|| Money::zero(self.currency_code))
    }

    /// Whether the shipping label offers free shipping.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.to_lowercase().contains("free")
    }

    /// Formatted selling price with symbol (e.g., "$49.99").
    pub fn display_price(&self) -> String {
        format!("{}{}", self.currency, self.price)
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::listing;

    #[test]
    fn test_price_values() {
        let l = listing("Amazon", "Sony", 49.99, 4.5);
        assert!((l.price_value() - 49.99).abs() < 1e-9);
        assert_eq!(l.price_money().amount_cents, 4999);
        assert_eq!(l.display_price(), "$49.99");
    }

    #[test]
    fn test_malformed_price_reads_as_zero() {
        let mut l = listing("Amazon", "Sony", 10.0, 4.5);
        l.price = "n/a".to_string();
        assert_eq!(l.price_value(), 0.0);
        assert_eq!(l.price_money().amount_cents, 0);
    }

    #[test]
    fn test_free_shipping_is_case_insensitive() {
        let mut l = listing("Amazon", "Sony", 10.0, 4.5);
        l.shipping = "FREE 2-Day Delivery".to_string();
        assert!(l.has_free_shipping());
        l.shipping = "Standard Shipping".to_string();
        assert!(!l.has_free_shipping());
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(listing("Amazon", "Sony", 10.0, 4.5)).unwrap();
        assert!(json.get("originalPrice").is_some());
        assert!(json.get("deliveryTime").is_some());
        assert_eq!(json["currencyCode"], "USD");
    }
}
