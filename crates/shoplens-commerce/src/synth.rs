//! Listing synthesis.
//!
//! Expands templates across brand, price tier, platform and variant into
//! concrete listings. All randomness comes from the caller's generator, so a
//! seeded generator reproduces a result set exactly (ids aside).

use crate::catalog::{PriceTier, ProductTemplate};
use crate::ids::{slugify, ListingId};
use crate::listing::Listing;
use crate::market::{platform_price_multiplier, platform_slug, MarketConfig};
use crate::money::Money;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Variants generated per (template, brand, tier, platform) in the default setup.
pub const DEFAULT_VARIANTS: usize = 2;

/// Discount range in whole percent, upper bound exclusive.
const DISCOUNT_RANGE: std::ops::Range<u8> = 10..40;

const MIN_RATING: f64 = 3.5;
const MAX_RATING: f64 = 5.0;

const QUALIFIERS: &[&str] = &["Pro", "Max", "Ultra", "Plus", "Elite", "Prime"];

const SELLERS: &[&str] = &[
    "TechStore",
    "ElectroMart",
    "FashionHub",
    "GadgetWorld",
    "StyleStore",
    "MegaMart",
    "QuickShop",
];

// Weighted by repetition: mostly free shipping, mostly in stock.
const SHIPPING: &[&str] = &[
    "Free Shipping",
    "Free Shipping",
    "Free Delivery",
    "Free 2-Day Shipping",
    "Standard Shipping",
    "Express Shipping",
];

const AVAILABILITY: &[&str] = &[
    "In Stock",
    "In Stock",
    "In Stock",
    "In Stock",
    "Limited Stock",
    "Only a few left",
];

/// Generates listings from templates for one market.
#[derive(Debug, Clone, Copy)]
pub struct ListingSynthesizer {
    variants_per_combination: usize,
}

impl ListingSynthesizer {
    pub fn new(variants_per_combination: usize) -> Self {
        Self {
            variants_per_combination,
        }
    }

    /// Number of listings `synthesize` will produce.
    pub fn expected_count(&self, templates: &[&ProductTemplate], market: &MarketConfig) -> usize {
        templates.iter().map(|t| t.combinations()).sum::<usize>()
            * market.platforms.len()
            * self.variants_per_combination
    }

    /// Expand every template across brand, tier, platform and variant.
    pub fn synthesize<R: Rng + ?Sized>(
        &self,
        templates: &[&ProductTemplate],
        market: &MarketConfig,
        rng: &mut R,
    ) -> Vec<Listing> {
        let mut listings = Vec::with_capacity(self.expected_count(templates, market));

        for template in templates {
            for brand in &template.brands {
                for (tier_index, tier) in template.price_tiers.iter().enumerate() {
                    for platform in &market.platforms {
                        for variant in 0..self.variants_per_combination {
                            let slot = Slot {
                                template,
                                brand,
                                tier_index,
                                tier,
                                platform,
                                variant,
                                sequence: listings.len(),
                            };
                            listings.push(slot.generate(market, rng));
                        }
                    }
                }
            }
        }

        tracing::debug!(
            market = %market.code,
            templates = templates.len(),
            listings = listings.len(),
            "synthesized listings"
        );

        listings
    }
}

impl Default for ListingSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_VARIANTS)
    }
}

/// Coordinates of one listing in the expansion.
struct Slot<'a> {
    template: &'a ProductTemplate,
    brand: &'a str,
    tier_index: usize,
    tier: &'a PriceTier,
    platform: &'a str,
    variant: usize,
    sequence: usize,
}

impl Slot<'_> {
    fn generate<R: Rng + ?Sized>(&self, market: &MarketConfig, rng: &mut R) -> Listing {
        let currency = market.currency;

        let base = if self.tier.max > self.tier.min {
            rng.gen_range(self.tier.min..=self.tier.max)
        } else {
            self.tier.min
        };
        let price = Money::from_decimal(base * market.price_multiplier, currency)
            .multiply_decimal(platform_price_multiplier(self.platform));

        let discount = rng.gen_range(DISCOUNT_RANGE);
        let original_price = Money::from_decimal(
            price.to_decimal() / (1.0 - f64::from(discount) / 100.0),
            currency,
        );

        let rating = (rng.gen_range(MIN_RATING..=MAX_RATING) * 10.0).round() / 10.0;
        let reviews = rng.gen_range(120..=9_999);

        let mut features = self.template.features.clone();
        features.shuffle(rng);
        features.truncate(rng.gen_range(3..=6));

        let specifications: BTreeMap<String, String> = self
            .template
            .spec_options
            .iter()
            .filter_map(|(key, values)| values.choose(rng).map(|v| (key.clone(), v.clone())))
            .collect();

        let qualifier = pick(QUALIFIERS, rng);
        let title = match features.first() {
            Some(feature) => format!(
                "{} {} {} - {}",
                self.brand, self.template.base_title, qualifier, feature
            ),
            None => format!("{} {} {}", self.brand, self.template.base_title, qualifier),
        };

        let seller = pick(SELLERS, rng);
        let id = ListingId::compose(
            self.brand,
            self.platform,
            self.tier_index,
            self.variant,
            self.sequence,
        );
        let link = deep_link(self.platform, &title, &id);

        Listing {
            description: describe(self.brand, &self.template.base_title, &features, seller, self.platform),
            id,
            title,
            price: price.display_amount(),
            original_price: original_price.display_amount(),
            currency: currency.symbol().to_string(),
            currency_code: currency,
            platform: self.platform.to_string(),
            brand: self.brand.to_string(),
            seller: seller.to_string(),
            rating,
            reviews,
            shipping: pick(SHIPPING, rng).to_string(),
            availability: pick(AVAILABILITY, rng).to_string(),
            discount,
            features,
            specifications,
            category: self.template.category.clone(),
            delivery_time: rng.gen_range(1..=7),
            link,
            image: self.template.images.choose(rng).cloned().unwrap_or_default(),
        }
    }
}

fn pick<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

fn describe(brand: &str, base_title: &str, features: &[String], seller: &str, platform: &str) -> String {
    let highlights = features
        .iter()
        .take(2)
        .map(|f| f.to_lowercase())
        .collect::<Vec<_>>()
        .join(" and ");
    if highlights.is_empty() {
        format!("{} {}. Sold by {} on {}.", brand, base_title, seller, platform)
    } else {
        format!(
            "{} {} with {}. Sold by {} on {}.",
            brand, base_title, highlights, seller, platform
        )
    }
}

/// Storefront URL for a listing. Not expected to resolve.
fn deep_link(platform: &str, title: &str, id: &ListingId) -> String {
    let title_slug = title
        .to_lowercase()
        .split_whitespace()
        .filter(|w| *w != "-")
        .collect::<Vec<_>>()
        .join("-");
    format!(
        "https://www.{}.example/p/{}?id={}",
        platform_slug(platform),
        urlencoding::encode(&title_slug),
        urlencoding::encode(&slugify(id.as_str()))
    )
}
