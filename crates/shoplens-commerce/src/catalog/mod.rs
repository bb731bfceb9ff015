//! Product template catalog.
//!
//! Contains the templates listings are synthesized from, the query-to-template
//! selector, and the static search suggestions.

mod builtin;
mod selector;
mod template;
pub mod trending;

pub use selector::TemplateSelector;
pub use template::{PriceTier, ProductTemplate};

use crate::market::MarketConfig;
use std::collections::BTreeSet;

/// Immutable category keyword to templates table.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    categories: Vec<(String, Vec<ProductTemplate>)>,
}

impl TemplateCatalog {
    /// Build a catalog from explicit categories.
    pub fn new(categories: Vec<(String, Vec<ProductTemplate>)>) -> Self {
        Self { categories }
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self::new(builtin::categories())
    }

    /// All `(keyword, templates)` groups in declaration order.
    pub fn all_categories(&self) -> &[(String, Vec<ProductTemplate>)] {
        &self.categories
    }

    /// Every template, flattened in declaration order.
    pub fn all_templates(&self) -> impl Iterator<Item = &ProductTemplate> {
        self.categories.iter().flat_map(|(_, templates)| templates.iter())
    }

    /// Deduplicated union of every template's brands.
    ///
    /// Independent of country.
    pub fn all_brands(&self) -> BTreeSet<String> {
        self.all_templates()
            .flat_map(|t| t.brands.iter().cloned())
            .collect()
    }

    /// Brands offered in a market.
    ///
    /// With `local_only` the catalog brands are narrowed to the market's
    /// popular brands, unless that leaves nothing.
    pub fn brands_for(&self, market: &MarketConfig, local_only: bool) -> BTreeSet<String> {
        let all = self.all_brands();
        if !local_only {
            return all;
        }
        let local: BTreeSet<String> = all
            .iter()
            .filter(|b| market.popular_brands.contains(b))
            .cloned()
            .collect();
        if local.is_empty() {
            all
        } else {
            local
        }
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|(_, t)| t.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::MarketRegistry;

    #[test]
    fn test_builtin_catalog_is_well_formed() {
        let catalog = TemplateCatalog::builtin();
        assert!(!catalog.is_empty());
        for template in catalog.all_templates() {
            assert!(!template.brands.is_empty(), "{}", template.base_title);
            assert!(!template.price_tiers.is_empty(), "{}", template.base_title);
            assert!(template.features.len() >= 3, "{}", template.base_title);
            assert!(!template.images.is_empty(), "{}", template.base_title);
            for tier in &template.price_tiers {
                assert!(tier.min > 0.0 && tier.min <= tier.max);
            }
            for (key, values) in &template.spec_options {
                assert!(!values.is_empty(), "{} / {}", template.base_title, key);
            }
        }
    }

    #[test]
    fn test_all_brands_is_deduplicated() {
        let catalog = TemplateCatalog::builtin();
        let brands = catalog.all_brands();
        assert!(brands.contains("Sony"));
        assert!(brands.contains("Audio-Technica"));
        let total: usize = catalog.all_templates().map(|t| t.brands.len()).sum();
        assert!(brands.len() < total);
    }

    #[test]
    fn test_brands_for_market() {
        let catalog = TemplateCatalog::builtin();
        let markets = MarketRegistry::builtin();
        let india = markets.lookup("IN");

        assert_eq!(catalog.brands_for(india, false), catalog.all_brands());

        let local = catalog.brands_for(india, true);
        assert!(local.contains("Xiaomi"));
        assert!(!local.contains("Garmin"));
    }

    #[test]
    fn test_brands_for_market_without_overlap_keeps_everything() {
        let catalog = TemplateCatalog::new(vec![(
            "kettle".to_string(),
            vec![ProductTemplate::new("Electric Kettle", "Kitchen").with_brands(&["Philips"])],
        )]);
        let markets = MarketRegistry::builtin();
        let brands = catalog.brands_for(markets.lookup("US"), true);
        assert_eq!(brands.len(), 1);
    }
}
