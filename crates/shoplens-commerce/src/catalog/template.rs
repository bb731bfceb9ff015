//! Product templates.

use serde::{Deserialize, Serialize};

/// Inclusive price band in USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub min: f64,
    pub max: f64,
}

impl PriceTier {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Pattern from which listings of one product kind are generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductTemplate {
    /// Title fragment (e.g., "Wireless Noise Cancelling Headphones").
    pub base_title: String,
    /// Category label shown on listings.
    pub category: String,
    /// Brands that make this product.
    pub brands: Vec<String>,
    /// Price bands, cheapest first.
    pub price_tiers: Vec<PriceTier>,
    /// Candidate selling points.
    pub features: Vec<String>,
    /// Specification key with its candidate values, in display order.
    pub spec_options: Vec<(String, Vec<String>)>,
    /// Candidate product images.
    pub images: Vec<String>,
}

impl ProductTemplate {
    /// Start a template with a title and category.
    pub fn new(base_title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            base_title: base_title.into(),
            category: category.into(),
            brands: Vec::new(),
            price_tiers: Vec::new(),
            features: Vec::new(),
            spec_options: Vec::new(),
            images: Vec::new(),
        }
    }

    pub fn with_brands(mut self, brands: &[&str]) -> Self {
        self.brands = to_strings(brands);
        self
    }

    /// Add price tiers as `(min, max)` pairs.
    pub fn with_tiers(mut self, tiers: &[(f64, f64)]) -> Self {
        self.price_tiers = tiers.iter().map(|&(min, max)| PriceTier::new(min, max)).collect();
        self
    }

    pub fn with_features(mut self, features: &[&str]) -> Self {
        self.features = to_strings(features);
        self
    }

    /// Add a specification key with its candidate values.
    pub fn with_spec(mut self, key: &str, values: &[&str]) -> Self {
        self.spec_options.push((key.to_string(), to_strings(values)));
        self
    }

    pub fn with_images(mut self, images: &[&str]) -> Self {
        self.images = to_strings(images);
        self
    }

    /// Check whether the lowercase query appears in the title or a brand.
    pub fn mentions(&self, query_lower: &str) -> bool {
        self.base_title.to_lowercase().contains(query_lower)
            || self
                .brands
                .iter()
                .any(|b| b.to_lowercase().contains(query_lower))
    }

    /// Number of listings one synthesis pass yields per platform and variant.
    pub fn combinations(&self) -> usize {
        self.brands.len() * self.price_tiers.len()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earbuds() -> ProductTemplate {
        ProductTemplate::new("True Wireless Earbuds", "Audio")
            .with_brands(&["JBL", "Audio-Technica"])
            .with_tiers(&[(29.0, 99.0), (100.0, 249.0)])
    }

    #[test]
    fn test_mentions_title_and_brand() {
        let t = earbuds();
        assert!(t.mentions("earbuds"));
        assert!(t.mentions("technica"));
        assert!(!t.mentions("laptop"));
    }

    #[test]
    fn test_combinations() {
        assert_eq!(earbuds().combinations(), 4);
    }
}
