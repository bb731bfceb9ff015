//! Search orchestration.
//!
//! `SearchEngine` ties the pieces together for one query: resolve the market,
//! select templates, synthesize listings, then filter, sort and cap them.
//! Every step is total, so a search always produces a result.

use crate::catalog::{ProductTemplate, TemplateCatalog, TemplateSelector};
use crate::error::CommerceError;
use crate::market::{MarketConfig, MarketRegistry};
use crate::search::{FilterCriteria, FilterSortPipeline, SearchFacets, SearchResults, DEFAULT_RESULT_CAP};
use crate::synth::{ListingSynthesizer, DEFAULT_VARIANTS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Instant;

/// Engine tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum listings returned per search.
    pub result_cap: usize,
    /// Listings per (template, brand, tier, platform).
    pub variants_per_combination: usize,
    /// Narrow template brands to the market's popular brands.
    pub local_brands_only: bool,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.result_cap == 0 {
            return Err(CommerceError::ValidationError(
                "result_cap must be at least 1".to_string(),
            ));
        }
        if self.variants_per_combination == 0 {
            return Err(CommerceError::ValidationError(
                "variants_per_combination must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            result_cap: DEFAULT_RESULT_CAP,
            variants_per_combination: DEFAULT_VARIANTS,
            local_brands_only: false,
        }
    }
}

/// Runs searches against a market registry and template catalog.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    markets: Arc<MarketRegistry>,
    catalog: Arc<TemplateCatalog>,
    config: EngineConfig,
}

impl SearchEngine {
    /// Create an engine, rejecting a config that [`EngineConfig::validate`] refuses.
    pub fn new(
        markets: Arc<MarketRegistry>,
        catalog: Arc<TemplateCatalog>,
        config: EngineConfig,
    ) -> Result<Self, CommerceError> {
        config.validate()?;
        Ok(Self {
            markets,
            catalog,
            config,
        })
    }

    /// Engine over the built-in markets and catalog.
    pub fn builtin(config: EngineConfig) -> Result<Self, CommerceError> {
        Self::new(
            Arc::new(MarketRegistry::builtin()),
            Arc::new(TemplateCatalog::builtin()),
            config,
        )
    }

    pub fn markets(&self) -> &MarketRegistry {
        &self.markets
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Search with a freshly seeded generator.
    pub fn search(&self, query: &str, country: &str, criteria: &FilterCriteria) -> SearchResults {
        let mut rng = StdRng::from_entropy();
        self.search_with_rng(query, country, criteria, &mut rng)
    }

    /// Search using the caller's generator.
    pub fn search_with_rng<R: Rng + ?Sized>(
        &self,
        query: &str,
        country: &str,
        criteria: &FilterCriteria,
        rng: &mut R,
    ) -> SearchResults {
        let started = Instant::now();
        let market = self.markets.lookup(country);

        let selected = TemplateSelector::new(&self.catalog).select(query);
        let templates = self.localize(selected, market);
        let template_refs: Vec<&ProductTemplate> = templates.iter().map(|t| &**t).collect();
        tracing::debug!(query, templates = template_refs.len(), "selected templates");

        let synthesized = ListingSynthesizer::new(self.config.variants_per_combination)
            .synthesize(&template_refs, market, rng);
        let synthesized_count = synthesized.len();

        let pipeline = FilterSortPipeline::new(self.config.result_cap);
        let mut matched = pipeline.filter(synthesized, criteria);
        let facets = SearchFacets::from_listings(&matched, criteria, market);
        let matched_count = matched.len();
        tracing::debug!(matched = matched_count, "applied filters");

        pipeline.sort(&mut matched, criteria);
        let listings = pipeline.truncate(matched);

        let query_time_ms = started.elapsed().as_millis() as u64;
        tracing::info!(
            query,
            country = %market.code,
            synthesized = synthesized_count,
            matched = matched_count,
            returned = listings.len(),
            elapsed_ms = query_time_ms,
            "search completed"
        );

        SearchResults {
            query: query.to_string(),
            market: market.code.clone(),
            currency: market.currency,
            listings,
            matched: matched_count,
            synthesized: synthesized_count,
            facets,
            query_time_ms,
        }
    }

    /// Narrow template brands to the market's popular brands when configured.
    ///
    /// A template keeps its full brand list if none of its brands are local.
    fn localize<'a>(&self, templates: Vec<&'a ProductTemplate>, market: &MarketConfig) -> Vec<Cow<'a, ProductTemplate>> {
        if !self.config.local_brands_only {
            return templates.into_iter().map(Cow::Borrowed).collect();
        }
        templates
            .into_iter()
            .map(|template| {
                let local: Vec<String> = template
                    .brands
                    .iter()
                    .filter(|b| market.popular_brands.contains(b))
                    .cloned()
                    .collect();
                if local.is_empty() {
                    Cow::Borrowed(template)
                } else {
                    let mut narrowed = template.clone();
                    narrowed.brands = local;
                    Cow::Owned(narrowed)
                }
            })
            .collect()
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self {
            markets: Arc::new(MarketRegistry::builtin()),
            catalog: Arc::new(TemplateCatalog::builtin()),
            config: EngineConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SortOption;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_config_defaults_and_validation() {
        let config = EngineConfig::default();
        assert_eq!(config.result_cap, 50);
        assert_eq!(config.variants_per_combination, 2);
        assert!(!config.local_brands_only);
        assert!(config.validate().is_ok());

        let zero_cap = EngineConfig {
            result_cap: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(zero_cap.validate(), Err(CommerceError::ValidationError(_))));
    }

    #[test]
    fn test_engine_rejects_invalid_config() {
        let zero_cap = EngineConfig {
            result_cap: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            SearchEngine::builtin(zero_cap),
            Err(CommerceError::ValidationError(_))
        ));

        let no_variants = EngineConfig {
            variants_per_combination: 0,
            ..EngineConfig::default()
        };
        assert!(SearchEngine::builtin(no_variants).is_err());
        assert_eq!(SearchEngine::default().config(), &EngineConfig::default());
    }

    #[test]
    fn test_config_partial_deserialize() {
        let config: EngineConfig = serde_json::from_str(r#"{"result_cap": 10}"#).unwrap();
        assert_eq!(config.result_cap, 10);
        assert_eq!(config.variants_per_combination, 2);
    }

    #[test]
    fn test_search_reports_counts() {
        let engine = SearchEngine::default();
        let results = engine.search_with_rng("headphones", "US", &FilterCriteria::new(), &mut seeded(1));

        let expected = ListingSynthesizer::default().expected_count(
            &TemplateSelector::new(engine.catalog()).select("headphones"),
            engine.markets().lookup("US"),
        );
        assert_eq!(results.synthesized, expected);
        assert_eq!(results.matched, expected);
        assert_eq!(results.len(), 50);
        assert!(results.is_truncated());
        assert_eq!(results.market, "US");
    }

    #[test]
    fn test_unknown_country_uses_default_market() {
        let engine = SearchEngine::default();
        let results = engine.search_with_rng("laptop", "ZZ", &FilterCriteria::new(), &mut seeded(2));
        assert_eq!(results.market, "US");
        assert!(results.listings.iter().all(|l| l.currency == "$"));
    }

    #[test]
    fn test_facets_cover_matched_not_capped() {
        let engine = SearchEngine::default();
        let results = engine.search_with_rng("tv", "GB", &FilterCriteria::new(), &mut seeded(3));
        let platform_total: usize = results.facets.platforms.values.iter().map(|v| v.count).sum();
        assert_eq!(platform_total, results.matched);
    }

    #[test]
    fn test_same_seed_same_results() {
        let engine = SearchEngine::default();
        let criteria = FilterCriteria::new().with_sort(SortOption::Rating);
        let a = engine.search_with_rng("camera", "JP", &criteria, &mut seeded(42));
        let b = engine.search_with_rng("camera", "JP", &criteria, &mut seeded(42));

        let summary = |r: &SearchResults| -> Vec<(String, String)> {
            r.listings.iter().map(|l| (l.title.clone(), l.price.clone())).collect()
        };
        assert_eq!(summary(&a), summary(&b));
    }

    #[test]
    fn test_local_brands_only() {
        let config = EngineConfig {
            local_brands_only: true,
            result_cap: 1000,
            ..EngineConfig::default()
        };
        let engine = SearchEngine::builtin(config).unwrap();
        let market = engine.markets().lookup("IN").clone();
        let results = engine.search_with_rng("smartphone", "IN", &FilterCriteria::new(), &mut seeded(4));

        assert!(!results.is_empty());
        assert!(results
            .listings
            .iter()
            .all(|l| market.popular_brands.contains(&l.brand)));
    }

    #[test]
    fn test_empty_filter_result_is_not_an_error() {
        let engine = SearchEngine::default();
        let criteria = FilterCriteria::new().with_min_price(1.0e9);
        let results = engine.search_with_rng("watch", "US", &criteria, &mut seeded(5));
        assert!(results.is_empty());
        assert_eq!(results.matched, 0);
        assert!(results.synthesized > 0);
    }
}
