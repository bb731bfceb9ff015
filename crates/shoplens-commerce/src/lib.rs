//! Synthetic product search for ShopLens.
//!
//! This crate turns a free-text query and a country into a list of plausible
//! product listings across that country's shopping platforms:
//!
//! - **Market**: per-country currency, price multiplier and platforms
//! - **Catalog**: product templates and query-to-template selection
//! - **Synth**: listing generation from templates
//! - **Search**: filter criteria, sorting, the result cap and facets
//! - **Engine**: the orchestrator tying these together
//! - **History**: records of past searches behind an async store
//!
//! # Example
//!
//! ```rust
//! use shoplens_commerce::prelude::*;
//!
//! let engine = SearchEngine::default();
//! let criteria = FilterCriteria::new()
//!     .with_min_price(500.0)
//!     .with_sort(SortOption::PriceLow);
//!
//! let results = engine.search("laptop", "US", &criteria);
//! assert!(results.listings.iter().all(|l| l.price_value() >= 500.0));
//! assert!(results.len() <= 50);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod engine;
pub mod history;
pub mod listing;
pub mod market;
pub mod search;
pub mod synth;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Market
    pub use crate::market::{resolve_country, MarketConfig, MarketRegistry};

    // Catalog
    pub use crate::catalog::{PriceTier, ProductTemplate, TemplateCatalog, TemplateSelector};

    // Listings
    pub use crate::listing::Listing;
    pub use crate::synth::ListingSynthesizer;

    // Search
    pub use crate::engine::{EngineConfig, SearchEngine};
    pub use crate::search::{
        Facet, FacetType, FacetValue, Filter, FilterCriteria, FilterSortPipeline, SearchFacets,
        SearchResults, SortOption,
    };

    // History
    pub use crate::history::{InMemoryHistory, SearchHistory, SearchRecord};
}
