//! Search module.
//!
//! Filter criteria, sort options, the filter/sort/cap pipeline and faceted
//! results.

mod filter;
mod pipeline;
mod query;
mod results;

pub use filter::Filter;
pub use pipeline::{FilterSortPipeline, DEFAULT_RESULT_CAP};
pub use query::{FilterCriteria, SortOption};
pub use results::{Facet, FacetType, FacetValue, SearchFacets, SearchResults};
