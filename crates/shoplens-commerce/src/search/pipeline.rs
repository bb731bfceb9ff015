//! Filter, sort and cap.

use crate::listing::Listing;
use crate::search::FilterCriteria;

/// Result cap used when none is configured.
pub const DEFAULT_RESULT_CAP: usize = 50;

/// Applies filter criteria to a listing set.
#[derive(Debug, Clone, Copy)]
pub struct FilterSortPipeline {
    cap: usize,
}

impl FilterSortPipeline {
    pub fn new(cap: usize) -> Self {
        Self { cap }
    }

    /// Maximum number of listings `apply` returns.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Filter, then sort, then truncate to the cap.
    pub fn apply(&self, listings: Vec<Listing>, criteria: &FilterCriteria) -> Vec<Listing> {
        let mut kept = self.filter(listings, criteria);
        self.sort(&mut kept, criteria);
        self.truncate(kept)
    }

    /// Keep listings satisfying every predicate in `criteria`.
    pub fn filter(&self, listings: Vec<Listing>, criteria: &FilterCriteria) -> Vec<Listing> {
        let filters = criteria.filters();
        if filters.is_empty() {
            return listings;
        }
        listings
            .into_iter()
            .filter(|listing| filters.iter().all(|f| f.matches(listing)))
            .collect()
    }

    /// Stable sort by the criteria's sort option; no-op for relevance.
    pub fn sort(&self, listings: &mut [Listing], criteria: &FilterCriteria) {
        if let Some(sort) = criteria.active_sort() {
            listings.sort_by(|a, b| sort.compare(a, b));
        }
    }

    /// Drop everything past the cap.
    pub fn truncate(&self, mut listings: Vec<Listing>) -> Vec<Listing> {
        listings.truncate(self.cap);
        listings
    }
}

impl Default for FilterSortPipeline {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_CAP)
    }
}
