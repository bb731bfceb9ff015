//! Static search suggestions shown before the first search.

use serde::Serialize;

/// A suggested query with a reason and a popularity score (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendingSearch {
    pub query: &'static str,
    pub reason: &'static str,
    pub popularity: u8,
}

const TRENDING: &[TrendingSearch] = &[
    TrendingSearch { query: "wireless headphones", reason: "High demand this week", popularity: 95 },
    TrendingSearch { query: "smartphone", reason: "Best deals available", popularity: 88 },
    TrendingSearch { query: "laptop backpack", reason: "Back to school season", popularity: 82 },
    TrendingSearch { query: "smartwatch", reason: "New year resolutions", popularity: 76 },
    TrendingSearch { query: "bluetooth speaker", reason: "Summer essentials", popularity: 71 },
];

const QUICK: &[&str] = &[
    "gaming laptop",
    "running shoes",
    "earbuds",
    "mirrorless camera",
    "4k tv",
];

/// Trending searches, most popular first.
pub fn trending_searches() -> &'static [TrendingSearch] {
    TRENDING
}

/// Short one-tap queries.
pub fn quick_searches() -> &'static [&'static str] {
    QUICK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{TemplateCatalog, TemplateSelector};

    #[test]
    fn test_trending_sorted_by_popularity() {
        let scores: Vec<u8> = trending_searches().iter().map(|t| t.popularity).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
    }

    #[test]
    fn test_suggestions_hit_real_templates() {
        let catalog = TemplateCatalog::builtin();
        let selector = TemplateSelector::new(&catalog);
        for query in trending_searches().iter().map(|t| t.query).chain(quick_searches().iter().copied()) {
            assert!(selector.select(query).len() < catalog.len(), "{} fell back", query);
        }
    }
}
