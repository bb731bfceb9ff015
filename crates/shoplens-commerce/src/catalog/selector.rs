//! Query to template selection.

use super::{ProductTemplate, TemplateCatalog};

/// Picks the templates a free-text query is about.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSelector<'a> {
    catalog: &'a TemplateCatalog,
}

impl<'a> TemplateSelector<'a> {
    pub fn new(catalog: &'a TemplateCatalog) -> Self {
        Self { catalog }
    }

    /// Select templates matching `query`.
    ///
    /// A whole category group matches when the query contains its keyword; a
    /// single template matches when its title or a brand contains the query.
    /// When nothing matches, every template is returned, so the result is
    /// never empty for a non-empty catalog.
    pub fn select(&self, query: &str) -> Vec<&'a ProductTemplate> {
        let query = query.trim().to_lowercase();
        let mut selected: Vec<&'a ProductTemplate> = Vec::new();

        if !query.is_empty() {
            for (keyword, templates) in self.catalog.all_categories() {
                let group_matches = query.contains(keyword.as_str());
                for template in templates {
                    if group_matches || template.mentions(&query) {
                        selected.push(template);
                    }
                }
            }
        }

        if selected.is_empty() {
            tracing::debug!(query = %query, "no template matched, using full catalog");
            return self.catalog.all_templates().collect();
        }

        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(templates: &[&ProductTemplate]) -> Vec<String> {
        templates.iter().map(|t| t.base_title.clone()).collect()
    }

    #[test]
    fn test_keyword_selects_whole_group() {
        let catalog = TemplateCatalog::builtin();
        let selected = TemplateSelector::new(&catalog).select("Best headphones 2024");
        assert_eq!(
            titles(&selected),
            vec!["Wireless Noise Cancelling Headphones", "True Wireless Earbuds"]
        );
    }

    #[test]
    fn test_title_substring_matches() {
        let catalog = TemplateCatalog::builtin();
        let selected = TemplateSelector::new(&catalog).select("shoe");
        assert_eq!(titles(&selected), vec!["Running Shoes"]);
    }

    #[test]
    fn test_brand_substring_matches_across_groups() {
        let catalog = TemplateCatalog::builtin();
        let selected = TemplateSelector::new(&catalog).select("SONY");
        let titles = titles(&selected);
        assert!(titles.contains(&"Mirrorless Camera".to_string()));
        assert!(titles.contains(&"4K Smart TV".to_string()));
        assert!(!titles.contains(&"Running Shoes".to_string()));
    }

    #[test]
    fn test_no_match_falls_back_to_everything() {
        let catalog = TemplateCatalog::builtin();
        let selector = TemplateSelector::new(&catalog);
        for query in ["xyzzy-nonexistent", "", "   ", "\u{00e9}\u{00e9}"] {
            assert_eq!(selector.select(query).len(), catalog.len(), "query {:?}", query);
        }
    }

    #[test]
    fn test_selection_keeps_declaration_order() {
        let catalog = TemplateCatalog::builtin();
        let selected = TemplateSelector::new(&catalog).select("laptop");
        assert_eq!(titles(&selected), vec!["Thin & Light Laptop", "Gaming Laptop"]);
    }
}
