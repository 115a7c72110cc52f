use serde::Deserialize;

pub const ALL_CATEGORIES: &str = "All";

pub const CATEGORIES: [&str; 7] = [
    ALL_CATEGORIES,
    "Government",
    "Criminal",
    "Consumer",
    "Property",
    "Personal",
    "Civil",
];

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Template {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub description: String,
    pub category: String,
    pub is_new: bool,
    pub popularity: u8,
    pub time_estimate: String,
    pub uses: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Default,
    Popularity,
    Name,
    Uses,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Default,
        SortKey::Popularity,
        SortKey::Name,
        SortKey::Uses,
    ];

    pub fn value(self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::Popularity => "popularity",
            SortKey::Name => "name",
            SortKey::Uses => "uses",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::Popularity => "Popularity",
            SortKey::Name => "Name",
            SortKey::Uses => "Most Used",
        }
    }

    /// Unknown values fall back to catalog order.
    pub fn from_value(value: &str) -> Self {
        match value {
            "popularity" => SortKey::Popularity,
            "name" => SortKey::Name,
            "uses" => SortKey::Uses,
            _ => SortKey::Default,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn class(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TemplateQuery {
    pub category: String,
    pub search: String,
    pub sort: SortKey,
}

impl Default for TemplateQuery {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            sort: SortKey::Default,
        }
    }
}

impl TemplateQuery {
    pub fn matches(&self, template: &Template) -> bool {
        let in_category = self.category == ALL_CATEGORIES || template.category == self.category;
        if !in_category {
            return false;
        }
        let needle = self.search.to_lowercase();
        template.title.to_lowercase().contains(&needle)
            || template.description.to_lowercase().contains(&needle)
    }

    pub fn apply<'a>(&self, templates: &'a [Template]) -> Vec<&'a Template> {
        let mut found: Vec<&Template> = templates.iter().filter(|t| self.matches(t)).collect();
        match self.sort {
            SortKey::Default => {}
            SortKey::Popularity => found.sort_by(|a, b| b.popularity.cmp(&a.popularity)),
            SortKey::Name => found.sort_by_key(|t| t.title.to_lowercase()),
            SortKey::Uses => found.sort_by(|a, b| b.uses.cmp(&a.uses)),
        }
        found
    }

    /// "3 templates in Criminal matching \"fir\""
    pub fn summary(&self, count: usize) -> String {
        let mut text = format!("{} {}", count, if count == 1 { "template" } else { "templates" });
        if self.category != ALL_CATEGORIES {
            text.push_str(&format!(" in {}", self.category));
        }
        if !self.search.is_empty() {
            text.push_str(&format!(" matching \"{}\"", self.search));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::Catalog;

    fn templates() -> Vec<Template> {
        Catalog::load().expect("embedded catalog parses").templates
    }

    fn titles(found: &[&Template]) -> Vec<String> {
        found.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn default_query_returns_catalog_order() {
        let all = templates();
        let found = TemplateQuery::default().apply(&all);
        assert_eq!(found.len(), 8);
        assert_eq!(found[0].title, "RTI Application");
        assert_eq!(found[7].title, "Property Verification");
    }

    #[test]
    fn category_filter() {
        let all = templates();
        let query = TemplateQuery {
            category: "Criminal".into(),
            ..TemplateQuery::default()
        };
        assert_eq!(titles(&query.apply(&all)), vec!["Police Complaint", "FIR Copy Application"]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let all = templates();
        let query = TemplateQuery {
            search: "POLICE".into(),
            ..TemplateQuery::default()
        };
        // "FIR Copy Application" mentions the police station in its description
        assert_eq!(titles(&query.apply(&all)), vec!["Police Complaint", "FIR Copy Application"]);
    }

    #[test]
    fn category_and_search_combine() {
        let all = templates();
        let query = TemplateQuery {
            category: "Property".into(),
            search: "verif".into(),
            sort: SortKey::Default,
        };
        assert_eq!(titles(&query.apply(&all)), vec!["Property Verification"]);
    }

    #[test]
    fn sorting() {
        let all = templates();
        let by = |sort| {
            TemplateQuery {
                sort,
                ..TemplateQuery::default()
            }
            .apply(&all)
            .iter()
            .map(|t| t.id)
            .collect::<Vec<_>>()
        };

        assert_eq!(by(SortKey::Popularity), vec![4, 1, 3, 6, 8, 2, 5, 7]);
        assert_eq!(by(SortKey::Uses), vec![4, 6, 1, 3, 8, 2, 7, 5]);
        assert_eq!(by(SortKey::Name), vec![3, 7, 6, 2, 8, 4, 1, 5]);
    }

    #[test]
    fn no_matches() {
        let all = templates();
        let query = TemplateQuery {
            search: "maritime salvage".into(),
            ..TemplateQuery::default()
        };
        assert!(query.apply(&all).is_empty());
        assert_eq!(query.summary(0), "0 templates matching \"maritime salvage\"");
    }

    #[test]
    fn summary_text() {
        assert_eq!(TemplateQuery::default().summary(8), "8 templates");
        let query = TemplateQuery {
            category: "Civil".into(),
            search: "notice".into(),
            sort: SortKey::Default,
        };
        assert_eq!(query.summary(1), "1 template in Civil matching \"notice\"");
    }

    #[test]
    fn sort_key_values_round_trip_through_select() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::from_value(key.value()), key);
        }
        assert_eq!(SortKey::from_value("bogus"), SortKey::Default);
    }
}
