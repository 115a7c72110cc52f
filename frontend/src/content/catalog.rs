use serde::de::DeserializeOwned;

use super::courtroom::Scenario;
use super::plans::Plan;
use super::templates::Template;
use super::testimonials::Testimonial;
use crate::error::CatalogError;

const TEMPLATES_JSON: &str = include_str!("../../data/templates.json");
const TESTIMONIALS_JSON: &str = include_str!("../../data/testimonials.json");
const SCENARIOS_JSON: &str = include_str!("../../data/scenarios.json");
const PLANS_JSON: &str = include_str!("../../data/plans.json");

/// Everything the page filters, sorts or scores. Shipped inside the wasm
/// bundle and parsed once at startup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub templates: Vec<Template>,
    pub testimonials: Vec<Testimonial>,
    pub scenarios: Vec<Scenario>,
    pub plans: Vec<Plan>,
}

impl Catalog {
    pub fn load() -> Result<Self, CatalogError> {
        Ok(Self {
            templates: parse("templates", TEMPLATES_JSON)?,
            testimonials: parse("testimonials", TESTIMONIALS_JSON)?,
            scenarios: parse("scenarios", SCENARIOS_JSON)?,
            plans: parse("plans", PLANS_JSON)?,
        })
    }
}

fn parse<T: DeserializeOwned>(name: &'static str, raw: &str) -> Result<T, CatalogError> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Parse { name, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.templates.len(), 8);
        assert_eq!(catalog.testimonials.len(), 6);
        assert_eq!(catalog.scenarios.len(), 3);
        assert_eq!(catalog.plans.len(), 3);
    }

    #[test]
    fn broken_json_names_the_catalog() {
        let err = parse::<Vec<Template>>("templates", "[{\"id\": 1}]").unwrap_err();
        assert!(err.to_string().starts_with("failed to parse the templates catalog"));
    }
}
