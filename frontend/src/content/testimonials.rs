use serde::Deserialize;

pub const ALL_CATEGORIES: &str = "All";

pub const CATEGORIES: [&str; 4] = [
    ALL_CATEGORIES,
    "Legal Professionals",
    "Business Owners",
    "Students & Education",
];

pub const MAX_RATING: u8 = 5;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub content: String,
    pub detailed: String,
    pub rating: u8,
    pub category: String,
}

impl Testimonial {
    /// Filled state for each of the five stars.
    pub fn stars(&self) -> [bool; MAX_RATING as usize] {
        let mut stars = [false; MAX_RATING as usize];
        for (index, star) in stars.iter_mut().enumerate() {
            *star = index < usize::from(self.rating);
        }
        stars
    }
}

pub fn in_category<'a>(testimonials: &'a [Testimonial], category: &str) -> Vec<&'a Testimonial> {
    testimonials
        .iter()
        .filter(|t| category == ALL_CATEGORIES || t.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::catalog::Catalog;

    #[test]
    fn all_shows_everything() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(in_category(&catalog.testimonials, ALL_CATEGORIES).len(), 6);
    }

    #[test]
    fn filters_by_category() {
        let catalog = Catalog::load().unwrap();
        let names: Vec<_> = in_category(&catalog.testimonials, "Business Owners")
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["Vikram Mehta", "Rahul Kapoor"]);
        assert!(in_category(&catalog.testimonials, "Judges").is_empty());
    }

    #[test]
    fn every_category_has_entries() {
        let catalog = Catalog::load().unwrap();
        for category in CATEGORIES {
            assert!(!in_category(&catalog.testimonials, category).is_empty(), "{}", category);
        }
    }

    #[test]
    fn stars_follow_rating() {
        let catalog = Catalog::load().unwrap();
        let priya = &catalog.testimonials[1];
        assert_eq!(priya.stars(), [true, true, true, true, false]);
        assert_eq!(catalog.testimonials[0].stars(), [true; 5]);
    }
}
