// Query engine: country filter + free-text search over the catalog
use tracing::debug;

use crate::catalog::Catalog;
use crate::experience::Experience;

// Sentinel value used by the country dropdown for "no filter"
pub const ALL_COUNTRIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CountryFilter {
    #[default]
    All,
    Country(String),
}

impl CountryFilter {
    // Map the dropdown value onto a filter; "all" is the reset sentinel
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_COUNTRIES {
            CountryFilter::All
        } else {
            CountryFilter::Country(raw.to_string())
        }
    }

    fn matches(&self, experience: &Experience) -> bool {
        match self {
            CountryFilter::All => true,
            CountryFilter::Country(country) => experience.country == *country,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub country: CountryFilter,
    pub text: String,
}

// Extract experiences that match the given criteria, preserving catalog order
pub fn filter_experiences<'a>(catalog: &'a Catalog, criteria: &SearchCriteria) -> Vec<&'a Experience> {
    let query = criteria.text.trim().to_lowercase();

    let mut filtered = Vec::new();
    for experience in catalog.experiences() {
        if !criteria.country.matches(experience) {
            continue;
        }

        if !query.is_empty() {
            let haystack =
                format!("{} {}", experience.title, experience.description).to_lowercase();
            if !haystack.contains(&query) {
                continue;
            }
        }

        filtered.push(experience);
    }

    debug!(
        matches = filtered.len(),
        total = catalog.len(),
        "filtered catalog"
    );
    filtered
}
