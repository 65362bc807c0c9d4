// Immutable in-memory catalog of experiences
use std::collections::HashSet;

use thiserror::Error;

use crate::experience::Experience;

// Error types for catalog construction
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate experience id: {0}")]
    DuplicateId(String),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

// Fixed at startup and never mutated afterwards
#[derive(Debug, Clone)]
pub struct Catalog {
    experiences: Vec<Experience>,
}

impl Catalog {
    // Build a catalog, rejecting duplicate ids
    pub fn new(experiences: Vec<Experience>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for experience in &experiences {
            if !seen.insert(experience.id.clone()) {
                return Err(CatalogError::DuplicateId(experience.id.clone()));
            }
        }
        Ok(Self { experiences })
    }

    // Parse a JSON array of experiences and validate it
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let experiences: Vec<Experience> = serde_json::from_str(json)?;
        Self::new(experiences)
    }

    // Lookup by id; unknown ids yield None, callers treat that as a no-op
    pub fn find(&self, id: &str) -> Option<&Experience> {
        self.experiences.iter().find(|e| e.id == id)
    }

    // All entries in original order
    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    // Distinct country labels in first-seen order, for the filter dropdown
    pub fn countries(&self) -> Vec<&str> {
        let mut countries: Vec<&str> = Vec::new();
        for experience in &self.experiences {
            if !countries.contains(&experience.country.as_str()) {
                countries.push(&experience.country);
            }
        }
        countries
    }

    pub fn len(&self) -> usize {
        self.experiences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiences.is_empty()
    }
}

// Helper to load the sample catalog shipped with the demo
pub fn load_sample_catalog() -> Result<Catalog, CatalogError> {
    let json = std::fs::read_to_string(SAMPLE_CATALOG_PATH)?;
    Catalog::from_json(&json)
}

// Sample file path (the actual file is stored in the samples directory)
pub const SAMPLE_CATALOG_PATH: &str = "samples/experiences.json";

// A small sample for inline testing
pub const SAMPLE_CATALOG_JSON: &str = r#"[
  {
    "id": "cn-1",
    "country": "China",
    "title": "Historic Beijing Walk & Hutong Food Tour",
    "description": "Discover Beijing's hutongs, local snacks, and a guided walk through heritage alleys.",
    "price": 85.00,
    "duration": "1 day"
  },
  {
    "id": "cn-2",
    "country": "China",
    "title": "Yangtze River Eco-Cruise (sample)",
    "description": "Short eco-focused cruise with local guides and community visits.",
    "price": 220.00,
    "duration": "3 days"
  },
  {
    "id": "bd-1",
    "country": "Bangladesh",
    "title": "Dhaka Street Food & Sari Market Experience",
    "description": "Explore Dhaka's lively markets, street food, and cultural landmarks.",
    "price": 45.00,
    "duration": "Half day"
  },
  {
    "id": "bd-2",
    "country": "Bangladesh",
    "title": "Sundarbans Boat & Wildlife Intro",
    "description": "A short guided boat tour to learn about mangrove conservation and wildlife.",
    "price": 150.00,
    "duration": "1 day"
  },
  {
    "id": "kr-1",
    "country": "South Korea",
    "title": "Seoul Cultural Immersion: Palaces & Hanbok",
    "description": "Visit palaces, try Hanbok, and enjoy a traditional tea ceremony.",
    "price": 70.00,
    "duration": "1 day"
  },
  {
    "id": "kr-2",
    "country": "South Korea",
    "title": "Jeju Food & Nature Mini Retreat",
    "description": "Local farms, citrus tastings, and coastal walks in Jeju Island.",
    "price": 180.00,
    "duration": "2 days"
  }
]"#;
