use serde::{Deserialize, Serialize};

// Data structure for a bookable catalog entry
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Experience {
    pub id: String,
    pub country: String,
    pub title: String,
    pub description: String,
    // Per-traveler unit price in USD
    pub price: f64,
    // Free-text display string, e.g. "1 day" or "Half day"
    pub duration: String,
}
