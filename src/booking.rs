// Booking draft and mock-booking simulation
use serde::Serialize;
use tracing::info;

use crate::experience::Experience;
use crate::pricing::{compute_summary, BookingSummary};

// Receipt name used when the traveler leaves the name field blank
pub const ANONYMOUS_TRAVELER: &str = "Anonymous";

// Fixed note shown on every receipt; no payment ever happens in this demo
pub const MOCK_BOOKING_NOTE: &str =
    "Simulation complete - this is a mock booking (no payment taken)";

// Transient per-modal-session input state, replaced wholesale when a
// different experience is opened and dropped when the modal closes
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    pub experience_id: String,
    pub traveler_name: String,
    pub traveler_count: u32,
    pub price_per_person: f64,
}

impl BookingDraft {
    // Preset form values for a freshly opened experience
    pub fn for_experience(experience: &Experience) -> Self {
        Self {
            experience_id: experience.id.clone(),
            traveler_name: String::new(),
            traveler_count: 1,
            price_per_person: experience.price,
        }
    }

    pub fn summary(&self) -> BookingSummary {
        compute_summary(self.traveler_count, self.price_per_person)
    }
}

// Display-only result of a simulated booking, never persisted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingReceipt {
    pub traveler_name: String,
    pub experience_title: String,
    pub traveler_count: u32,
    pub total: f64,
    pub commission: f64,
    pub note: &'static str,
}

// All inputs degrade to safe defaults, so simulation cannot fail
pub fn simulate(draft: &BookingDraft, experience: &Experience) -> BookingReceipt {
    let name = draft.traveler_name.trim();
    let traveler_name = if name.is_empty() {
        ANONYMOUS_TRAVELER.to_string()
    } else {
        name.to_string()
    };

    let summary = draft.summary();

    info!(
        experience = %experience.id,
        travelers = draft.traveler_count,
        total = summary.total,
        "booking simulated"
    );

    BookingReceipt {
        traveler_name,
        experience_title: experience.title.clone(),
        traveler_count: draft.traveler_count,
        total: summary.total,
        commission: summary.commission,
        note: MOCK_BOOKING_NOTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, SAMPLE_CATALOG_JSON};
    use test_case::test_case;

    fn sample_catalog() -> Catalog {
        Catalog::from_json(SAMPLE_CATALOG_JSON).unwrap()
    }

    #[test]
    fn test_draft_presets_from_experience() {
        let catalog = sample_catalog();
        let experience = catalog.find("bd-1").unwrap();

        let draft = BookingDraft::for_experience(experience);
        assert_eq!(draft.experience_id, "bd-1");
        assert_eq!(draft.traveler_name, "");
        assert_eq!(draft.traveler_count, 1);
        assert_eq!(draft.price_per_person, 45.00);
    }

    #[test]
    fn test_simulated_receipt_contents() {
        let catalog = sample_catalog();
        let experience = catalog.find("cn-1").unwrap();

        let mut draft = BookingDraft::for_experience(experience);
        draft.traveler_name = "Rafiq".to_string();
        draft.traveler_count = 3;

        let receipt = simulate(&draft, experience);
        assert_eq!(receipt.traveler_name, "Rafiq");
        assert_eq!(
            receipt.experience_title,
            "Historic Beijing Walk & Hutong Food Tour"
        );
        assert_eq!(receipt.traveler_count, 3);
        assert_eq!(receipt.total, 255.00);
        assert_eq!(receipt.commission, 25.50);
        assert_eq!(receipt.note, MOCK_BOOKING_NOTE);
    }

    #[test_case("", "Anonymous"; "#1 blank name")]
    #[test_case("   ", "Anonymous"; "#2 whitespace-only name")]
    #[test_case("  Alice  ", "Alice"; "#3 name is trimmed")]
    #[test_case("Bob", "Bob"; "#4 plain name kept")]
    fn test_receipt_traveler_name(input: &str, expected: &str) {
        let catalog = sample_catalog();
        let experience = catalog.find("kr-2").unwrap();

        let mut draft = BookingDraft::for_experience(experience);
        draft.traveler_name = input.to_string();

        assert_eq!(simulate(&draft, experience).traveler_name, expected);
    }

    #[test]
    fn test_receipt_serializes_for_display() {
        let catalog = sample_catalog();
        let experience = catalog.find("bd-2").unwrap();

        let draft = BookingDraft::for_experience(experience);
        let receipt = simulate(&draft, experience);

        let json = serde_json::to_string(&receipt).unwrap();
        assert!(json.contains("\"traveler_name\":\"Anonymous\""));
        assert!(json.contains("\"total\":150.0"));
        assert!(json.contains("no payment taken"));
    }

    #[test]
    fn test_zero_travelers_yield_zero_totals() {
        let catalog = sample_catalog();
        let experience = catalog.find("cn-2").unwrap();

        let mut draft = BookingDraft::for_experience(experience);
        draft.traveler_count = 0;

        let receipt = simulate(&draft, experience);
        assert_eq!(receipt.total, 0.00);
        assert_eq!(receipt.commission, 0.00);
    }
}
