// Main library file for the travel experiences demo

// Export modules for each component of the demo
pub mod app;
pub mod booking;
pub mod catalog;
pub mod experience;
pub mod pricing;
pub mod search;

// Re-export key types for convenience
pub use app::{handle_event, AppState, DismissReason, Effect, Event, ModalState};
pub use booking::{simulate, BookingDraft, BookingReceipt, ANONYMOUS_TRAVELER, MOCK_BOOKING_NOTE};
pub use catalog::{load_sample_catalog, Catalog, CatalogError};
pub use experience::Experience;
pub use pricing::{compute_summary, round2, BookingSummary, COMMISSION_RATE};
pub use search::{filter_experiences, CountryFilter, SearchCriteria};
