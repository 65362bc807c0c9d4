// Application state and event handling for the presentation shell
//
// The shell owns the single mutable AppState and forwards user interactions
// as Events; handle_event returns the side-effect instructions the shell
// must carry out. All rendering stays outside this crate's core.
use tracing::{debug, warn};

use crate::booking::{simulate, BookingDraft, BookingReceipt};
use crate::catalog::Catalog;
use crate::pricing::{coerce_amount, coerce_count, BookingSummary};
use crate::search::{filter_experiences, CountryFilter, SearchCriteria};

// Placeholder link to the external prototype document
pub const PROTOTYPE_DOC_URL: &str = "https://www.notion.so/your-prototype-link";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseButton,
    Backdrop,
    EscapeKey,
}

// Input events of the externally observable contract
#[derive(Debug, Clone)]
pub enum Event {
    CountrySelected(String),
    SearchChanged(String),
    ShowAll,
    // Details and book actions both open the modal for the given id
    ExperienceOpened(String),
    ModalDismissed(DismissReason),
    TravelerNameChanged(String),
    // Count and price arrive as raw form input and are coerced on receipt
    TravelerCountChanged(String),
    PricePerPersonChanged(String),
    BookingSubmitted,
    ExternalLinkRequested,
}

// Side-effect instructions for the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RenderResults,
    OpenModal,
    CloseModal,
    RefreshSummary,
    ShowReceipt,
    OpenExternal(String),
}

#[derive(Debug, Clone, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        draft: BookingDraft,
        // Some(_) once a booking was simulated for this draft
        receipt: Option<BookingReceipt>,
    },
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub criteria: SearchCriteria,
    // None until the first query runs, afterwards matching experience ids in
    // catalog order; Some(empty) is the "no results" state
    pub results: Option<Vec<String>>,
    pub modal: ModalState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_draft(&self) -> Option<&BookingDraft> {
        match &self.modal {
            ModalState::Open { draft, .. } => Some(draft),
            ModalState::Closed => None,
        }
    }

    pub fn shown_receipt(&self) -> Option<&BookingReceipt> {
        match &self.modal {
            ModalState::Open { receipt, .. } => receipt.as_ref(),
            ModalState::Closed => None,
        }
    }

    // Live total and commission for the open draft
    pub fn current_summary(&self) -> Option<BookingSummary> {
        self.open_draft().map(BookingDraft::summary)
    }

    fn refresh_results(&mut self, catalog: &Catalog) {
        let matches = filter_experiences(catalog, &self.criteria)
            .into_iter()
            .map(|e| e.id.clone())
            .collect();
        self.results = Some(matches);
    }
}

// Apply one user interaction to the state and report what the shell must do
pub fn handle_event(state: &mut AppState, catalog: &Catalog, event: Event) -> Vec<Effect> {
    debug!(?event, "handling event");

    match event {
        Event::CountrySelected(raw) => {
            state.criteria.country = CountryFilter::parse(&raw);
            state.refresh_results(catalog);
            vec![Effect::RenderResults]
        }

        Event::SearchChanged(text) => {
            state.criteria.text = text;
            state.refresh_results(catalog);
            vec![Effect::RenderResults]
        }

        Event::ShowAll => {
            state.criteria = SearchCriteria::default();
            state.refresh_results(catalog);
            vec![Effect::RenderResults]
        }

        Event::ExperienceOpened(id) => match catalog.find(&id) {
            Some(experience) => {
                // A fresh draft replaces whatever was open before
                state.modal = ModalState::Open {
                    draft: BookingDraft::for_experience(experience),
                    receipt: None,
                };
                vec![Effect::OpenModal, Effect::RefreshSummary]
            }
            None => {
                warn!(%id, "ignoring open request for unknown experience");
                vec![]
            }
        },

        Event::ModalDismissed(_) => {
            state.modal = ModalState::Closed;
            vec![Effect::CloseModal]
        }

        Event::TravelerNameChanged(name) => {
            if let ModalState::Open { draft, .. } = &mut state.modal {
                draft.traveler_name = name;
            }
            vec![]
        }

        Event::TravelerCountChanged(raw) => {
            if let ModalState::Open { draft, .. } = &mut state.modal {
                draft.traveler_count = coerce_count(&raw);
                vec![Effect::RefreshSummary]
            } else {
                vec![]
            }
        }

        Event::PricePerPersonChanged(raw) => {
            if let ModalState::Open { draft, .. } = &mut state.modal {
                draft.price_per_person = coerce_amount(&raw);
                vec![Effect::RefreshSummary]
            } else {
                vec![]
            }
        }

        Event::BookingSubmitted => {
            if let ModalState::Open { draft, receipt } = &mut state.modal {
                match catalog.find(&draft.experience_id) {
                    Some(experience) => {
                        *receipt = Some(simulate(draft, experience));
                        vec![Effect::ShowReceipt]
                    }
                    None => {
                        warn!(id = %draft.experience_id, "draft references unknown experience");
                        vec![]
                    }
                }
            } else {
                vec![]
            }
        }

        Event::ExternalLinkRequested => {
            vec![Effect::OpenExternal(PROTOTYPE_DOC_URL.to_string())]
        }
    }
}
