//! Candidate records, preference normalization, and the list filters behind the
//! candidate-facing search and the staff dashboard.

pub mod domain;
mod filter;
mod preferences;
pub mod roster;
pub mod router;
pub mod vocabulary;

pub use domain::{
    BasicCandidateQuery, Candidate, CandidatePreferences, RecruiterFilter, Selection,
    StaffCandidateQuery,
};
pub use filter::{filter_candidates_by_search_city_practice, filter_staff_candidates, jd_year};
pub use preferences::normalize_preferences;
pub use roster::{CandidateRosterImporter, RosterImportError};
pub use router::candidate_router;
pub use vocabulary::{tokens_from_value, City, FirmStatus, PracticeArea, Vocabulary};
