//! Form helpers: phone normalization, bulk firm entry, and the profile and
//! appointment validation schemas.

mod firms;
mod phone;
pub mod router;
pub mod validation;

pub use firms::{parse_firm_lines, FirmDraft};
pub use phone::{normalize_phone_number, PhoneError, PhoneNumber};
pub use router::intake_router;
pub use validation::{
    AppointmentDraft, CandidateIntake, FieldError, ValidatedAppointment, ValidatedCandidate,
    ValidationErrors, MAX_PRACTICE_AREAS,
};
