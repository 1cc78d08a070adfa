//! Field-level validation for the candidate profile and appointment forms.
//!
//! Every rule runs, so a rejected form reports all of its problems at once.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::phone::normalize_phone_number;
use crate::workflows::candidates::{Candidate, City, PracticeArea, Vocabulary};

pub const MAX_PRACTICE_AREAS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details: Vec<String> = self
            .errors
            .iter()
            .map(|error| format!("{}: {}", error.field, error.message))
            .collect();
        write!(f, "validation failed ({})", details.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|error| error.field == field)
            .map(|error| error.message.as_str())
            .collect()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

/// Candidate profile form as submitted by the mobile app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateIntake {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub preferred_cities: Vec<String>,
    pub practice_areas: Vec<String>,
    pub jd_degree_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedCandidate {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub preferred_cities: Vec<City>,
    pub practice_areas: Vec<PracticeArea>,
    pub jd_degree_date: Option<NaiveDate>,
}

impl CandidateIntake {
    pub fn validate(&self) -> Result<ValidatedCandidate, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            errors.push("name", "Name is required");
        }

        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            errors.push("email", "Email is required");
        } else if !looks_like_email(&email) {
            errors.push("email", "Enter a valid email address");
        }

        let mobile = match normalize_phone_number(&self.mobile) {
            Ok(phone) => phone.e164,
            Err(err) => {
                errors.push("mobile", err.to_string());
                String::new()
            }
        };

        let preferred_cities =
            collect_tokens::<City>(&self.preferred_cities, "preferredCities", &mut errors);
        if self.preferred_cities.is_empty() {
            errors.push("preferredCities", "Select at least one city");
        }

        let practice_areas =
            collect_tokens::<PracticeArea>(&self.practice_areas, "practiceAreas", &mut errors);
        if self.practice_areas.is_empty() {
            errors.push("practiceAreas", "Select at least one practice area");
        } else if practice_areas.len() > MAX_PRACTICE_AREAS {
            errors.push(
                "practiceAreas",
                format!("Select at most {MAX_PRACTICE_AREAS} practice areas"),
            );
        }

        let jd_degree_date = match self
            .jd_degree_date
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
        {
            Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.push("jdDegreeDate", "Use the YYYY-MM-DD format");
                    None
                }
            },
            None => None,
        };

        errors.into_result(|| ValidatedCandidate {
            name,
            email,
            mobile,
            preferred_cities,
            practice_areas,
            jd_degree_date,
        })
    }
}

impl ValidatedCandidate {
    pub fn into_candidate(self, id: impl Into<String>) -> Candidate {
        Candidate {
            id: id.into(),
            name: Some(self.name),
            email: Some(self.email),
            mobile: Some(self.mobile),
            preferred_cities: self.preferred_cities,
            practice_areas: self.practice_areas,
            jd_degree_date: self
                .jd_degree_date
                .map(|date| date.format("%Y-%m-%d").to_string()),
            ..Candidate::default()
        }
    }
}

/// Interview or check-in scheduled between staff, a candidate, and optionally a firm.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentDraft {
    pub candidate_user_id: String,
    pub firm_id: Option<String>,
    pub title: String,
    pub starts_at: String,
    pub ends_at: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedAppointment {
    pub candidate_user_id: String,
    pub firm_id: Option<String>,
    pub title: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl AppointmentDraft {
    pub fn validate(&self) -> Result<ValidatedAppointment, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let candidate_user_id = self.candidate_user_id.trim().to_string();
        if candidate_user_id.is_empty() {
            errors.push("candidateUserId", "Choose a candidate");
        }

        let title = self.title.trim().to_string();
        if title.is_empty() {
            errors.push("title", "Title is required");
        }

        let starts_at = parse_instant(&self.starts_at, "startsAt", &mut errors);
        let ends_at = parse_instant(&self.ends_at, "endsAt", &mut errors);

        if let (Some(start), Some(end)) = (starts_at, ends_at) {
            if end <= start {
                errors.push("endsAt", "End time must be after the start time");
            }
        }

        let firm_id = trimmed_option(self.firm_id.as_deref());
        let notes = trimmed_option(self.notes.as_deref());

        match (starts_at, ends_at) {
            (Some(starts_at), Some(ends_at)) => errors.into_result(|| ValidatedAppointment {
                candidate_user_id,
                firm_id,
                title,
                starts_at,
                ends_at,
                notes,
            }),
            _ => Err(errors),
        }
    }
}

fn collect_tokens<T: Vocabulary>(
    raw: &[String],
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Vec<T> {
    let mut tokens = Vec::with_capacity(raw.len());
    for label in raw {
        match T::parse(label) {
            Some(token) if !tokens.contains(&token) => tokens.push(token),
            Some(_) => {}
            None => errors.push(field, format!("'{label}' is not a recognized option")),
        }
    }
    tokens
}

fn parse_instant(
    raw: &str,
    field: &'static str,
    errors: &mut ValidationErrors,
) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(field, "Date and time are required");
        return None;
    }
    match DateTime::parse_from_rfc3339(trimmed) {
        Ok(parsed) => Some(parsed.with_timezone(&Utc)),
        Err(_) => {
            errors.push(field, "Use an ISO-8601 date and time");
            None
        }
    }
}

fn trimmed_option(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
