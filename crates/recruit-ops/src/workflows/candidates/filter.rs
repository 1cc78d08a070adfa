use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use super::domain::{BasicCandidateQuery, Candidate, RecruiterFilter, StaffCandidateQuery};

/// Four-digit graduation year of an ISO `YYYY-MM-DD` date.
///
/// A time component after the date is tolerated. Anything unparseable has no year,
/// and a missing year never satisfies a year filter.
pub fn jd_year(date: Option<&str>) -> Option<String> {
    let trimmed = date?.trim();
    let day = trimmed.get(..10)?;
    if trimmed.len() > 10 && !trimmed[10..].starts_with(['T', ' ']) {
        return None;
    }

    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .ok()
        .filter(|parsed| (1000..=9999).contains(&parsed.year()))
        .map(|parsed| format!("{:04}", parsed.year()))
}

/// Candidate-facing filter: text search AND (any city OR any practice area OR any JD year).
///
/// With no chip selected every text match passes, and the input order is kept.
pub fn filter_candidates_by_search_city_practice<'a>(
    candidates: &'a [Candidate],
    query: &BasicCandidateQuery,
) -> Vec<&'a Candidate> {
    let needle = search_needle(&query.query);
    candidates
        .iter()
        .filter(|candidate| matches_text(candidate, &needle) && matches_chips(candidate, query))
        .collect()
}

/// Staff filter: text, recruiter, status, practice, firm, city and JD year must all match.
pub fn filter_staff_candidates<'a>(
    candidates: &'a [Candidate],
    query: &StaffCandidateQuery,
) -> Vec<&'a Candidate> {
    let needle = search_needle(&query.query);
    candidates
        .iter()
        .filter(|candidate| matches_staff(candidate, query, &needle))
        .collect()
}

impl BasicCandidateQuery {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        matches_text(candidate, &search_needle(&self.query)) && matches_chips(candidate, self)
    }
}

impl StaffCandidateQuery {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        matches_staff(candidate, self, &search_needle(&self.query))
    }
}

fn matches_staff(candidate: &Candidate, query: &StaffCandidateQuery, needle: &str) -> bool {
    matches_text(candidate, needle)
        && matches_recruiter(candidate, &query.assigned_recruiter)
        && query.current_status.admits(&candidate.current_statuses)
        && query.practice.admits(&candidate.practice_areas)
        && intersects_if_selected(&query.assigned_firm_ids, &candidate.assigned_firm_ids)
        && intersects_if_selected(&query.preferred_cities, &candidate.preferred_cities)
        && matches_jd_year(candidate, &query.jd_years)
}

fn search_needle(query: &str) -> String {
    query.trim().to_lowercase()
}

fn matches_text(candidate: &Candidate, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    [&candidate.name, &candidate.email, &candidate.mobile]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

fn matches_chips(candidate: &Candidate, query: &BasicCandidateQuery) -> bool {
    if !query.has_chip_selection() {
        return true;
    }

    let city_hit = candidate
        .preferred_cities
        .iter()
        .any(|city| query.selected_cities.contains(city));
    let practice_hit = candidate
        .practice_areas
        .iter()
        .any(|area| query.selected_practice_areas.contains(area));
    let year_hit = candidate
        .jd_year()
        .is_some_and(|year| query.selected_jd_years.contains(&year));

    city_hit || practice_hit || year_hit
}

fn matches_recruiter(candidate: &Candidate, filter: &RecruiterFilter) -> bool {
    match filter {
        RecruiterFilter::Any => true,
        RecruiterFilter::Unassigned => candidate.assigned_recruiter_user_id.is_none(),
        RecruiterFilter::Recruiter(id) => {
            candidate.assigned_recruiter_user_id.as_deref() == Some(id.as_str())
        }
    }
}

fn intersects_if_selected<T: Ord>(selected: &BTreeSet<T>, values: &[T]) -> bool {
    selected.is_empty() || values.iter().any(|value| selected.contains(value))
}

fn matches_jd_year(candidate: &Candidate, years: &BTreeSet<String>) -> bool {
    if years.is_empty() {
        return true;
    }
    candidate
        .jd_year()
        .is_some_and(|year| years.contains(&year))
}
