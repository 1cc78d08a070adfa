use std::collections::BTreeSet;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::vocabulary::{
    lenient_string, lenient_strings, lenient_tokens, City, FirmStatus, PracticeArea, Vocabulary,
};

/// Candidate row as delivered by the database client; read-only to the filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "lenient_tokens")]
    pub preferred_cities: Vec<City>,
    #[serde(default, deserialize_with = "lenient_tokens")]
    pub practice_areas: Vec<PracticeArea>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub jd_degree_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assigned_recruiter_user_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_tokens")]
    pub current_statuses: Vec<FirmStatus>,
    #[serde(default, deserialize_with = "lenient_strings")]
    pub assigned_firm_ids: Vec<String>,
}

impl Candidate {
    /// Graduation year derived from `jd_degree_date`.
    pub fn jd_year(&self) -> Option<String> {
        super::jd_year(self.jd_degree_date.as_deref())
    }
}

/// Normalized preference pair produced from an untrusted preferences row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePreferences {
    pub preferred_cities: Vec<City>,
    pub practice_areas: Vec<PracticeArea>,
}

/// Candidate-facing query: free text plus OR-combined chip groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasicCandidateQuery {
    pub query: String,
    pub selected_cities: BTreeSet<City>,
    pub selected_practice_areas: BTreeSet<PracticeArea>,
    pub selected_jd_years: BTreeSet<String>,
}

impl BasicCandidateQuery {
    pub fn has_chip_selection(&self) -> bool {
        !self.selected_cities.is_empty()
            || !self.selected_practice_areas.is_empty()
            || !self.selected_jd_years.is_empty()
    }
}

/// Staff dashboard query; every constraint is AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffCandidateQuery {
    pub query: String,
    pub assigned_recruiter: RecruiterFilter,
    pub current_status: Selection<FirmStatus>,
    pub practice: Selection<PracticeArea>,
    pub assigned_firm_ids: BTreeSet<String>,
    pub preferred_cities: BTreeSet<City>,
    pub jd_years: BTreeSet<String>,
}

/// Recruiter dropdown: `"any"`, `"none"`, or a recruiter user id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecruiterFilter {
    #[default]
    Any,
    Unassigned,
    Recruiter(String),
}

impl RecruiterFilter {
    pub fn from_label(value: &str) -> Self {
        match value {
            "any" | "" => Self::Any,
            "none" => Self::Unassigned,
            id => Self::Recruiter(id.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Any => "any",
            Self::Unassigned => "none",
            Self::Recruiter(id) => id,
        }
    }
}

impl Serialize for RecruiterFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for RecruiterFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_label(&raw))
    }
}

/// Single-choice dropdown over a vocabulary, where `"any"` disables the constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    Any,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::Any
    }
}

impl<T: Vocabulary> Selection<T> {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "any" | "" => Some(Self::Any),
            other => T::parse(other).map(Self::Only),
        }
    }

    pub fn admits(&self, values: &[T]) -> bool {
        match self {
            Self::Any => true,
            Self::Only(selected) => values.contains(selected),
        }
    }
}

impl<T: Vocabulary> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Any => serializer.serialize_str("any"),
            Self::Only(value) => serializer.serialize_str(value.label()),
        }
    }
}

impl<'de, T: Vocabulary> Deserialize<'de> for Selection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown selection '{raw}'")))
    }
}
