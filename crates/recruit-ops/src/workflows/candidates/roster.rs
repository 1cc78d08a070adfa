use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::{json, Value};

use super::domain::Candidate;
use super::preferences::normalize_preferences;
use super::vocabulary::{FirmStatus, Vocabulary};

/// Failure to read a roster export. Cell-level problems never surface here.
#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read candidate roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid candidate roster CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Loads candidate rows from the dashboard's CSV export.
pub struct CandidateRosterImporter;

impl CandidateRosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, RosterImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut candidates = Vec::new();
        for (index, row) in csv_reader.deserialize::<RosterRow>().enumerate() {
            let row = row?;
            let id = row.id.clone().unwrap_or_else(|| format!("row-{}", index + 1));
            candidates.push(row.into_candidate(id));
        }

        tracing::debug!(count = candidates.len(), "imported candidate roster");
        Ok(candidates)
    }
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(default, deserialize_with = "blank_as_none")]
    id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    email: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    mobile: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    cities: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    practice_areas: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    practice_area: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    jd_degree_date: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    assigned_recruiter_user_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    current_statuses: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    assigned_firm_ids: Option<String>,
}

impl RosterRow {
    fn into_candidate(self, id: String) -> Candidate {
        let preferences = normalize_preferences(&json!({
            "cities": split_list(self.cities.as_deref()),
            "practice_areas": split_list(self.practice_areas.as_deref()),
            "practice_area": self.practice_area.map_or(Value::Null, Value::String),
        }));

        let mut current_statuses = Vec::new();
        for status in split_list(self.current_statuses.as_deref())
            .into_iter()
            .filter_map(|label| FirmStatus::parse(&label))
        {
            if !current_statuses.contains(&status) {
                current_statuses.push(status);
            }
        }

        Candidate {
            id,
            name: self.name,
            email: self.email,
            mobile: self.mobile,
            preferred_cities: preferences.preferred_cities,
            practice_areas: preferences.practice_areas,
            jd_degree_date: self.jd_degree_date,
            assigned_recruiter_user_id: self.assigned_recruiter_user_id,
            current_statuses,
            assigned_firm_ids: split_list(self.assigned_firm_ids.as_deref()),
        }
    }
}

/// List cells use `;` or `|` between entries.
fn split_list(cell: Option<&str>) -> Vec<String> {
    cell.map(|value| {
        value
            .split([';', '|'])
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
