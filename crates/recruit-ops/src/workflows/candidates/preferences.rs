use serde_json::{json, Value};

use super::domain::CandidatePreferences;
use super::vocabulary::{tokens_from_value, PracticeArea, Vocabulary};

/// Narrows a `candidate_preferences` row into valid vocabulary tokens.
///
/// `cities` and `practice_areas` are expected to be arrays; the legacy singular
/// `practice_area` is consulted only when `practice_areas` yields nothing valid.
/// Any other shape counts as "no preference".
pub fn normalize_preferences(row: &Value) -> CandidatePreferences {
    static ABSENT: Value = Value::Null;
    let field = |name: &str| row.get(name).unwrap_or(&ABSENT);

    let preferred_cities = tokens_from_value(field("cities"));

    let mut practice_areas = tokens_from_value::<PracticeArea>(field("practice_areas"));
    if practice_areas.is_empty() {
        if let Some(legacy) = field("practice_area").as_str().and_then(PracticeArea::parse) {
            practice_areas.push(legacy);
        }
    }

    CandidatePreferences {
        preferred_cities,
        practice_areas,
    }
}

impl CandidatePreferences {
    /// Re-wraps the pair in the row shape the preferences table stores.
    pub fn to_row(&self) -> Value {
        let cities: Vec<&str> = self.preferred_cities.iter().map(|city| city.label()).collect();
        let practice_areas: Vec<&str> = self
            .practice_areas
            .iter()
            .map(|area| area.label())
            .collect();
        json!({ "cities": cities, "practice_areas": practice_areas })
    }
}
