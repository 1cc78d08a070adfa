use clap::Args;
use recruit_ops::error::AppError;
use recruit_ops::workflows::candidates::{
    filter_candidates_by_search_city_practice, BasicCandidateQuery, Candidate,
    CandidateRosterImporter, City, PracticeArea, Vocabulary,
};
use recruit_ops::workflows::inbox::{
    format_relative_time_local, map_channels_to_inbox_rows, InboxRow, RawChannel,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CandidateSearchArgs {
    /// Roster CSV export to search
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Free-text match against name, email, and mobile
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// City chip to select (repeatable)
    #[arg(long = "city", value_parser = parse_label::<City>)]
    pub(crate) cities: Vec<City>,
    /// Practice area chip to select (repeatable)
    #[arg(long = "practice", value_parser = parse_label::<PracticeArea>)]
    pub(crate) practice_areas: Vec<PracticeArea>,
    /// JD graduation year chip to select (repeatable)
    #[arg(long = "jd-year")]
    pub(crate) jd_years: Vec<String>,
}

#[derive(Args, Debug)]
pub(crate) struct InboxRowsArgs {
    /// JSON file holding an array of exported channels
    #[arg(long)]
    pub(crate) input: PathBuf,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InboxRowView {
    #[serde(flatten)]
    row: InboxRow,
    relative_time: String,
}

fn parse_label<T: Vocabulary>(raw: &str) -> Result<T, String> {
    T::parse(raw.trim()).ok_or_else(|| {
        let known: Vec<&str> = T::ALL.iter().map(|value| value.label()).collect();
        format!("unknown option '{raw}' (expected one of: {})", known.join(", "))
    })
}

pub(crate) fn run_candidate_search(args: CandidateSearchArgs) -> Result<(), AppError> {
    let CandidateSearchArgs {
        csv,
        query,
        cities,
        practice_areas,
        jd_years,
    } = args;

    let roster = CandidateRosterImporter::from_path(&csv)?;
    let query = BasicCandidateQuery {
        query: query.unwrap_or_default(),
        selected_cities: cities.into_iter().collect(),
        selected_practice_areas: practice_areas.into_iter().collect(),
        selected_jd_years: jd_years.into_iter().map(|year| year.trim().to_string()).collect(),
    };

    let matches = filter_candidates_by_search_city_practice(&roster, &query);
    println!(
        "Candidate search: {} of {} candidates match",
        matches.len(),
        roster.len()
    );
    for line in candidate_lines(&matches) {
        println!("- {line}");
    }
    Ok(())
}

pub(crate) fn run_inbox_rows(args: InboxRowsArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let channels: Vec<RawChannel> = serde_json::from_str(&raw)?;
    let views = inbox_views(&channels);
    println!("{}", serde_json::to_string_pretty(&views)?);
    Ok(())
}

fn inbox_views(channels: &[RawChannel]) -> Vec<InboxRowView> {
    map_channels_to_inbox_rows(channels)
        .into_iter()
        .map(|row| {
            let relative_time = format_relative_time_local(&row.last_message_at);
            InboxRowView { row, relative_time }
        })
        .collect()
}

fn candidate_lines(candidates: &[&Candidate]) -> Vec<String> {
    candidates
        .iter()
        .map(|candidate| {
            let cities = join_labels(&candidate.preferred_cities);
            let practice = join_labels(&candidate.practice_areas);
            let jd_year = candidate.jd_year().unwrap_or_else(|| "n/a".to_string());
            format!(
                "{} ({}) | cities: {} | practice: {} | JD {}",
                candidate.name.as_deref().unwrap_or("Unnamed"),
                candidate.id,
                cities,
                practice,
                jd_year
            )
        })
        .collect()
}

fn join_labels<T: Vocabulary>(values: &[T]) -> String {
    if values.is_empty() {
        return "none".to_string();
    }
    values
        .iter()
        .map(|value| value.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labels_parse_exactly_and_list_alternatives() {
        assert_eq!(parse_label::<City>("Boston"), Ok(City::Boston));
        let err = parse_label::<City>("boston").expect_err("case sensitive");
        assert!(err.contains("Washington, DC"));
    }

    #[test]
    fn candidate_lines_render_known_fields() {
        let candidate = Candidate {
            id: "c1".to_string(),
            name: Some("Avery Stone".to_string()),
            preferred_cities: vec![City::Boston, City::Miami],
            jd_degree_date: Some("2021-05-20".to_string()),
            ..Candidate::default()
        };
        assert_eq!(
            candidate_lines(&[&candidate]),
            vec!["Avery Stone (c1) | cities: Boston, Miami | practice: none | JD 2021"]
        );
    }

    #[test]
    fn inbox_views_keep_row_fields_and_add_label() {
        let channels: Vec<RawChannel> = serde_json::from_value(json!([
            {
                "id": "candidate-u1",
                "data": { "name": "Avery" },
                "state": { "messages": [{ "text": "Hi", "created_at": "2024-01-01T10:00:00Z" }] },
                "unread_count": 2,
            },
            { "id": "ops-room", "state": { "messages": [{ "text": "x" }] } },
        ]))
        .expect("channels parse");

        let views = inbox_views(&channels);
        assert_eq!(views.len(), 1);
        let payload = serde_json::to_value(&views[0]).expect("serializes");
        assert_eq!(payload["candidateUserId"], "u1");
        assert_eq!(payload["unreadCount"], 2);
        assert!(payload["relativeTime"].as_str().is_some_and(|label| !label.is_empty()));
    }
}
