use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::domain::{BasicCandidateQuery, Candidate, CandidatePreferences, StaffCandidateQuery};
use super::filter::{filter_candidates_by_search_city_practice, filter_staff_candidates};
use super::preferences::normalize_preferences;
use super::roster::CandidateRosterImporter;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub(crate) struct BasicSearchRequest {
    #[serde(default)]
    pub(crate) candidates: Vec<Candidate>,
    #[serde(default)]
    pub(crate) query: BasicCandidateQuery,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StaffSearchRequest {
    #[serde(default)]
    pub(crate) candidates: Vec<Candidate>,
    #[serde(default)]
    pub(crate) query: StaffCandidateQuery,
}

#[derive(Debug, Serialize)]
pub(crate) struct CandidateSearchResponse {
    pub(crate) total: usize,
    pub(crate) candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RosterSearchRequest {
    pub(crate) csv: String,
    #[serde(default)]
    pub(crate) query: StaffCandidateQuery,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NormalizePreferencesRequest {
    #[serde(default)]
    pub(crate) row: Value,
}

/// Router exposing the candidate filters to the dashboard and mobile clients.
pub fn candidate_router() -> Router {
    Router::new()
        .route("/api/v1/candidates/search", post(basic_search_handler))
        .route("/api/v1/candidates/staff-search", post(staff_search_handler))
        .route("/api/v1/candidates/roster-search", post(roster_search_handler))
        .route(
            "/api/v1/candidates/preferences/normalize",
            post(normalize_preferences_handler),
        )
}

pub(crate) async fn basic_search_handler(
    Json(request): Json<BasicSearchRequest>,
) -> Json<CandidateSearchResponse> {
    let matches = filter_candidates_by_search_city_practice(&request.candidates, &request.query);
    Json(CandidateSearchResponse {
        total: request.candidates.len(),
        candidates: matches.into_iter().cloned().collect(),
    })
}

pub(crate) async fn staff_search_handler(
    Json(request): Json<StaffSearchRequest>,
) -> Json<CandidateSearchResponse> {
    let matches = filter_staff_candidates(&request.candidates, &request.query);
    Json(CandidateSearchResponse {
        total: request.candidates.len(),
        candidates: matches.into_iter().cloned().collect(),
    })
}

pub(crate) async fn roster_search_handler(
    Json(request): Json<RosterSearchRequest>,
) -> Result<Json<CandidateSearchResponse>, AppError> {
    let roster = CandidateRosterImporter::from_reader(request.csv.as_bytes())?;
    let matches = filter_staff_candidates(&roster, &request.query);
    Ok(Json(CandidateSearchResponse {
        total: roster.len(),
        candidates: matches.into_iter().cloned().collect(),
    }))
}

pub(crate) async fn normalize_preferences_handler(
    Json(request): Json<NormalizePreferencesRequest>,
) -> Json<CandidatePreferences> {
    Json(normalize_preferences(&request.row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds");
        let response = candidate_router()
            .oneshot(request)
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn basic_search_filters_by_chip_union() {
        let (status, body) = post_json(
            "/api/v1/candidates/search",
            json!({
                "candidates": [
                    { "id": "c1", "name": "Avery", "preferredCities": ["Boston"] },
                    { "id": "c2", "name": "Blake", "practiceAreas": ["Tax", "Basket Weaving"] },
                    { "id": "c3", "name": "Casey", "preferredCities": "Boston" },
                ],
                "query": { "selectedCities": ["Boston"], "selectedPracticeAreas": ["Tax"] },
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        let ids: Vec<&str> = body["candidates"]
            .as_array()
            .expect("candidates array")
            .iter()
            .filter_map(|candidate| candidate["id"].as_str())
            .collect();
        assert_eq!(ids, vec!["c1", "c2"]);
        assert_eq!(body["candidates"][1]["practiceAreas"], json!(["Tax"]));
    }

    #[tokio::test]
    async fn malformed_record_fields_read_as_absent() {
        let (status, body) = post_json(
            "/api/v1/candidates/search",
            json!({
                "candidates": [
                    { "id": "c1", "name": "Avery" },
                    { "id": "c2", "assignedFirmIds": "firm-a", "mobile": ["202"] },
                    { "id": "c3", "name": 42, "assignedFirmIds": ["firm-a", 7, "firm-a"] },
                ],
                "query": {},
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        assert_eq!(body["candidates"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["candidates"][1]["assignedFirmIds"], json!([]));
        assert_eq!(body["candidates"][1]["mobile"], Value::Null);
        assert_eq!(body["candidates"][2]["name"], Value::Null);
        assert_eq!(body["candidates"][2]["assignedFirmIds"], json!(["firm-a"]));
    }

    #[tokio::test]
    async fn staff_search_understands_dropdown_labels() {
        let (status, body) = post_json(
            "/api/v1/candidates/staff-search",
            json!({
                "candidates": [
                    { "id": "c1", "assignedRecruiterUserId": "rec-1", "currentStatuses": ["Offer"] },
                    { "id": "c2", "currentStatuses": ["Offer"] },
                    { "id": "c3" },
                ],
                "query": { "assignedRecruiter": "none", "currentStatus": "Offer", "practice": "any" },
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["candidates"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["candidates"][0]["id"], "c2");
    }

    #[tokio::test]
    async fn unknown_status_selection_is_rejected() {
        let (status, _) = post_json(
            "/api/v1/candidates/staff-search",
            json!({ "candidates": [], "query": { "currentStatus": "Ghosted" } }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn roster_search_imports_csv_then_filters() {
        let (status, body) = post_json(
            "/api/v1/candidates/roster-search",
            json!({
                "csv": "id,name,cities,jd_degree_date\nc1,Avery,Boston,2019-05-20\nc2,Blake,Boston,2021-05-20\n",
                "query": { "preferredCities": ["Boston"], "jdYears": ["2021"] },
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["candidates"][0]["id"], "c2");
    }

    #[tokio::test]
    async fn roster_search_reports_unreadable_roster() {
        let (status, body) = post_json(
            "/api/v1/candidates/roster-search",
            json!({ "csv": "id,id\nc1,c2\n" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .is_some_and(|message| message.starts_with("roster error")));
    }

    #[tokio::test]
    async fn normalize_endpoint_returns_camel_case_pair() {
        let (status, body) = post_json(
            "/api/v1/candidates/preferences/normalize",
            json!({ "row": { "cities": ["Miami", "Miami"], "practice_area": "Energy" } }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "preferredCities": ["Miami"], "practiceAreas": ["Energy"] })
        );
    }
}
