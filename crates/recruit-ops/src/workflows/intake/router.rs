use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::firms::{parse_firm_lines, FirmDraft};
use super::phone::normalize_phone_number;
use super::validation::{AppointmentDraft, CandidateIntake, ValidationErrors};

#[derive(Debug, Deserialize)]
pub(crate) struct PhoneRequest {
    #[serde(default)]
    pub(crate) phone: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FirmLinesRequest {
    #[serde(default)]
    pub(crate) text: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct FirmLinesResponse {
    pub(crate) firms: Vec<FirmDraft>,
}

/// Router for the form helpers shared by the dashboard and the mobile app.
pub fn intake_router() -> Router {
    Router::new()
        .route("/api/v1/intake/phone", post(phone_handler))
        .route("/api/v1/intake/firms", post(firm_lines_handler))
        .route("/api/v1/intake/candidates", post(candidate_intake_handler))
        .route("/api/v1/intake/appointments", post(appointment_handler))
}

pub(crate) async fn phone_handler(Json(request): Json<PhoneRequest>) -> Response {
    match normalize_phone_number(&request.phone) {
        Ok(phone) => (StatusCode::OK, Json(phone)).into_response(),
        Err(error) => {
            let payload = json!({
                "field": "phone",
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn firm_lines_handler(
    Json(request): Json<FirmLinesRequest>,
) -> Json<FirmLinesResponse> {
    Json(FirmLinesResponse {
        firms: parse_firm_lines(&request.text),
    })
}

pub(crate) async fn candidate_intake_handler(Json(form): Json<CandidateIntake>) -> Response {
    match form.validate() {
        Ok(candidate) => (StatusCode::OK, Json(candidate)).into_response(),
        Err(errors) => validation_failure(errors),
    }
}

pub(crate) async fn appointment_handler(Json(draft): Json<AppointmentDraft>) -> Response {
    match draft.validate() {
        Ok(appointment) => (StatusCode::OK, Json(appointment)).into_response(),
        Err(errors) => validation_failure(errors),
    }
}

fn validation_failure(errors: ValidationErrors) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds");
        let response = intake_router()
            .oneshot(request)
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn phone_endpoint_returns_e164_or_field_error() {
        let (status, body) =
            post_json("/api/v1/intake/phone", json!({ "phone": "2028347778" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "e164": "+12028347778" }));

        let (status, body) = post_json("/api/v1/intake/phone", json!({ "phone": "abc" })).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["field"], "phone");
    }

    #[tokio::test]
    async fn firms_endpoint_splits_lines() {
        let (status, body) = post_json(
            "/api/v1/intake/firms",
            json!({ "text": "  Firm A  \n\nFirm B\n" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "firms": [{ "name": "Firm A" }, { "name": "Firm B" }] })
        );
    }

    #[tokio::test]
    async fn candidate_intake_lists_field_errors() {
        let (status, body) = post_json(
            "/api/v1/intake/candidates",
            json!({
                "name": "Avery",
                "email": "avery@example.com",
                "mobile": "2028347778",
                "preferredCities": ["Boston"],
                "practiceAreas": [],
            }),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["errors"][0]["field"], "practiceAreas");
    }

    #[tokio::test]
    async fn appointment_endpoint_accepts_valid_draft() {
        let (status, body) = post_json(
            "/api/v1/intake/appointments",
            json!({
                "candidateUserId": "cand-1",
                "title": "Firm interview",
                "startsAt": "2026-03-02T15:00:00Z",
                "endsAt": "2026-03-02T16:00:00Z",
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["startsAt"], "2026-03-02T15:00:00Z");
    }
}
