use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::channel::RawChannel;
use super::mapper::{map_channels_to_inbox_rows, InboxRow};

#[derive(Debug, Deserialize)]
pub(crate) struct InboxRowsRequest {
    #[serde(default)]
    pub(crate) channels: Vec<RawChannel>,
}

#[derive(Debug, Serialize)]
pub(crate) struct InboxRowsResponse {
    pub(crate) rows: Vec<InboxRow>,
}

/// Router mapping chat channel snapshots to inbox rows.
pub fn inbox_router() -> Router {
    Router::new().route("/api/v1/inbox/rows", post(inbox_rows_handler))
}

pub(crate) async fn inbox_rows_handler(
    Json(request): Json<InboxRowsRequest>,
) -> Json<InboxRowsResponse> {
    Json(InboxRowsResponse {
        rows: map_channels_to_inbox_rows(&request.channels),
    })
}
