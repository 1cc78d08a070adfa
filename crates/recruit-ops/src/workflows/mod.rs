pub mod candidates;
pub mod inbox;
pub mod intake;

use axum::Router;

/// All workflow routes, without the operational endpoints the binary adds.
pub fn api_router() -> Router {
    candidates::candidate_router()
        .merge(inbox::inbox_router())
        .merge(intake::intake_router())
}
