//! Application router

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::case_api;
use crate::AppState;

/// Create the main application router
pub fn app(state: AppState) -> Router {
    // Multipart bodies carry whole evidence files plus form fields, so the
    // transport limit leaves headroom over the per-file cap.
    let body_limit = usize::try_from(state.intake.max_bytes())
        .unwrap_or(usize::MAX)
        .saturating_add(1024 * 1024);

    Router::new()
        .route("/health", get(case_api::health))
        .route("/api/v1/status", get(case_api::status))
        .route("/api/v1/cases", get(case_api::list_cases))
        .route("/api/v1/cases/:case_id/evidence", get(case_api::evidence_for_case))
        .route("/api/v1/submissions", post(case_api::submit_case_and_evidence))
        .route("/api/v1/evidence", get(case_api::list_evidence))
        .route("/api/v1/analysis", post(case_api::run_analysis))
        .route(
            "/api/v1/collaboration",
            get(case_api::list_collaboration).post(case_api::add_collaboration),
        )
        .route("/uploads/:filename", get(case_api::uploaded_file))
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}
