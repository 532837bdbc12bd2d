//! Case Tracking API
//!
//! HTTP endpoints over the case-core domain:
//! - Case and evidence intake (multipart submissions)
//! - Case and evidence listings
//! - Canned analysis lookups
//! - Collaboration log entries
//! - Stored evidence file serving

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use case_core::analysis::{self, AnalysisCategory, AnalysisReport};
use case_core::coordinator::{self, FilePayload, Submission, SubmissionOutcome};
use case_core::model::{Case, CollaborationLog, Evidence};
use case_core::store::{NewCase, DEFAULT_USER};
use case_core::CaseError;

use crate::AppState;

// Request/Response Models

/// Case fields of a submission, validated before anything is appended
#[derive(Debug, Default, Deserialize, Validate)]
pub struct NewCaseRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 40, message = "Date is required"))]
    pub date: String,

    pub location: Option<String>,
    pub description: Option<String>,
}

/// Query parameters for the evidence listing
#[derive(Debug, Default, Deserialize)]
pub struct EvidenceQuery {
    pub case_id: Option<String>,
}

/// Analysis request
#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub analysis_type: String,
    pub case_id: String,
}

/// One analysis run; the report itself is canned and never persisted
#[derive(Debug, Serialize)]
pub struct AnalysisRun {
    pub case_id: String,
    pub category: AnalysisCategory,
    pub result: AnalysisReport,
    pub timestamp: DateTime<Utc>,
}

/// Collaboration log append request
#[derive(Debug, Deserialize)]
pub struct CollaborationRequest {
    pub case_id: String,
    pub user: Option<String>,
    pub action: String,
    #[serde(default)]
    pub details: String,
}

/// Case listing with the dashboard total
#[derive(Debug, Serialize)]
pub struct CaseListResponse {
    pub total_cases: usize,
    pub cases: Vec<Case>,
}

// Utility functions

fn multipart_error(err: MultipartError, limit_bytes: u64) -> CaseError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        CaseError::PayloadTooLarge { limit_bytes }
    } else {
        CaseError::InvalidRequest { reason: err.body_text() }
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// API Endpoints

/// Liveness endpoint
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "case-service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Service status summary with record counts and the endpoint inventory
pub async fn status(State(state): State<AppState>) -> Json<serde_json::Value> {
    let (cases, evidence, logs) = state.store.counts().await;
    Json(serde_json::json!({
        "service": "case-service",
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
        "records": {
            "cases": cases,
            "evidence": evidence,
            "collaboration_logs": logs,
        },
        "endpoints": {
            "cases": ["GET /api/v1/cases", "GET /api/v1/cases/{case_id}/evidence"],
            "submissions": ["POST /api/v1/submissions"],
            "evidence": ["GET /api/v1/evidence", "GET /uploads/{filename}"],
            "analysis": ["POST /api/v1/analysis"],
            "collaboration": ["GET /api/v1/collaboration", "POST /api/v1/collaboration"],
        },
    }))
}

/// Ordered case listing
pub async fn list_cases(State(state): State<AppState>) -> Json<CaseListResponse> {
    let cases = state.store.list_cases().await;
    Json(CaseListResponse { total_cases: cases.len(), cases })
}

/// Create a case and/or upload evidence files in one multipart submission.
///
/// Recognized fields: `case_title`, `case_date`, `case_location`,
/// `case_description`, `case_id`, `evidence_notes`, `submitted_by`, and
/// repeated `evidence_files` file parts. Per-file rejections are reported
/// in the outcome, not raised.
///
/// # Errors
///
/// - `invalid_case_input` when case fields are present but incomplete
/// - `missing_case_reference` for files without any case to attach to
/// - `payload_too_large` when the transport limit is exceeded
pub async fn submit_case_and_evidence(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SubmissionOutcome>), CaseError> {
    let limit = state.intake.max_bytes();

    let mut title = None;
    let mut date = None;
    let mut location = None;
    let mut description = None;
    let mut case_id = None;
    let mut notes = String::new();
    let mut submitted_by = None;
    let mut files = Vec::new();

    while let Some(field) =
        multipart.next_field().await.map_err(|err| multipart_error(err, limit))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "evidence_files" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes =
                    field.bytes().await.map_err(|err| multipart_error(err, limit))?;
                files.push(FilePayload { file_name, bytes: bytes.to_vec() });
            }
            "case_title" => {
                title = non_empty(field.text().await.map_err(|err| multipart_error(err, limit))?);
            }
            "case_date" => {
                date = non_empty(field.text().await.map_err(|err| multipart_error(err, limit))?);
            }
            "case_location" => {
                location =
                    non_empty(field.text().await.map_err(|err| multipart_error(err, limit))?);
            }
            "case_description" => {
                description =
                    non_empty(field.text().await.map_err(|err| multipart_error(err, limit))?);
            }
            "case_id" => {
                case_id =
                    non_empty(field.text().await.map_err(|err| multipart_error(err, limit))?);
            }
            "evidence_notes" => {
                notes = field.text().await.map_err(|err| multipart_error(err, limit))?;
            }
            "submitted_by" => {
                submitted_by =
                    non_empty(field.text().await.map_err(|err| multipart_error(err, limit))?);
            }
            _ => {}
        }
    }

    let case = if title.is_some() || date.is_some() || location.is_some() || description.is_some()
    {
        let request = NewCaseRequest {
            title: title.unwrap_or_default(),
            date: date.unwrap_or_default(),
            location,
            description,
        };
        request
            .validate()
            .map_err(|errors| CaseError::InvalidCaseInput { reason: errors.to_string() })?;
        Some(NewCase {
            title: request.title,
            date: request.date,
            location: request.location,
            description: request.description,
        })
    } else {
        None
    };

    let outcome = coordinator::submit(
        &state.store,
        &state.intake,
        Submission { case, case_id, files, notes, submitted_by },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(outcome)))
}

/// Ordered evidence listing, optionally filtered by `case_id`. A filter
/// with no matches yields an empty list.
pub async fn list_evidence(
    State(state): State<AppState>,
    Query(query): Query<EvidenceQuery>,
) -> Json<Vec<Evidence>> {
    Json(state.store.list_evidence(query.case_id.as_deref()).await)
}

/// Evidence attached to one case
pub async fn evidence_for_case(
    State(state): State<AppState>,
    Path(case_id): Path<String>,
) -> Json<Vec<Evidence>> {
    Json(state.store.list_evidence(Some(&case_id)).await)
}

/// Run a canned analysis for a case. The result is returned to the caller
/// and deliberately not stored.
pub async fn run_analysis(Json(request): Json<AnalysisRequest>) -> Json<AnalysisRun> {
    let category = AnalysisCategory::from_selector(&request.analysis_type);
    let result = analysis::run_analysis(category);
    info!(case_id = %request.case_id, ?category, "analysis completed");
    Json(AnalysisRun { case_id: request.case_id, category, result, timestamp: Utc::now() })
}

/// Ordered collaboration log listing
pub async fn list_collaboration(State(state): State<AppState>) -> Json<Vec<CollaborationLog>> {
    Json(state.store.list_logs().await)
}

/// Append a collaboration log entry. The user defaults to "User"; the
/// referenced case is not checked for existence.
pub async fn add_collaboration(
    State(state): State<AppState>,
    Json(request): Json<CollaborationRequest>,
) -> (StatusCode, Json<CollaborationLog>) {
    let user = request.user.as_deref().filter(|u| !u.is_empty()).unwrap_or(DEFAULT_USER);
    let log = state
        .store
        .append_log(&request.case_id, user, &request.action, &request.details)
        .await;
    info!(log_id = %log.id, case_id = %log.case_id, "collaboration log appended");
    (StatusCode::CREATED, Json(log))
}

/// Serve a stored evidence file verbatim
///
/// # Errors
///
/// Returns `not_found` for unknown names and for anything resembling a
/// path instead of an opaque stored name.
pub async fn uploaded_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, CaseError> {
    let bytes = state.intake.open(&filename).await?;
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));
    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static("application/octet-stream")),
        (header::CONTENT_DISPOSITION, disposition),
    ];
    Ok((headers, bytes).into_response())
}
