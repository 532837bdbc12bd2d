use axum::http::Method;

use harness::{body_json, make_service, request};

#[tokio::test]
async fn health_returns_ok() {
    let service = make_service();
    let resp = request(&service.router, Method::GET, "/health", None).await;
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn status_reports_record_counts() {
    let service = make_service();
    let resp = request(&service.router, Method::GET, "/api/v1/status", None).await;
    assert_eq!(resp.status(), 200);

    let body = body_json(resp).await;
    assert_eq!(body["records"]["cases"], 3);
    assert_eq!(body["records"]["evidence"], 3);
    assert_eq!(body["records"]["collaboration_logs"], 2);
}

#[tokio::test]
async fn cases_listing_contains_the_seeded_records() {
    let service = make_service();
    let resp = request(&service.router, Method::GET, "/api/v1/cases", None).await;
    assert_eq!(resp.status(), 200);

    let body = body_json(resp).await;
    assert_eq!(body["total_cases"], 3);
    assert_eq!(body["cases"][0]["id"], "CASE-001");
    assert_eq!(body["cases"][1]["status"], "Under Review");
    assert_eq!(body["cases"][0]["evidence_count"], 2);
}

#[tokio::test]
async fn evidence_listing_filters_by_case_id() {
    let service = make_service();
    let resp =
        request(&service.router, Method::GET, "/api/v1/evidence?case_id=CASE-001", None).await;
    assert_eq!(resp.status(), 200);

    let body = body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn evidence_filter_with_no_matches_is_empty_not_an_error() {
    let service = make_service();
    let resp =
        request(&service.router, Method::GET, "/api/v1/evidence?case_id=CASE-404", None).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp).await, serde_json::json!([]));
}

#[tokio::test]
async fn per_case_evidence_route_matches_the_filter() {
    let service = make_service();
    let resp =
        request(&service.router, Method::GET, "/api/v1/cases/CASE-002/evidence", None).await;
    assert_eq!(resp.status(), 200);

    let body = body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["id"], "EVD-003");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let service = make_service();
    let resp = request(&service.router, Method::GET, "/api/v1/nope", None).await;
    assert_eq!(resp.status(), 404);
}
