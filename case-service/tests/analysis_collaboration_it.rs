use axum::http::Method;

use harness::{body_json, make_service, request};

#[tokio::test]
async fn fingerprint_analysis_returns_the_canned_report() {
    let service = make_service();
    let body = r#"{"analysis_type":"fingerprint","case_id":"CASE-001"}"#;
    let resp = request(&service.router, Method::POST, "/api/v1/analysis", Some(body)).await;
    assert_eq!(resp.status(), 200);

    let run = body_json(resp).await;
    assert_eq!(run["case_id"], "CASE-001");
    assert_eq!(run["result"]["confidence"], 94);
    assert_eq!(run["result"]["findings"].as_array().map(Vec::len), Some(3));
    assert!(run["result"]["findings"]
        .as_array()
        .unwrap()
        .contains(&serde_json::json!("6 points of comparison identified")));
}

#[tokio::test]
async fn unknown_category_falls_back_to_the_generic_report() {
    let service = make_service();
    let body = r#"{"analysis_type":"unknown_category","case_id":"CASE-001"}"#;
    let resp = request(&service.router, Method::POST, "/api/v1/analysis", Some(body)).await;
    assert_eq!(resp.status(), 200);

    let run = body_json(resp).await;
    assert_eq!(run["category"], "general");
    assert_eq!(run["result"]["confidence"], 75);
    assert_eq!(run["result"]["title"], "General Analysis");
}

#[tokio::test]
async fn analysis_runs_are_not_persisted() {
    let service = make_service();
    let body = r#"{"analysis_type":"blood_pattern","case_id":"CASE-001"}"#;
    request(&service.router, Method::POST, "/api/v1/analysis", Some(body)).await;

    // Record counts are untouched by analysis runs.
    let status = body_json(request(&service.router, Method::GET, "/api/v1/status", None).await)
        .await;
    assert_eq!(status["records"]["cases"], 3);
    assert_eq!(status["records"]["evidence"], 3);
}

#[tokio::test]
async fn collaboration_append_defaults_the_user() {
    let service = make_service();
    let body = r#"{"case_id":"CASE-001","action":"Reviewed evidence","details":"Initial pass"}"#;
    let resp =
        request(&service.router, Method::POST, "/api/v1/collaboration", Some(body)).await;
    assert_eq!(resp.status(), 201);

    let log = body_json(resp).await;
    assert_eq!(log["user"], "User");
    assert_eq!(log["action"], "Reviewed evidence");
    // Two seeded logs, so the fresh entry takes suffix 102.
    assert_eq!(log["id"], "LOG-102");
}

#[tokio::test]
async fn collaboration_append_accepts_an_unknown_case() {
    let service = make_service();
    let body = r#"{"case_id":"CASE-999","user":"Det. Chen","action":"Flagged"}"#;
    let resp =
        request(&service.router, Method::POST, "/api/v1/collaboration", Some(body)).await;
    assert_eq!(resp.status(), 201);
    assert_eq!(body_json(resp).await["case_id"], "CASE-999");
}

#[tokio::test]
async fn collaboration_listing_returns_appended_entries() {
    let service = make_service();
    let body = r#"{"case_id":"CASE-002","action":"Escalated","details":"Priority bump"}"#;
    request(&service.router, Method::POST, "/api/v1/collaboration", Some(body)).await;

    let resp = request(&service.router, Method::GET, "/api/v1/collaboration", None).await;
    assert_eq!(resp.status(), 200);

    let logs = body_json(resp).await;
    assert_eq!(logs.as_array().map(Vec::len), Some(3));
    assert_eq!(logs[2]["action"], "Escalated");
}
