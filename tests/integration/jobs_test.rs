//! Integration tests for jobs and job logs.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn create_job(app: &TestApp, token: &str, company: &str, status: &str) -> String {
    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({
                "company": company,
                "position": "Backend Engineer",
                "status": status,
                "url": "https://example.com/jobs/42",
                "applied_on": "2025-03-14",
            })),
            Some(token),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "Create failed: {:?}",
        response.body
    );
    response.body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_job_crud() {
    let app = TestApp::new().await;
    let (token, user_id) = app.register("alice", "password123").await;

    let id = create_job(&app, &token, "Acme", "applied").await;

    let response = app
        .request("GET", &format!("/api/jobs/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["company"], "Acme");
    assert_eq!(response.body["data"]["user_id"], user_id.to_string());
    assert_eq!(response.body["data"]["applied_on"], "2025-03-14");

    let response = app
        .request(
            "PUT",
            &format!("/api/jobs/{id}"),
            Some(json!({ "status": "interviewing", "notes": "Onsite next week" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "interviewing");
    assert_eq!(response.body["data"]["company"], "Acme");
    assert_eq!(response.body["data"]["notes"], "Onsite next week");

    let response = app
        .request("DELETE", &format!("/api/jobs/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/jobs/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NotFound");
}

#[tokio::test]
async fn test_list_jobs_with_status_filter() {
    let app = TestApp::new().await;
    let (token, _) = app.register("alice", "password123").await;

    create_job(&app, &token, "Acme", "applied").await;
    create_job(&app, &token, "Globex", "offer").await;

    let response = app.request("GET", "/api/jobs", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 2);

    let response = app
        .request("GET", "/api/jobs?status=offer", None, Some(&token))
        .await;
    let jobs = response.body["data"].as_array().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["company"], "Globex");

    let response = app
        .request("GET", "/api/jobs?status=ghosted", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "ValidationFailed");
}

#[tokio::test]
async fn test_jobs_are_private_to_their_owner() {
    let app = TestApp::new().await;
    let (alice, _) = app.register("alice", "password123").await;
    let (bob, _) = app.register("bob_b", "password123").await;

    let id = create_job(&app, &alice, "Acme", "applied").await;

    let response = app
        .request("GET", &format!("/api/jobs/{id}"), None, Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "PUT",
            &format!("/api/jobs/{id}"),
            Some(json!({ "status": "rejected" })),
            Some(&bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/api/jobs/{id}"), None, Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", "/api/jobs", None, Some(&bob)).await;
    assert!(response.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_job_validation() {
    let app = TestApp::new().await;
    let (token, _) = app.register("alice", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({ "company": "", "position": "SRE" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "ValidationFailed");
    assert!(response.body["details"].get("company").is_some());

    let response = app
        .request("POST", "/api/jobs", Some(json!({ "company": "Acme" })), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "MissingFields");
}

#[tokio::test]
async fn test_jobs_require_authentication() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/jobs", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "AuthenticationRequired");
}

#[tokio::test]
async fn test_job_logs() {
    let app = TestApp::new().await;
    let (alice, _) = app.register("alice", "password123").await;
    let (bob, _) = app.register("bob_b", "password123").await;
    let job_id = create_job(&app, &alice, "Acme", "applied").await;
    let logs_path = format!("/api/jobs/{job_id}/logs");

    let response = app
        .request("POST", &logs_path, Some(json!({ "entry": "Phone screen" })), Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let log_id = response.body["data"]["id"].as_str().unwrap().to_string();

    let response = app.request("GET", &logs_path, None, Some(&alice)).await;
    assert_eq!(response.status, StatusCode::OK);
    let entries = response.body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["entry"], "Phone screen");

    let response = app
        .request("POST", &logs_path, Some(json!({ "entry": "sneaky" })), Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", &logs_path, None, Some(&bob)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/api/logs/{log_id}"), None, Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &format!("/api/logs/{log_id}"), None, Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &logs_path, None, Some(&alice)).await;
    assert!(response.body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_path_and_query_return_json_errors() {
    let app = TestApp::new().await;
    let (token, _) = app.register("alice", "password123").await;

    for path in ["/api/jobs/not-a-uuid", "/api/jobs/not-a-uuid/logs"] {
        let response = app.request("GET", path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error_code(), "ValidationFailed");
        assert!(response.body["message"].is_string());
        assert!(response.body["details"].get("path").is_some());
    }

    let response = app
        .request("DELETE", "/api/logs/12345", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "ValidationFailed");

    let response = app
        .request("GET", "/api/jobs?status=offer&status=applied", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "ValidationFailed");
    assert!(response.body["details"].get("query").is_some());
}
