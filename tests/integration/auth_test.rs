//! Integration tests for the authentication flow.

use std::time::Duration;

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_returns_token_and_user() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({ "username": "alice", "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert!(response.body["token"].as_str().is_some());
    assert_eq!(response.body["user"]["username"], "alice");
    assert!(response.body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_then_login_and_me() {
    let app = TestApp::new().await;
    let (_, id) = app.register("alice", "password123").await;

    let login = app.login("alice", "password123").await;
    assert_eq!(login.status, StatusCode::OK);
    let token = login.body["token"].as_str().unwrap().to_string();

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["id"], id.to_string());
    assert_eq!(me.body["data"]["username"], "alice");
}

#[tokio::test]
async fn test_lockout_scenario() {
    let app = TestApp::new().await;
    app.register("alice", "password123").await;

    for _ in 0..5 {
        let response = app.login("alice", "wrongpass").await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.error_code(), "InvalidCredentials");
    }

    let response = app.login("alice", "password123").await;
    assert_eq!(response.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.error_code(), "TooManyAttempts");
}

#[tokio::test]
async fn test_lockout_expires_after_window() {
    let app = TestApp::with_lockout_window(Duration::from_millis(300)).await;
    app.register("alice", "password123").await;

    for _ in 0..5 {
        app.login("alice", "wrongpass").await;
    }
    assert_eq!(
        app.login("alice", "password123").await.status,
        StatusCode::TOO_MANY_REQUESTS
    );

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(app.login("alice", "password123").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_successful_login_resets_counter() {
    let app = TestApp::new().await;
    app.register("alice", "password123").await;

    for _ in 0..2 {
        app.login("alice", "wrongpass").await;
    }
    assert_eq!(app.login("alice", "password123").await.status, StatusCode::OK);

    for _ in 0..4 {
        let response = app.login("alice", "wrongpass").await;
        assert_eq!(response.error_code(), "InvalidCredentials");
    }
    assert_eq!(app.login("alice", "password123").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_user_and_wrong_password_bodies_are_identical() {
    let app = TestApp::new().await;
    app.register("alice", "password123").await;

    let unknown = app.login("nobody", "password123").await;
    let wrong = app.login("alice", "wrongpass").await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status, wrong.status);
    assert_eq!(unknown.raw, wrong.raw);
    assert!(unknown.body.get("remaining").is_none());
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = TestApp::new().await;
    app.register("alice", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({ "username": "alice", "password": "otherpass99" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "DuplicateUsername");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registration_has_one_winner() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = TestApp::on_file_database(&dir.path().join("jobtrail.db")).await;
    let body = serde_json::json!({ "username": "carol", "password": "password123" });

    let mut handles = Vec::new();
    for _ in 0..6 {
        let app = app.clone();
        let body = body.clone();
        handles.push(tokio::spawn(async move {
            app.request("POST", "/api/auth/register", Some(body), None)
                .await
        }));
    }

    let mut created = 0;
    let mut conflicts = 0;
    for h in handles {
        let response = h.await.expect("join");
        match response.status {
            StatusCode::CREATED => created += 1,
            StatusCode::CONFLICT => {
                assert_eq!(response.error_code(), "DuplicateUsername");
                conflicts += 1;
            }
            other => panic!("unexpected status {other}: {:?}", response.body),
        }
    }
    assert_eq!(created, 1);
    assert_eq!(conflicts, 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_wrong_passwords_lock_after_threshold() {
    let app = TestApp::new().await;
    app.register("alice", "password123").await;

    let mut handles = Vec::new();
    for i in 0..12 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            app.login("alice", &format!("wrong-{i}")).await.status
        }));
    }

    let mut unauthorized = 0;
    let mut limited = 0;
    for h in handles {
        match h.await.expect("join") {
            StatusCode::UNAUTHORIZED => unauthorized += 1,
            StatusCode::TOO_MANY_REQUESTS => limited += 1,
            other => panic!("unexpected status {other}"),
        }
    }
    assert_eq!(unauthorized, 5);
    assert_eq!(limited, 7);
    assert_eq!(
        app.login("alice", "password123").await.status,
        StatusCode::TOO_MANY_REQUESTS
    );
}

#[tokio::test]
async fn test_register_rejects_bad_credentials_shape() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({ "username": "a b", "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "InvalidUsername");

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({ "username": "alice", "password": "short" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "WeakPassword");
}

#[tokio::test]
async fn test_missing_fields_are_reported_with_details() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "alice", "password": "" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "MissingFields");
    assert_eq!(response.body["details"]["password"][0], "Password is required");

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": "alice" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "MissingFields");

    let response = app
        .request_raw("POST", "/api/auth/login", "{not json".to_string(), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "MissingFields");
}

#[tokio::test]
async fn test_change_password() {
    let app = TestApp::new().await;
    let (token, _) = app.register("alice", "password123").await;

    let response = app
        .request(
            "PUT",
            "/api/auth/password",
            Some(serde_json::json!({
                "currentPassword": "not-it",
                "newPassword": "newpassword456",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "InvalidPassword");

    let response = app
        .request(
            "PUT",
            "/api/auth/password",
            Some(serde_json::json!({
                "currentPassword": "password123",
                "newPassword": "newpassword456",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    assert_eq!(
        app.login("alice", "newpassword456").await.status,
        StatusCode::OK
    );
    assert_eq!(
        app.login("alice", "password123").await.error_code(),
        "InvalidCredentials"
    );
}

#[tokio::test]
async fn test_change_password_requires_token() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/api/auth/password",
            Some(serde_json::json!({
                "currentPassword": "password123",
                "newPassword": "newpassword456",
            })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "AuthenticationRequired");
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let app = TestApp::new().await;
    let (token, _) = app.register("alice", "password123").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let me = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(me.status, StatusCode::UNAUTHORIZED);
    assert_eq!(me.error_code(), "InvalidOrExpiredToken");

    let again = app.login("alice", "password123").await;
    let fresh = again.body["token"].as_str().unwrap();
    let me = app.request("GET", "/api/auth/me", None, Some(fresh)).await;
    assert_eq!(me.status, StatusCode::OK);
}

#[tokio::test]
async fn test_bad_tokens_are_rejected() {
    let app = TestApp::new().await;

    let response = app.request("POST", "/api/auth/logout", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "AuthenticationRequired");

    let response = app
        .request("GET", "/api/auth/me", None, Some("not-a-token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "InvalidOrExpiredToken");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "connected");
}
