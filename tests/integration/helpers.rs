//! Shared test helpers for integration tests.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use jobtrail_api::{AppState, build_app};
use jobtrail_auth::MemoryAttemptTracker;
use jobtrail_core::config::{AppConfig, AuthConfig, DatabaseConfig};
use jobtrail_database::DatabasePool;

/// Test application context
#[derive(Clone)]
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a new test application with an in-memory database
    pub async fn new() -> Self {
        let config = test_config();
        let tracker = Arc::new(MemoryAttemptTracker::from_config(&config.auth));
        Self::with_tracker(config, tracker).await
    }

    /// Create a test application whose lockout window is `window`
    pub async fn with_lockout_window(window: Duration) -> Self {
        let config = test_config();
        let tracker = Arc::new(MemoryAttemptTracker::new(
            config.auth.max_failed_attempts,
            window,
        ));
        Self::with_tracker(config, tracker).await
    }

    /// Create a test application backed by a SQLite file with a
    /// multi-connection pool
    pub async fn on_file_database(path: &Path) -> Self {
        let mut config = test_config();
        config.database = DatabaseConfig {
            url: format!("sqlite://{}", path.display()),
            max_connections: 8,
            ..DatabaseConfig::default()
        };
        let tracker = Arc::new(MemoryAttemptTracker::from_config(&config.auth));
        Self::with_tracker(config, tracker).await
    }

    async fn with_tracker(config: AppConfig, tracker: Arc<MemoryAttemptTracker>) -> Self {
        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        db.migrate().await.expect("Failed to run migrations");

        let state = AppState::with_tracker(config, db, tracker).expect("Failed to build state");
        Self {
            router: build_app(state),
        }
    }

    /// Register a user and return their token and ID
    pub async fn register(&self, username: &str, password: &str) -> (String, Uuid) {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({ "username": username, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Register failed: {:?}",
            response.body
        );

        let token = response.body["token"]
            .as_str()
            .expect("No token in register response")
            .to_string();
        let id = response.body["user"]["id"]
            .as_str()
            .and_then(|s| s.parse().ok())
            .expect("No user id in register response");
        (token, id)
    }

    /// Attempt a login
    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "username": username, "password": password })),
            None,
        )
        .await
    }

    /// Make an HTTP request with an optional JSON body
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, body_str, token).await
    }

    /// Make an HTTP request with a raw body
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: String,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let raw = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body")
            .to_vec();

        let body: Value = serde_json::from_slice(&raw).unwrap_or(Value::Null);

        TestResponse { status, body, raw }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Parsed JSON body (`Null` if not JSON)
    pub body: Value,
    /// Raw body bytes
    pub raw: Vec<u8>,
}

impl TestResponse {
    /// The `error` code of a failure body
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        database: DatabaseConfig::in_memory(),
        auth: AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            bcrypt_cost: 4,
            ..AuthConfig::default()
        },
        ..AppConfig::default()
    }
}
