//! Integration tests for the assembled HTTP router.
//!
//! These tests drive the full middleware stack with in-memory adapters:
//! 1. Mood CRUD, listing filters and statistics
//! 2. Client error reporting
//! 3. Health, metrics and cross-cutting response headers
//! 4. Error bodies, CORS, compression and timeouts from the middleware stack

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use mood_tracker::adapters::http::{build_router, AppState};
use mood_tracker::adapters::memory::{
    InMemoryClientErrorRepository, InMemoryMoodRepository, StaticHealthProbe,
};
use mood_tracker::adapters::metrics::Metrics;
use mood_tracker::config::{Environment, ServerConfig};
use mood_tracker::domain::foundation::{DomainError, MoodEntryId};
use mood_tracker::domain::mood::MoodEntry;
use mood_tracker::ports::{HealthProbe, MoodFilter, MoodRepository};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    probe: StaticHealthProbe,
    client_errors: Arc<InMemoryClientErrorRepository>,
}

impl TestApp {
    fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    fn with_config(config: ServerConfig) -> Self {
        Self::build(Arc::new(InMemoryMoodRepository::new()), config)
    }

    fn build(mood_repository: Arc<dyn MoodRepository>, config: ServerConfig) -> Self {
        let probe = StaticHealthProbe::healthy("database");
        let client_errors = Arc::new(InMemoryClientErrorRepository::new());
        let probes: Vec<Arc<dyn HealthProbe>> = vec![Arc::new(probe.clone())];

        let state = AppState::new(
            mood_repository,
            client_errors.clone(),
            probes,
            Arc::new(Metrics::new()),
        );

        Self {
            router: build_router(state, &config),
            probe,
            client_errors,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&body).into_owned())
            })
        };
        (status, value)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn send_json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn create(&self, body: Value) -> Value {
        let (status, created) = self.send_json("POST", "/api/moods", body).await;
        assert_eq!(status, StatusCode::CREATED, "unexpected body: {}", created);
        created
    }
}

/// Repository whose every call fails, for exercising 500 handling.
struct FailingMoodRepository;

#[async_trait]
impl MoodRepository for FailingMoodRepository {
    async fn save(&self, _entry: &MoodEntry) -> Result<(), DomainError> {
        Err(DomainError::database("insert mood entry", "connection reset by peer"))
    }

    async fn update(&self, _entry: &MoodEntry) -> Result<(), DomainError> {
        Err(DomainError::database("update mood entry", "connection reset by peer"))
    }

    async fn find_by_id(&self, _id: &MoodEntryId) -> Result<Option<MoodEntry>, DomainError> {
        Err(DomainError::database("fetch mood entry", "connection reset by peer"))
    }

    async fn list(&self, _filter: &MoodFilter) -> Result<Vec<MoodEntry>, DomainError> {
        Err(DomainError::database("list mood entries", "connection reset by peer"))
    }

    async fn delete(&self, _id: &MoodEntryId) -> Result<(), DomainError> {
        Err(DomainError::database("delete mood entry", "connection reset by peer"))
    }
}

/// Repository whose listing never finishes within a short request timeout.
struct StalledMoodRepository;

#[async_trait]
impl MoodRepository for StalledMoodRepository {
    async fn save(&self, _entry: &MoodEntry) -> Result<(), DomainError> {
        Ok(())
    }

    async fn update(&self, _entry: &MoodEntry) -> Result<(), DomainError> {
        Ok(())
    }

    async fn find_by_id(&self, _id: &MoodEntryId) -> Result<Option<MoodEntry>, DomainError> {
        Ok(None)
    }

    async fn list(&self, _filter: &MoodFilter) -> Result<Vec<MoodEntry>, DomainError> {
        tokio::time::sleep(Duration::from_secs(3)).await;
        Ok(Vec::new())
    }

    async fn delete(&self, _id: &MoodEntryId) -> Result<(), DomainError> {
        Ok(())
    }
}

// =============================================================================
// Mood CRUD
// =============================================================================

#[tokio::test]
async fn create_mood_returns_created_entry() {
    let app = TestApp::new();

    let created = app
        .create(json!({
            "date": "2024-04-02",
            "mood": "Happy",
            "intensity": 7,
            "notes": "  long walk  "
        }))
        .await;

    assert_eq!(created["date"], "2024-04-02");
    assert_eq!(created["mood"], "happy");
    assert_eq!(created["intensity"], 7);
    assert_eq!(created["notes"], "long walk");
    assert!(created["id"].as_str().unwrap().parse::<MoodEntryId>().is_ok());
}

#[tokio::test]
async fn list_moods_returns_array_newest_first() {
    let app = TestApp::new();
    app.create(json!({"date": "2024-04-01", "mood": "calm", "intensity": 3}))
        .await;
    app.create(json!({"date": "2024-04-03", "mood": "sad", "intensity": 6}))
        .await;

    let (status, body) = app.get("/api/moods").await;

    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["date"], "2024-04-03");
    assert_eq!(entries[1]["date"], "2024-04-01");
}

#[tokio::test]
async fn list_moods_applies_filters_and_paging() {
    let app = TestApp::new();
    for (date, mood) in [
        ("2024-04-01", "happy"),
        ("2024-04-02", "sad"),
        ("2024-04-03", "happy"),
        ("2024-04-04", "happy"),
    ] {
        app.create(json!({"date": date, "mood": mood, "intensity": 5}))
            .await;
    }

    let (status, body) = app
        .get("/api/moods?mood=happy&from=2024-04-02&to=2024-04-04&limit=1&offset=1")
        .await;

    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["date"], "2024-04-03");
}

#[tokio::test]
async fn list_moods_rejects_inverted_range() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/moods?from=2024-05-01&to=2024-04-01").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_QUERY");
}

#[tokio::test]
async fn list_moods_rejects_unparseable_date() {
    let app = TestApp::new();

    let (status, _) = app.get("/api/moods?from=yesterday").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_mood_round_trips_and_unknown_is_not_found() {
    let app = TestApp::new();
    let created = app
        .create(json!({"date": "2024-04-02", "mood": "tired", "intensity": 2}))
        .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = app.get(&format!("/api/moods/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = app.get(&format!("/api/moods/{}", MoodEntryId::new())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_id_is_bad_request() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/moods/12345").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn invalid_input_is_rejected_with_field() {
    let app = TestApp::new();

    let (status, body) = app
        .send_json("POST", "/api/moods", json!({"mood": "happy", "intensity": 11}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["field"], "intensity");

    let (status, body) = app
        .send_json("POST", "/api/moods", json!({"mood": "ecstatic", "intensity": 5}))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "mood");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = TestApp::new();

    let (status, body) = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/api/moods")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"mood\": "))
                .unwrap(),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn update_replaces_entry() {
    let app = TestApp::new();
    let created = app
        .create(json!({"date": "2024-04-02", "mood": "anxious", "intensity": 8, "notes": "exam"}))
        .await;
    let uri = format!("/api/moods/{}", created["id"].as_str().unwrap());

    let (status, updated) = app
        .send_json(
            "PUT",
            &uri,
            json!({"date": "2024-04-02", "mood": "calm", "intensity": 4}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["mood"], "calm");
    assert_eq!(updated["intensity"], 4);
    assert_eq!(updated["notes"], Value::Null);
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn update_unknown_entry_is_not_found() {
    let app = TestApp::new();

    let (status, _) = app
        .send_json(
            "PUT",
            &format!("/api/moods/{}", MoodEntryId::new()),
            json!({"mood": "calm", "intensity": 4}),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_entry() {
    let app = TestApp::new();
    let created = app
        .create(json!({"mood": "angry", "intensity": 9}))
        .await;
    let uri = format!("/api/moods/{}", created["id"].as_str().unwrap());

    let (status, body) = app
        .send(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = app.get(&uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn stats_summarize_entries() {
    let app = TestApp::new();
    for (date, mood, intensity) in [
        ("2024-04-01", "happy", 6),
        ("2024-04-02", "happy", 8),
        ("2024-04-03", "sad", 4),
        ("2024-04-06", "calm", 5),
    ] {
        app.create(json!({"date": date, "mood": mood, "intensity": intensity}))
            .await;
    }

    let (status, stats) = app.get("/api/moods/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_entries"], 4);
    assert_eq!(stats["average_intensity"], 5.75);
    assert_eq!(stats["most_frequent"], "happy");
    assert_eq!(stats["valence"]["positive"], 3);
    assert_eq!(stats["valence"]["negative"], 1);
    assert_eq!(stats["days_logged"], 4);
    assert_eq!(stats["longest_streak_days"], 3);
    assert_eq!(stats["current_streak_days"], 1);
    assert_eq!(stats["first_entry_date"], "2024-04-01");
    assert_eq!(stats["last_entry_date"], "2024-04-06");
}

#[tokio::test]
async fn stats_on_empty_journal() {
    let app = TestApp::new();

    let (status, stats) = app.get("/api/moods/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_entries"], 0);
    assert_eq!(stats["average_intensity"], Value::Null);
    assert_eq!(stats["most_frequent"], Value::Null);
}

#[tokio::test]
async fn repository_failure_is_internal_error_without_details() {
    let app = TestApp::build(Arc::new(FailingMoodRepository), ServerConfig::default());

    let (status, body) = app.get("/api/moods").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert!(!body["message"].as_str().unwrap().contains("connection reset"));
}

// =============================================================================
// Client error reports
// =============================================================================

#[tokio::test]
async fn client_error_is_accepted() {
    let app = TestApp::new();

    let (status, body) = app
        .send_json(
            "POST",
            "/api/errors",
            json!({
                "message": "Uncaught TypeError: cannot read properties of undefined",
                "url": "https://moods.example.com/app.js",
                "lineno": 10,
                "colno": 5,
                "stack": "at render (app.js:10:5)"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert!(body["id"].is_string());

    let reports = app.client_errors.reports().await;
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].source(), Some("https://moods.example.com/app.js"));
    assert_eq!(reports[0].line(), Some(10));
}

#[tokio::test]
async fn client_error_without_message_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .send_json("POST", "/api/errors", json!({"stack": "at main"}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "message");
    assert!(app.client_errors.reports().await.is_empty());
}

// =============================================================================
// Health, metrics and middleware
// =============================================================================

#[tokio::test]
async fn health_follows_probe_state() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "development");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    app.probe
        .set_failure(Some("connection refused".to_string()))
        .await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["checks"][0]["name"], "database");
    assert_eq!(body["checks"][0]["error"], "connection refused");

    let (status, _) = app.get("/health/live").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn metrics_reflect_traffic() {
    let app = TestApp::new();
    app.create(json!({"mood": "excited", "intensity": 9})).await;
    app.get(&format!("/api/moods/{}", MoodEntryId::new())).await;
    app.send_json("POST", "/api/errors", json!({"message": "boom"}))
        .await;

    let (status, body) = app.get("/metrics").await;

    assert_eq!(status, StatusCode::OK);
    let text = body.as_str().unwrap();
    assert!(text.contains("mood_entries_created_total 1"));
    assert!(text.contains("client_errors_reported_total 1"));
    assert!(text.contains(
        "http_requests_total{method=\"POST\",path=\"/api/moods\",status=\"201\"} 1"
    ));
    assert!(text.contains(
        "http_requests_total{method=\"GET\",path=\"/api/moods/:id\",status=\"404\"} 1"
    ));
    assert!(text.contains("http_request_duration_seconds_bucket"));
    assert!(text.contains("process_uptime_seconds"));
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/health/live").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let headers = response.headers();
    assert!(headers.contains_key("x-request-id"));
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(headers[header::X_FRAME_OPTIONS], "DENY");
    assert_eq!(headers[header::REFERRER_POLICY], "no-referrer");
    assert!(headers.get(header::STRICT_TRANSPORT_SECURITY).is_none());
}

#[tokio::test]
async fn incoming_request_id_is_propagated() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health/live")
                .header("x-request-id", "req-abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-abc-123");
}

#[tokio::test]
async fn production_adds_hsts() {
    let app = TestApp::with_config(ServerConfig {
        environment: Environment::Production,
        ..ServerConfig::default()
    });

    let response = app
        .router
        .clone()
        .oneshot(Request::builder().uri("/health/live").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(response
        .headers()
        .contains_key(header::STRICT_TRANSPORT_SECURITY));
}

// =============================================================================
// Middleware Stack
// =============================================================================

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri("/api/moods")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap()
}

fn cross_origin_get(origin: &str) -> Request<Body> {
    Request::builder()
        .uri("/api/moods")
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["message"].as_str().unwrap().contains("/api/nope"));
}

#[tokio::test]
async fn unknown_route_is_counted_as_unmatched() {
    let app = TestApp::new();
    app.get("/api/nope/42").await;

    let (_, body) = app.get("/metrics").await;

    let text = body.as_str().unwrap();
    assert!(text.contains(
        "http_requests_total{method=\"GET\",path=\"unmatched\",status=\"404\"} 1"
    ));
    assert!(!text.contains("/api/nope/42"));
}

#[tokio::test]
async fn wrong_method_is_json_method_not_allowed() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/moods")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.headers().contains_key(header::ALLOW));
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["code"], "METHOD_NOT_ALLOWED");
    assert_eq!(body["message"], "Method Not Allowed");
}

#[tokio::test]
async fn slow_request_times_out_with_json_body() {
    let app = TestApp::build(
        Arc::new(StalledMoodRepository),
        ServerConfig {
            request_timeout_secs: 1,
            ..ServerConfig::default()
        },
    );

    let (status, body) = app.get("/api/moods").await;

    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(body["code"], "REQUEST_TIMEOUT");
    assert_eq!(body["message"], "Request Timeout");
}

#[tokio::test]
async fn development_cors_allows_any_origin() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(preflight("http://localhost:5173"))
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn production_cors_allows_only_configured_origins() {
    let app = TestApp::with_config(ServerConfig {
        environment: Environment::Production,
        cors_origins: Some("https://moods.example.com".to_string()),
        ..ServerConfig::default()
    });

    let allowed = app
        .router
        .clone()
        .oneshot(cross_origin_get("https://moods.example.com"))
        .await
        .unwrap();
    assert_eq!(
        allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://moods.example.com"
    );

    let preflighted = app
        .router
        .clone()
        .oneshot(preflight("https://moods.example.com"))
        .await
        .unwrap();
    assert_eq!(
        preflighted.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://moods.example.com"
    );

    let denied = app
        .router
        .clone()
        .oneshot(cross_origin_get("https://evil.example.org"))
        .await
        .unwrap();
    assert!(denied
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn production_cors_without_origins_allows_none() {
    let app = TestApp::with_config(ServerConfig {
        environment: Environment::Production,
        cors_origins: None,
        ..ServerConfig::default()
    });

    let response = app
        .router
        .clone()
        .oneshot(cross_origin_get("https://moods.example.com"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn large_listing_is_gzip_compressed() {
    let app = TestApp::new();
    let notes = "slept well, long walk by the river, lunch with friends. ".repeat(20);
    for day in 1..=20 {
        app.create(json!({
            "date": format!("2024-04-{:02}", day),
            "mood": "grateful",
            "intensity": 6,
            "notes": notes
        }))
        .await;
    }

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/moods")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_ENCODING], "gzip");
    let compressed = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(compressed.len() < notes.len() * 20);
}
