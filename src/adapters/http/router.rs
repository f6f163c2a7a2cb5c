//! Top-level router: every HTTP adapter behind the shared middleware stack.
//!
//! Layer order, outermost first: request id, tracing, request id propagation,
//! compression, CORS, JSON error bodies, timeout, security headers, route
//! metrics. Unknown paths hit the JSON `404` fallback.

use std::sync::Arc;

use axum::extract::Request;
use axum::{middleware, Router};
use http::{header, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::metrics::Metrics;
use crate::application::CheckHealthHandler;
use crate::config::{Environment, ServerConfig};
use crate::ports::{ClientErrorRepository, HealthProbe, MoodRepository};

use super::client_error::{client_error_router, ClientErrorAppState};
use super::error::route_not_found;
use super::health::{health_router, HealthAppState};
use super::metrics::metrics_router;
use super::middleware::{json_error_body, security_headers, track_metrics, SecurityHeaders};
use super::mood::{mood_router, MoodAppState};

/// Dependencies shared by every HTTP adapter.
#[derive(Clone)]
pub struct AppState {
    pub mood_repository: Arc<dyn MoodRepository>,
    pub client_error_repository: Arc<dyn ClientErrorRepository>,
    pub health_probes: Vec<Arc<dyn HealthProbe>>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(
        mood_repository: Arc<dyn MoodRepository>,
        client_error_repository: Arc<dyn ClientErrorRepository>,
        health_probes: Vec<Arc<dyn HealthProbe>>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            mood_repository,
            client_error_repository,
            health_probes,
            metrics,
        }
    }
}

/// Assemble the application router.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    let checker = Arc::new(CheckHealthHandler::new(
        state.health_probes,
        config.health_check_timeout(),
    ));

    let routes = Router::new()
        .merge(mood_router().with_state(MoodAppState::new(
            state.mood_repository,
            state.metrics.clone(),
        )))
        .merge(client_error_router().with_state(ClientErrorAppState::new(
            state.client_error_repository,
            state.metrics.clone(),
        )))
        .merge(health_router().with_state(HealthAppState::new(
            checker,
            state.metrics.clone(),
            config.environment,
        )))
        .merge(metrics_router().with_state(state.metrics.clone()))
        .fallback(route_not_found)
        .layer(middleware::from_fn_with_state(
            state.metrics,
            track_metrics,
        ));

    routes
        .layer(middleware::from_fn_with_state(
            SecurityHeaders::new(config.is_production()),
            security_headers,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("-");
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id
                    )
                }))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CompressionLayer::new())
                .layer(cors_layer(config))
                .layer(middleware::map_response(json_error_body))
                .layer(TimeoutLayer::new(config.request_timeout())),
        )
}

/// CORS from configured origins. With none configured, development is
/// permissive and other environments allow no cross-origin requests.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return match config.environment {
            Environment::Development => CorsLayer::permissive(),
            Environment::Staging | Environment::Production => CorsLayer::new(),
        };
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::HeaderName::from_static("x-request-id")])
}
