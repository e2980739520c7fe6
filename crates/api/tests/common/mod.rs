use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;

use ordertrack_api::config::ServerConfig;
use ordertrack_api::routes;
use ordertrack_api::state::AppState;
use ordertrack_engine::{DeadlineAlertEngine, ReconcileEngine};
use ordertrack_inventory::{InventoryApi, InventoryConfig};
use ordertrack_notify::Mailer;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        reconcile_interval: Duration::from_secs(300),
        alert_sweep_hours: vec![9, 17],
    }
}

/// Build the full application router with all middleware layers, pointing
/// the inventory client at `inventory_url` (a mockito server in tests that
/// exercise reconciliation, a dead address otherwise).
///
/// Mirrors the router construction in `main.rs` so integration tests go
/// through the same middleware stack that production uses. The mailer is
/// absent, matching a deployment without SMTP configured.
pub fn build_test_app(pool: PgPool, inventory_url: &str) -> Router {
    build_test_app_with_mailer(pool, inventory_url, None)
}

/// Like [`build_test_app`], with an explicit mailer (typically
/// `Mailer::stub()` or `Mailer::stub_failing()`) so tests can observe
/// email send counts.
pub fn build_test_app_with_mailer(
    pool: PgPool,
    inventory_url: &str,
    mailer: Option<Arc<Mailer>>,
) -> Router {
    let config = test_config();

    let inventory = Arc::new(
        InventoryApi::new(InventoryConfig::new(inventory_url))
            .expect("failed to build inventory client"),
    );
    let reconcile = Arc::new(ReconcileEngine::new(
        pool.clone(),
        Arc::clone(&inventory),
        mailer.clone(),
    ));
    let alerts = Arc::new(DeadlineAlertEngine::new(pool.clone(), mailer));

    let state = AppState {
        pool,
        config: Arc::new(config),
        reconcile,
        alerts,
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(cors)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

/// Send a GET request to the app and return the response.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a bodyless POST request to the app and return the response.
pub async fn post(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = http_body_util::BodyExt::collect(response.into_body())
        .await
        .unwrap()
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
