use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ordertrack_api::config::ServerConfig;
use ordertrack_api::state::AppState;
use ordertrack_api::{background, routes};
use ordertrack_engine::{DeadlineAlertEngine, ReconcileEngine};
use ordertrack_inventory::{InventoryApi, InventoryConfig};
use ordertrack_notify::{Mailer, MailerConfig};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ordertrack=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = ordertrack_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    ordertrack_db::health_check(&pool)
        .await
        .expect("Database health check failed");

    ordertrack_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- External inventory client ---
    let inventory_config =
        InventoryConfig::from_env().expect("INVENTORY_API_URL must be set");
    let inventory = Arc::new(
        InventoryApi::new(inventory_config).expect("Failed to build inventory API client"),
    );
    tracing::info!("Inventory API client created");

    // --- Mailer ---
    let mailer = match MailerConfig::from_env() {
        Some(mailer_config) => {
            let mailer = Mailer::new(&mailer_config).expect("Invalid SMTP configuration");
            tracing::info!(host = %mailer_config.smtp_host, "SMTP mailer configured");
            Some(Arc::new(mailer))
        }
        None => {
            tracing::warn!("SMTP_HOST not set, email notifications disabled");
            None
        }
    };

    // --- Engines ---
    let reconcile = Arc::new(ReconcileEngine::new(
        pool.clone(),
        Arc::clone(&inventory),
        mailer.clone(),
    ));
    let alerts = Arc::new(DeadlineAlertEngine::new(pool.clone(), mailer.clone()));

    // --- Background loops ---
    let cancel = CancellationToken::new();
    let reconcile_handle = tokio::spawn(background::reconcile_loop::run(
        Arc::clone(&reconcile),
        config.reconcile_interval,
        cancel.clone(),
    ));
    let alert_handle = tokio::spawn(background::alert_sweep::run(
        Arc::clone(&alerts),
        config.alert_sweep_hours.clone(),
        cancel.clone(),
    ));
    tracing::info!("Background jobs started (reconcile loop, alert sweep)");

    // --- CORS ---
    let cors = build_cors_layer(&config);

    // --- App state ---
    let app_state = AppState {
        pool,
        config: Arc::new(config.clone()),
        reconcile,
        alerts,
    };

    // --- Request ID header name ---
    let request_id_header = HeaderName::from_static("x-request-id");

    // --- Router ---
    let app = Router::new()
        // Health check at root level (not under /api/v1).
        .merge(routes::health::router())
        // API v1 routes.
        .nest("/api/v1", routes::api_routes())
        // -- Middleware stack (applied bottom-up) --
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(app_state);

    // --- Serve ---
    let addr = SocketAddr::new(config.host.parse().expect("Invalid HOST"), config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");

    let shutdown_cancel = cancel.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for shutdown signal");
            tracing::info!("Shutdown signal received");
            shutdown_cancel.cancel();
        })
        .await
        .expect("Server error");

    // Let the background loops observe the cancellation before exit.
    let _ = reconcile_handle.await;
    let _ = alert_handle.await;
}

/// Build the CORS layer from the configured origins.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}
