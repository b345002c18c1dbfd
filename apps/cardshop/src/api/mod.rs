//! # Cardshop HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /api/health` - Health check
//! - `GET /api/content` - All site sections
//! - `GET /api/content/{section}` - One section
//! - `GET /api/cards` - Cards, filtered by `category`, `min_price`, `max_price`, `tags`
//! - `GET /api/cards/{id}` - One card
//! - `GET /api/categories` - Declared categories
//! - `GET /api/contact` - Contact section
//! - `GET /api/debug/data` - Data structure dump (debug mode only)
//! - `GET /api/debug/logs` - Recent log lines (debug mode only)
//!
//! Unmatched routes answer with the `NOT_FOUND` envelope.

mod error;
mod handlers;
mod middleware;
mod types;

// Re-exports for the binary and integration tests (via `cardshop::api::*`)
pub use error::ApiError;
pub use handlers::{
    MAX_LOG_ENTRIES, card_handler, cards_handler, categories_handler, contact_handler,
    content_handler, debug_data_handler, debug_logs_handler, health_handler,
    method_not_allowed_handler, not_found_handler, section_handler,
};
pub use middleware::{create_rate_limiter, panic_response};
pub use types::{
    CardResponse, CardsQuery, CardsResponse, CategoriesResponse, ContactResponse,
    ContentResponse, DebugDataResponse, DebugInfo, DebugLogs, DebugLogsResponse, ErrorBody,
    ErrorEnvelope, FiltersApplied, HealthResponse, SectionResponse, now_timestamp,
};

use crate::config::{AppConfig, CorsConfig};
use crate::error::AppError;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
    routing::get,
};
use cardshop_core::ContentStore;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state: the immutable store and the effective configuration.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create new app state.
    #[must_use]
    pub fn new(store: ContentStore, config: AppConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build the CORS layer from configuration.
///
/// - `*` allows all origins (development only)
/// - otherwise each entry is an allowed origin; invalid entries are skipped
/// - an empty or fully invalid list falls back to the localhost defaults
fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.is_permissive() {
        tracing::warn!("CORS: Allowing ALL origins. This is insecure for production!");
        return CorsLayer::permissive();
    }

    let allowed = parse_origins(&cors.origins);
    let allowed = if allowed.is_empty() {
        tracing::warn!("CORS: No valid origins configured, defaulting to localhost only");
        parse_origins(&CorsConfig::default().origins)
    } else {
        allowed
    };

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match origin.trim().parse::<HeaderValue>() {
            Ok(value) => {
                tracing::info!("CORS: Allowing origin: {}", origin);
                Some(value)
            }
            Err(e) => {
                tracing::warn!("CORS: Invalid origin '{}': {}", origin, e);
                None
            }
        })
        .collect()
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
pub fn create_router(state: AppState) -> Router {
    with_middleware(routes(), state)
}

/// All API routes plus the `NOT_FOUND` and `METHOD_NOT_ALLOWED` fallbacks.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(handlers::health_handler))
        .route("/api/content", get(handlers::content_handler))
        .route("/api/content/{section}", get(handlers::section_handler))
        .route("/api/cards", get(handlers::cards_handler))
        .route("/api/cards/{id}", get(handlers::card_handler))
        .route("/api/categories", get(handlers::categories_handler))
        .route("/api/contact", get(handlers::contact_handler))
        .route("/api/debug/data", get(handlers::debug_data_handler))
        .route("/api/debug/logs", get(handlers::debug_logs_handler))
        .fallback(handlers::not_found_handler)
        .method_not_allowed_fallback(handlers::method_not_allowed_handler)
}

/// Wrap `router` in the middleware stack and attach the state.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs every request and response
/// 2. Panic recovery - turns panics into the `INTERNAL_ERROR` envelope
/// 3. CORS - handles preflight requests
/// 4. Rate Limiting - global limiter (if enabled)
pub fn with_middleware(router: Router<AppState>, state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.cors);

    let rate_limiter = create_rate_limiter(state.config.rate_limit);
    match rate_limiter {
        Some(_) => tracing::info!(
            "Rate limiting enabled: {} requests/second",
            state.config.rate_limit
        ),
        None => tracing::info!("Rate limiting disabled"),
    }

    if state.config.debug {
        tracing::warn!("Debug endpoints enabled under /api/debug");
    }

    let mut router = router;
    if let Some(limiter) = rate_limiter {
        router = router.layer(axum_middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(CatchPanicLayer::custom(middleware::panic_response))
                .layer(cors),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and run until Ctrl+C.
pub async fn run_server(config: AppConfig, store: ContentStore) -> Result<(), AppError> {
    let addr = config.server.addr();
    let router = create_router(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Io(format!("Bind failed: {}", e)))?;

    tracing::info!("Cardshop HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Io(format!("Server error: {}", e)))?;

    tracing::info!("HTTP server stopped");
    Ok(())
}

/// Wait for Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}

// =============================================================================
// TESTS
// =============================================================================
