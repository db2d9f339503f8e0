//! BloodLink API Server
//!
//! Lookup service for the donor portal: state and city listings for the
//! dependent dropdowns, plus the blood-type compatibility chart.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::InMemoryLocationRepository;
use app::{CompatibilityService, LocationService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub location_service: Arc<LocationService<InMemoryLocationRepository>>,
    pub compatibility_service: Arc<CompatibilityService>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Lookup routes served under `/api`
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/states", get(handlers::list_states))
        .route("/api/cities/:state_id", get(handlers::list_cities))
        .route("/api/compatibility", get(handlers::get_chart))
        .route(
            "/api/compatibility/check",
            get(handlers::check_compatibility),
        )
}

fn with_health(api: Router<AppState>, state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// All routes with CORS and request tracing, without rate limiting
pub fn router(state: AppState) -> Router {
    with_health(api_routes(), state)
}

/// Like [`router`], with per-IP rate limiting on the `/api` routes.
///
/// Keys on the peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn rate_limited_router(state: AppState, config: &Config) -> anyhow::Result<Router> {
    // per_millisecond sets the replenish interval for one request
    let replenish_ms = (1000 / config.rate_limit_per_second.max(1)).max(1);

    // Uses PeerIpKeyExtractor to get client IP from socket connection
    // (SmartIpKeyExtractor requires X-Forwarded-For headers from reverse proxy)
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_millisecond(replenish_ms)
            .burst_size(config.rate_limit_burst)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    let api = api_routes().layer(GovernorLayer {
        config: governor_config,
    });
    Ok(with_health(api, state))
}

fn load_locations(config: &Config) -> anyhow::Result<InMemoryLocationRepository> {
    let repo = match &config.locations_file {
        Some(path) => {
            tracing::info!("Loading locations from {}", path);
            InMemoryLocationRepository::from_file(path)
        }
        None => {
            tracing::info!("Loading bundled locations");
            InMemoryLocationRepository::bundled()
        }
    };
    repo.context("Failed to load location seed")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bloodlink_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BloodLink API...");

    let config = Config::from_env();

    let location_repo = Arc::new(load_locations(&config)?);

    let state = AppState {
        location_service: Arc::new(LocationService::new(location_repo)),
        compatibility_service: Arc::new(CompatibilityService::new()),
    };

    let app = rate_limited_router(state, &config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
