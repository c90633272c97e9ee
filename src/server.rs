//! # Server Configuration
//!
//! Router setup and startup for the dashboard API. The portfolio is
//! generated exactly once here and shared read-only; every view request
//! reads the same tables for the life of the process.

use std::sync::Arc;

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use chrono::Utc;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::handlers;
use crate::mock::{self, Portfolio};
use crate::telemetry::{self, TraceContext};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub portfolio: Arc<Portfolio>,
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/data", get(handlers::data::table))
        .route("/views/overview", get(handlers::views::overview))
        .route("/views/properties", get(handlers::views::properties))
        .route("/views/tenants", get(handlers::views::tenants))
        .route("/views/financial", get(handlers::views::financial))
        .route("/views/occupancy", get(handlers::views::occupancy))
        .route("/views/maintenance", get(handlers::views::maintenance))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn(trace_context_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Assign each request a correlation ID, exposed both as a request extension
/// and through the task-local trace context that error responses read.
async fn trace_context_middleware(mut request: Request, next: Next) -> Response {
    let context = TraceContext {
        trace_id: format!("req-{}", &uuid::Uuid::new_v4().to_string()[..8]),
    };
    request.extensions_mut().insert(context.clone());
    telemetry::with_trace_context(context, next.run(request)).await
}

/// Build the session state: generate the portfolio once, seeded when
/// configured, and wrap everything for sharing across requests.
pub fn build_state(config: AppConfig) -> AppState {
    let mut rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    build_state_with_rng(config, &mut rng)
}

/// As [`build_state`], with an externally owned random source.
pub fn build_state_with_rng<R: Rng + ?Sized>(config: AppConfig, rng: &mut R) -> AppState {
    let portfolio = mock::generate(rng, Utc::now(), &config.mock);
    tracing::info!(
        rows_per_table = config.mock.rows_per_table,
        seeded = config.rng_seed.is_some(),
        "Generated session portfolio"
    );
    AppState {
        config: Arc::new(config),
        portfolio: Arc::new(portfolio),
    }
}

/// Starts the server with the given configuration
pub async fn run_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Resolve the configured bind address before committing to state setup
    let addr = config
        .bind_addr()
        .map_err(|e| format!("Invalid server address: {}", e))?;

    let state = build_state(config);
    let profile = state.config.profile.clone();
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, %profile, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::data::table,
        crate::handlers::views::overview,
        crate::handlers::views::properties,
        crate::handlers::views::tenants,
        crate::handlers::views::financial,
        crate::handlers::views::occupancy,
        crate::handlers::views::maintenance,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::models::Property,
            crate::models::Tenant,
            crate::models::Payment,
            crate::models::Expense,
            crate::models::MaintenanceTask,
            crate::error::ApiError,
            crate::views::OverviewReport,
            crate::views::PropertiesReport,
            crate::views::TenantsReport,
            crate::views::FinancialReport,
            crate::views::OccupancyReport,
            crate::views::MaintenanceReport,
        )
    ),
    info(
        title = "Estate Dashboard API",
        description = "Mock real-estate portfolio analytics views",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
