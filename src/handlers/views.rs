//! # View Handlers
//!
//! One endpoint per dashboard view. Handlers validate the query-string
//! filter parameters, then delegate to the pure computations in
//! [`crate::views`] over the shared portfolio.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use metrics::counter;
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::server::AppState;
use crate::views::{
    self, FinancialReport, LOOKBACK_DAYS_DEFAULT, LOOKBACK_DAYS_MAX, LOOKBACK_DAYS_MIN,
    MaintenanceReport, OccupancyReport, OverviewReport, PropertiesReport, PropertyFilter,
    TenantsReport,
};

/// Portfolio-wide headline metrics and recent activity.
#[utoipa::path(
    get,
    path = "/views/overview",
    responses(
        (status = 200, description = "Overview report", body = OverviewReport)
    ),
    tag = "views"
)]
pub async fn overview(State(state): State<AppState>) -> Json<OverviewReport> {
    counter!("views_computed_total", "view" => "overview").increment(1);
    Json(views::overview(&state.portfolio))
}

/// Query parameters for the Properties view
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PropertiesQuery {
    /// Comma-separated property types to include (default: all)
    pub types: Option<String>,
    /// Comma-separated property statuses to include (default: all)
    pub statuses: Option<String>,
}

/// Filterable property list with age and size/value breakdowns.
#[utoipa::path(
    get,
    path = "/views/properties",
    params(PropertiesQuery),
    responses(
        (status = 200, description = "Properties report", body = PropertiesReport),
        (status = 400, description = "Unknown type or status value", body = ApiError)
    ),
    tag = "views"
)]
pub async fn properties(
    State(state): State<AppState>,
    Query(query): Query<PropertiesQuery>,
) -> Result<Json<PropertiesReport>, ApiError> {
    let filter = parse_property_filter(&query)?;
    counter!("views_computed_total", "view" => "properties").increment(1);
    Ok(Json(views::properties(&state.portfolio, &filter, Utc::now())))
}

/// Lease expiration timeline and rent distribution.
#[utoipa::path(
    get,
    path = "/views/tenants",
    responses(
        (status = 200, description = "Tenants report", body = TenantsReport)
    ),
    tag = "views"
)]
pub async fn tenants(State(state): State<AppState>) -> Json<TenantsReport> {
    counter!("views_computed_total", "view" => "tenants").increment(1);
    Json(views::tenants(&state.portfolio))
}

/// Query parameters for the Financial view
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FinancialQuery {
    /// Trailing window in days, between 7 and 365 (default: 90)
    pub lookback_days: Option<u32>,
}

/// Income versus expenses over a trailing lookback window.
#[utoipa::path(
    get,
    path = "/views/financial",
    params(FinancialQuery),
    responses(
        (status = 200, description = "Financial report", body = FinancialReport),
        (status = 400, description = "Lookback window out of bounds", body = ApiError)
    ),
    tag = "views"
)]
pub async fn financial(
    State(state): State<AppState>,
    Query(query): Query<FinancialQuery>,
) -> Result<Json<FinancialReport>, ApiError> {
    let lookback_days = validate_lookback_days(query.lookback_days)?;
    counter!("views_computed_total", "view" => "financial").increment(1);
    Ok(Json(views::financial(
        &state.portfolio,
        lookback_days,
        Utc::now(),
    )))
}

/// Synthetic occupancy-rate series.
#[utoipa::path(
    get,
    path = "/views/occupancy",
    responses(
        (status = 200, description = "Occupancy report", body = OccupancyReport)
    ),
    tag = "views"
)]
pub async fn occupancy(State(state): State<AppState>) -> Json<OccupancyReport> {
    counter!("views_computed_total", "view" => "occupancy").increment(1);
    // The series are declared synthetic, so each request draws fresh samples.
    let mut rng = rand::thread_rng();
    Json(views::occupancy(&state.portfolio, Utc::now(), &mut rng))
}

/// Task breakdowns and the per-property task join.
#[utoipa::path(
    get,
    path = "/views/maintenance",
    responses(
        (status = 200, description = "Maintenance report", body = MaintenanceReport)
    ),
    tag = "views"
)]
pub async fn maintenance(State(state): State<AppState>) -> Json<MaintenanceReport> {
    counter!("views_computed_total", "view" => "maintenance").increment(1);
    Json(views::maintenance(&state.portfolio))
}

/// Parse the comma-separated multiselect parameters into a typed filter.
pub fn parse_property_filter(query: &PropertiesQuery) -> Result<PropertyFilter, ApiError> {
    let types = match query.types.as_deref() {
        Some(raw) => Some(parse_csv(raw, "types")?),
        None => None,
    };
    let statuses = match query.statuses.as_deref() {
        Some(raw) => Some(parse_csv(raw, "statuses")?),
        None => None,
    };
    Ok(PropertyFilter { types, statuses })
}

fn parse_csv<T: std::str::FromStr>(raw: &str, field: &str) -> Result<Vec<T>, ApiError>
where
    T::Err: std::fmt::Display,
{
    raw.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            part.parse::<T>().map_err(|err| {
                ApiError::new(
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_FAILED",
                    &err.to_string(),
                )
                .with_details(json!({ field: part.trim() }))
            })
        })
        .collect()
}

/// Clamp-check the lookback window against the slider bounds.
pub fn validate_lookback_days(requested: Option<u32>) -> Result<u32, ApiError> {
    let days = requested.unwrap_or(LOOKBACK_DAYS_DEFAULT);
    if !(LOOKBACK_DAYS_MIN..=LOOKBACK_DAYS_MAX).contains(&days) {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED",
            &format!(
                "lookback_days must be between {LOOKBACK_DAYS_MIN} and {LOOKBACK_DAYS_MAX}"
            ),
        )
        .with_details(json!({ "lookback_days": days })));
    }
    Ok(days)
}
