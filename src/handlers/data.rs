//! # Raw Table Handler
//!
//! Serves the five generated tables as-is, selected by a `type` query
//! parameter. The dashboard UI fetches these for its table widgets.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use metrics::counter;
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::server::AppState;

/// Query parameters for raw table selection
#[derive(Debug, Deserialize, IntoParams)]
pub struct DataQuery {
    /// Which table to return: properties, tenants, payments, expenses or tasks
    #[serde(rename = "type")]
    pub table: Option<String>,
}

/// Return one raw mock table selected by name.
#[utoipa::path(
    get,
    path = "/data",
    params(DataQuery),
    responses(
        (status = 200, description = "The requested table as a JSON array"),
        (status = 400, description = "Unknown or missing table name", body = ApiError)
    ),
    tag = "data"
)]
pub async fn table(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Some(name) = query.table.as_deref() else {
        return Err(invalid_table(None));
    };

    let portfolio = &state.portfolio;
    let rows = match name {
        "properties" => serde_json::to_value(&portfolio.properties),
        "tenants" => serde_json::to_value(&portfolio.tenants),
        "payments" => serde_json::to_value(&portfolio.payments),
        "expenses" => serde_json::to_value(&portfolio.expenses),
        "tasks" => serde_json::to_value(&portfolio.tasks),
        other => return Err(invalid_table(Some(other))),
    };

    counter!("data_table_requests_total", "table" => name.to_string()).increment(1);

    rows.map(Json).map_err(|err| {
        tracing::error!(error = %err, table = name, "Failed to serialize table");
        ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_SERVER_ERROR",
            "Failed to serialize table",
        )
    })
}

fn invalid_table(requested: Option<&str>) -> ApiError {
    ApiError::new(
        StatusCode::BAD_REQUEST,
        "VALIDATION_FAILED",
        "Invalid data type requested",
    )
    .with_details(json!({
        "type": requested,
        "expected": ["properties", "tenants", "payments", "expenses", "tasks"],
    }))
}
