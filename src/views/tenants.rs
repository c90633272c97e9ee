//! Tenants: lease expiration timeline and rent distribution.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::mock::Portfolio;
use crate::models::Tenant;

use super::aggregate::{HistogramBin, count_by, histogram, month_key};

/// Derived rows for the Tenants view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TenantsReport {
    /// Lease-end counts bucketed by calendar month, oldest month first
    pub lease_expirations: Vec<MonthCount>,
    /// 10-bin histogram over monthly rent amounts
    pub rent_histogram: Vec<HistogramBin>,
    /// Full tenant list
    pub tenants: Vec<Tenant>,
}

/// Count of rows falling in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthCount {
    /// Calendar month as "YYYY-MM"
    pub month: String,
    pub count: u64,
}

/// Compute the Tenants view.
pub fn tenants(portfolio: &Portfolio) -> TenantsReport {
    let lease_expirations = count_by(&portfolio.tenants, |t| month_key(t.lease_end))
        .into_iter()
        .map(|(month, count)| MonthCount { month, count })
        .collect();

    let rents: Vec<f64> = portfolio
        .tenants
        .iter()
        .map(|t| t.rent_amount as f64)
        .collect();

    TenantsReport {
        lease_expirations,
        rent_histogram: histogram(&rents, 10),
        tenants: portfolio.tenants.clone(),
    }
}
