//! Occupancy: synthetic occupancy-rate series.
//!
//! These series are generated, not derived from the tables; only the set of
//! property types observed in the portfolio feeds the per-type breakdown.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::mock::Portfolio;
use crate::models::PropertyType;

use super::aggregate::trailing_months;

/// Derived rows for the Occupancy view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OccupancyReport {
    /// Twelve trailing months of portfolio occupancy, oldest first
    pub monthly: Vec<MonthlyOccupancy>,
    /// One synthetic rate per property type observed in the portfolio
    pub by_type: Vec<TypeOccupancy>,
}

/// Occupancy rate for one month.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MonthlyOccupancy {
    /// Calendar month as "YYYY-MM"
    pub month: String,
    /// Rate in [0.70, 0.95]
    pub rate: f64,
}

/// Occupancy rate for one property type.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TypeOccupancy {
    #[serde(rename = "type")]
    pub kind: PropertyType,
    /// Rate in [0.60, 0.95]
    pub rate: f64,
}

/// Compute the Occupancy view for the twelve months ending at `now`.
pub fn occupancy<R: Rng + ?Sized>(
    portfolio: &Portfolio,
    now: DateTime<Utc>,
    rng: &mut R,
) -> OccupancyReport {
    let monthly = trailing_months(now, 12)
        .into_iter()
        .map(|month| MonthlyOccupancy {
            month,
            rate: rng.gen_range(0.70..=0.95),
        })
        .collect();

    let by_type = portfolio
        .observed_property_types()
        .into_iter()
        .map(|kind| TypeOccupancy {
            kind,
            rate: rng.gen_range(0.60..=0.95),
        })
        .collect();

    OccupancyReport { monthly, by_type }
}
