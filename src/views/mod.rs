//! # View Aggregator
//!
//! One pure computation per dashboard view. Every function is a synchronous,
//! side-effect-free read over a shared [`Portfolio`](crate::mock::Portfolio);
//! an empty filtered set yields empty vectors and zero sums rather than an
//! error. The rendering layer consuming these rows is out of scope.

pub mod aggregate;
pub mod financial;
pub mod maintenance;
pub mod occupancy;
pub mod overview;
pub mod properties;
pub mod tenants;

pub use financial::{
    FinancialReport, LOOKBACK_DAYS_DEFAULT, LOOKBACK_DAYS_MAX, LOOKBACK_DAYS_MIN, financial,
};
pub use maintenance::{MaintenanceReport, maintenance};
pub use occupancy::{OccupancyReport, occupancy};
pub use overview::{OverviewReport, overview};
pub use properties::{PropertiesReport, PropertyFilter, properties};
pub use tenants::{TenantsReport, tenants};
