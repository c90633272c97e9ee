//! # Data Models
//!
//! Typed rows for the five portfolio tables plus shared response types.
//! Enumerated fields use closed category sets; their string forms follow the
//! SCREAMING_SNAKE_CASE wire values the dashboard UI expects.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod expense;
pub mod payment;
pub mod property;
pub mod task;
pub mod tenant;

pub use expense::{Expense, ExpenseCategory, ExpenseStatus};
pub use payment::{Payment, PaymentMethod, PaymentStatus};
pub use property::{Property, PropertyStatus, PropertyType};
pub use task::{MaintenanceTask, TaskCategory, TaskPriority, TaskStatus};
pub use tenant::Tenant;

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "estate-dashboard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Error raised when a query-string value names an unknown category.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown {field} value '{value}'")]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
}
