//! Overview: portfolio-wide headline metrics and recent activity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::mock::Portfolio;
use crate::models::{MaintenanceTask, Payment, PropertyStatus, PropertyType};

use super::aggregate::count_by;

/// Derived rows for the Overview view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OverviewReport {
    /// Count of all properties
    pub total_properties: u64,
    /// Count of properties with status ACTIVE
    pub active_properties: u64,
    /// Count of all tenants
    pub total_tenants: u64,
    /// Sum of property values in whole dollars
    pub total_property_value: i64,
    /// Property counts grouped by type (only types present)
    pub properties_by_type: Vec<PropertyTypeCount>,
    /// Property counts grouped by status (only statuses present)
    pub properties_by_status: Vec<PropertyStatusCount>,
    /// Up to five most recent payments, newest first
    pub recent_payments: Vec<Payment>,
    /// Up to five soonest tasks, earliest due date first
    pub upcoming_tasks: Vec<MaintenanceTask>,
}

/// Count of properties of one type.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyTypeCount {
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub count: u64,
}

/// Count of properties in one status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyStatusCount {
    pub status: PropertyStatus,
    pub count: u64,
}

/// Compute the Overview view.
pub fn overview(portfolio: &Portfolio) -> OverviewReport {
    let active_properties = portfolio
        .properties
        .iter()
        .filter(|p| p.status == PropertyStatus::Active)
        .count() as u64;

    let properties_by_type = count_by(&portfolio.properties, |p| p.kind)
        .into_iter()
        .map(|(kind, count)| PropertyTypeCount { kind, count })
        .collect();
    let properties_by_status = count_by(&portfolio.properties, |p| p.status)
        .into_iter()
        .map(|(status, count)| PropertyStatusCount { status, count })
        .collect();

    let mut recent_payments = portfolio.payments.clone();
    recent_payments.sort_by(|a, b| b.payment_date.cmp(&a.payment_date));
    recent_payments.truncate(5);

    let mut upcoming_tasks = portfolio.tasks.clone();
    upcoming_tasks.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    upcoming_tasks.truncate(5);

    OverviewReport {
        total_properties: portfolio.properties.len() as u64,
        active_properties,
        total_tenants: portfolio.tenants.len() as u64,
        total_property_value: portfolio.properties.iter().map(|p| p.value).sum(),
        properties_by_type,
        properties_by_status,
        recent_payments,
        upcoming_tasks,
    }
}
