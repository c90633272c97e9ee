//! Tenant table row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A tenant holding a lease against a facility.
///
/// `facility_id` is sampled independently of the property table and may
/// reference a property id that does not exist; consumers tolerate that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Tenant {
    /// Identifier, dense 1..=n within the generated table
    pub id: i64,
    /// Owning user account id
    pub user_id: i64,
    /// Property the lease is attached to
    pub facility_id: i64,
    /// First day of the lease
    pub lease_start: DateTime<Utc>,
    /// Last day of the lease; may already be in the past
    pub lease_end: DateTime<Utc>,
    /// Monthly rent in whole dollars
    pub rent_amount: i64,
    /// Display name, e.g. "Tenant 2"
    pub name: String,
}
