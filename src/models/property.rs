//! Property table row and its category sets.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UnknownVariant;

/// A single property in the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Property {
    /// Identifier, dense 1..=n within the generated table
    pub id: i64,
    /// Display name, e.g. "Property 3"
    pub name: String,
    /// Street address
    pub address: String,
    /// Property type
    #[serde(rename = "type")]
    pub kind: PropertyType,
    /// Listing/occupancy status
    pub status: PropertyStatus,
    /// Floor area in square feet
    pub size_sqft: i64,
    /// Construction year
    pub year_built: i32,
    /// Assessed value in whole dollars; independent of size
    pub value: i64,
}

/// Property type category set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Residential,
    Commercial,
    Industrial,
    Land,
}

impl PropertyType {
    pub const ALL: &'static [PropertyType] = &[
        PropertyType::Residential,
        PropertyType::Commercial,
        PropertyType::Industrial,
        PropertyType::Land,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Residential => "RESIDENTIAL",
            PropertyType::Commercial => "COMMERCIAL",
            PropertyType::Industrial => "INDUSTRIAL",
            PropertyType::Land => "LAND",
        }
    }
}

impl FromStr for PropertyType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| UnknownVariant {
                field: "property type",
                value: s.to_string(),
            })
    }
}

/// Property status category set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyStatus {
    Active,
    Inactive,
    Maintenance,
    ListedForSale,
    ListedForRent,
}

impl PropertyStatus {
    pub const ALL: &'static [PropertyStatus] = &[
        PropertyStatus::Active,
        PropertyStatus::Inactive,
        PropertyStatus::Maintenance,
        PropertyStatus::ListedForSale,
        PropertyStatus::ListedForRent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Active => "ACTIVE",
            PropertyStatus::Inactive => "INACTIVE",
            PropertyStatus::Maintenance => "MAINTENANCE",
            PropertyStatus::ListedForSale => "LISTED_FOR_SALE",
            PropertyStatus::ListedForRent => "LISTED_FOR_RENT",
        }
    }
}

impl FromStr for PropertyStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| UnknownVariant {
                field: "property status",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_type_round_trips_wire_form() {
        for kind in PropertyType::ALL {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let parsed: PropertyType = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, *kind);
        }
    }

    #[test]
    fn property_status_parses_case_insensitively() {
        assert_eq!(
            "listed_for_sale".parse::<PropertyStatus>().unwrap(),
            PropertyStatus::ListedForSale
        );
        assert_eq!(
            " ACTIVE ".parse::<PropertyStatus>().unwrap(),
            PropertyStatus::Active
        );
        assert!("SOLD".parse::<PropertyStatus>().is_err());
    }
}
