//! Properties: filterable property list with age and size/value breakdowns.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::mock::Portfolio;
use crate::models::{Property, PropertyStatus, PropertyType};

use super::aggregate::{HistogramBin, histogram};

/// Multiselect filter over property type and status.
///
/// `None` for either selection means "all observed values", matching the
/// dashboard's multiselect defaults.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    pub types: Option<Vec<PropertyType>>,
    pub statuses: Option<Vec<PropertyStatus>>,
}

impl PropertyFilter {
    fn matches(&self, property: &Property) -> bool {
        let type_ok = self
            .types
            .as_ref()
            .map(|types| types.contains(&property.kind))
            .unwrap_or(true);
        let status_ok = self
            .statuses
            .as_ref()
            .map(|statuses| statuses.contains(&property.status))
            .unwrap_or(true);
        type_ok && status_ok
    }
}

/// Derived rows for the Properties view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertiesReport {
    /// The filtered property rows
    pub properties: Vec<Property>,
    /// Age in years per filtered property
    pub ages: Vec<PropertyAge>,
    /// 10-bin histogram over the filtered ages
    pub age_histogram: Vec<HistogramBin>,
    /// Size/value scatter points per filtered property
    pub size_value_points: Vec<SizeValuePoint>,
}

/// Age of one property at the evaluation year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PropertyAge {
    pub id: i64,
    pub name: String,
    /// current year minus construction year
    pub age: i32,
}

/// One point of the size-versus-value scatter, tagged by type.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SizeValuePoint {
    pub size_sqft: i64,
    pub value: i64,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    pub age: i32,
}

/// Compute the Properties view for the given filter, evaluated at `now`.
pub fn properties(portfolio: &Portfolio, filter: &PropertyFilter, now: DateTime<Utc>) -> PropertiesReport {
    let current_year = now.year();
    let filtered: Vec<Property> = portfolio
        .properties
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    let ages: Vec<PropertyAge> = filtered
        .iter()
        .map(|p| PropertyAge {
            id: p.id,
            name: p.name.clone(),
            age: current_year - p.year_built,
        })
        .collect();

    let age_values: Vec<f64> = ages.iter().map(|a| a.age as f64).collect();

    let size_value_points = filtered
        .iter()
        .map(|p| SizeValuePoint {
            size_sqft: p.size_sqft,
            value: p.value,
            kind: p.kind,
            age: current_year - p.year_built,
        })
        .collect();

    PropertiesReport {
        age_histogram: histogram(&age_values, 10),
        ages,
        size_value_points,
        properties: filtered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn property(id: i64, kind: PropertyType, status: PropertyStatus, year_built: i32) -> Property {
        Property {
            id,
            name: format!("Property {id}"),
            address: format!("{} Main St, City {id}", 99 + id),
            kind,
            status,
            size_sqft: 1000 + id * 100,
            year_built,
            value: 500_000 + id * 10_000,
        }
    }

    fn portfolio() -> Portfolio {
        Portfolio {
            properties: vec![
                property(1, PropertyType::Residential, PropertyStatus::Active, 2000),
                property(2, PropertyType::Commercial, PropertyStatus::Inactive, 1985),
                property(3, PropertyType::Residential, PropertyStatus::Maintenance, 2010),
                property(4, PropertyType::Land, PropertyStatus::Active, 1995),
            ],
            tenants: vec![],
            payments: vec![],
            expenses: vec![],
            tasks: vec![],
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn default_filter_keeps_every_row() {
        let portfolio = portfolio();
        let report = properties(&portfolio, &PropertyFilter::default(), Utc::now());
        assert_eq!(report.properties.len(), 4);
    }

    #[test]
    fn filter_is_conjunction_of_type_and_status() {
        let portfolio = portfolio();
        let filter = PropertyFilter {
            types: Some(vec![PropertyType::Residential]),
            statuses: Some(vec![PropertyStatus::Active]),
        };
        let report = properties(&portfolio, &filter, Utc::now());

        // Only property 1 is residential AND active
        assert_eq!(report.properties.len(), 1);
        assert_eq!(report.properties[0].id, 1);

        // Every emitted row satisfies both selections, and nothing matching
        // was dropped
        for row in &report.properties {
            assert!(filter.types.as_ref().unwrap().contains(&row.kind));
            assert!(filter.statuses.as_ref().unwrap().contains(&row.status));
        }
        let expected = portfolio
            .properties
            .iter()
            .filter(|p| {
                p.kind == PropertyType::Residential && p.status == PropertyStatus::Active
            })
            .count();
        assert_eq!(report.properties.len(), expected);
    }

    #[test]
    fn age_is_current_year_minus_year_built() {
        let portfolio = portfolio();
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let filter = PropertyFilter {
            types: None,
            statuses: Some(vec![PropertyStatus::Active]),
        };
        let report = properties(&portfolio, &filter, now);

        let age_of_first = report.ages.iter().find(|a| a.id == 1).unwrap();
        assert_eq!(age_of_first.age, 24); // built 2000, evaluated 2024
    }

    #[test]
    fn scatter_points_carry_type_and_age() {
        let portfolio = portfolio();
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let report = properties(&portfolio, &PropertyFilter::default(), now);
        assert_eq!(report.size_value_points.len(), 4);
        let land = report
            .size_value_points
            .iter()
            .find(|p| p.kind == PropertyType::Land)
            .unwrap();
        assert_eq!(land.age, 29);
    }

    #[test]
    fn excluding_everything_yields_empty_report() {
        let portfolio = portfolio();
        let filter = PropertyFilter {
            types: Some(vec![PropertyType::Industrial]),
            statuses: None,
        };
        let report = properties(&portfolio, &filter, Utc::now());
        assert!(report.properties.is_empty());
        assert!(report.ages.is_empty());
        assert!(report.age_histogram.is_empty());
        assert!(report.size_value_points.is_empty());
    }
}
