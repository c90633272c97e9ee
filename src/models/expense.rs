//! Expense table row and its category sets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A property-related expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Expense {
    /// Identifier, dense 1..=n within the generated table
    pub id: i64,
    /// User account the expense was booked by
    pub user_id: i64,
    /// Property the expense belongs to (not referentially checked)
    pub property_id: i64,
    /// Amount in whole dollars
    pub amount: i64,
    /// ISO currency code, always "USD" in generated data
    pub currency: String,
    /// Expense category
    pub category: ExpenseCategory,
    /// Settlement status
    pub status: ExpenseStatus,
    /// When the expense was incurred
    pub expense_date: DateTime<Utc>,
    /// Free-form description
    pub description: String,
}

/// Expense category set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    Rent,
    Utility,
    Maintenance,
    Cleaning,
    Insurance,
    Taxes,
}

impl ExpenseCategory {
    pub const ALL: &'static [ExpenseCategory] = &[
        ExpenseCategory::Rent,
        ExpenseCategory::Utility,
        ExpenseCategory::Maintenance,
        ExpenseCategory::Cleaning,
        ExpenseCategory::Insurance,
        ExpenseCategory::Taxes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Rent => "RENT",
            ExpenseCategory::Utility => "UTILITY",
            ExpenseCategory::Maintenance => "MAINTENANCE",
            ExpenseCategory::Cleaning => "CLEANING",
            ExpenseCategory::Insurance => "INSURANCE",
            ExpenseCategory::Taxes => "TAXES",
        }
    }
}

/// Expense status category set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseStatus {
    Due,
    Pending,
    Paid,
    PartiallyPaid,
    Overdue,
}

impl ExpenseStatus {
    pub const ALL: &'static [ExpenseStatus] = &[
        ExpenseStatus::Due,
        ExpenseStatus::Pending,
        ExpenseStatus::Paid,
        ExpenseStatus::PartiallyPaid,
        ExpenseStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseStatus::Due => "DUE",
            ExpenseStatus::Pending => "PENDING",
            ExpenseStatus::Paid => "PAID",
            ExpenseStatus::PartiallyPaid => "PARTIALLY_PAID",
            ExpenseStatus::Overdue => "OVERDUE",
        }
    }
}
