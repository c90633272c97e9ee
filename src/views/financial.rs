//! Financial: income versus expenses over a trailing lookback window.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::mock::Portfolio;
use crate::models::{Expense, ExpenseCategory, Payment, PaymentStatus};

use super::aggregate::{count_by, month_key, sum_by};

/// Smallest accepted lookback window, in days.
pub const LOOKBACK_DAYS_MIN: u32 = 7;
/// Largest accepted lookback window, in days.
pub const LOOKBACK_DAYS_MAX: u32 = 365;
/// Window applied when the caller does not choose one.
pub const LOOKBACK_DAYS_DEFAULT: u32 = 90;

/// Derived rows for the Financial view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FinancialReport {
    /// The lookback window the report was computed over
    pub lookback_days: u32,
    /// Sum of payment amounts inside the window
    pub total_income: i64,
    /// Sum of expense amounts inside the window
    pub total_expenses: i64,
    /// income minus expenses
    pub net_income: i64,
    /// Monthly income and expense sums unioned into one series
    pub monthly_cash_flow: Vec<CashFlowPoint>,
    /// Expense sums grouped by category
    pub expenses_by_category: Vec<ExpenseCategorySum>,
    /// Payment counts grouped by status
    pub payments_by_status: Vec<PaymentStatusCount>,
}

/// One month of income or expense volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CashFlowPoint {
    /// Calendar month as "YYYY-MM"
    pub month: String,
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: CashFlowKind,
}

/// Whether a cash-flow point counts money in or money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CashFlowKind {
    Income,
    Expense,
}

/// Expense volume in one category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExpenseCategorySum {
    pub category: ExpenseCategory,
    pub amount: i64,
}

/// Count of payments in one status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentStatusCount {
    pub status: PaymentStatus,
    pub count: u64,
}

/// Compute the Financial view over the trailing `lookback_days` ending at
/// `now`. A payment or expense dated exactly on the cutoff is included.
pub fn financial(portfolio: &Portfolio, lookback_days: u32, now: DateTime<Utc>) -> FinancialReport {
    let cutoff = now - Duration::days(i64::from(lookback_days));

    let payments: Vec<&Payment> = portfolio
        .payments
        .iter()
        .filter(|p| p.payment_date >= cutoff)
        .collect();
    let expenses: Vec<&Expense> = portfolio
        .expenses
        .iter()
        .filter(|e| e.expense_date >= cutoff)
        .collect();

    let total_income: i64 = payments.iter().map(|p| p.amount).sum();
    let total_expenses: i64 = expenses.iter().map(|e| e.amount).sum();

    let mut monthly_cash_flow: Vec<CashFlowPoint> =
        sum_by(&payments, |p| month_key(p.payment_date), |p| p.amount)
            .into_iter()
            .map(|(month, amount)| CashFlowPoint {
                month,
                amount,
                kind: CashFlowKind::Income,
            })
            .collect();
    monthly_cash_flow.extend(
        sum_by(&expenses, |e| month_key(e.expense_date), |e| e.amount)
            .into_iter()
            .map(|(month, amount)| CashFlowPoint {
                month,
                amount,
                kind: CashFlowKind::Expense,
            }),
    );

    let expenses_by_category = sum_by(&expenses, |e| e.category, |e| e.amount)
        .into_iter()
        .map(|(category, amount)| ExpenseCategorySum { category, amount })
        .collect();

    let payments_by_status = count_by(&payments, |p| p.status)
        .into_iter()
        .map(|(status, count)| PaymentStatusCount { status, count })
        .collect();

    FinancialReport {
        lookback_days,
        total_income,
        total_expenses,
        net_income: total_income - total_expenses,
        monthly_cash_flow,
        expenses_by_category,
        payments_by_status,
    }
}
