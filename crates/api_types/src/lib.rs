//! Wire types shared by the HTTP server and its clients.
//!
//! Amounts travel as integer minor units (`*_minor`); the `*_display`
//! strings carry the formatted values clients render as-is (two decimals
//! on summary cards, whole units on budget rows).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transportation,
    Housing,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Other,
    Uncategorized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

pub mod transaction {
    use super::*;

    /// Request body for creating or replacing a transaction.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub kind: TransactionKind,
        /// Defaults to `uncategorized` when absent.
        pub category: Option<Category>,
        pub description: String,
        pub amount_minor: i64,
        /// RFC3339 timestamp; server uses now() when absent.
        pub occurred_at: Option<DateTime<FixedOffset>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: Uuid,
        pub kind: TransactionKind,
        pub category: Category,
        pub description: String,
        pub amount_minor: i64,
        pub occurred_at: DateTime<FixedOffset>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionListResponse {
        pub transactions: Vec<TransactionView>,
    }

    /// Query string for `GET /transactions`. The month window applies only
    /// when both `month` and `year` are present.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionListQuery {
        pub month: Option<Month>,
        pub year: Option<i32>,
        pub limit: Option<u64>,
    }
}

pub mod budget {
    use super::*;

    /// Request body for creating or replacing a budget.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetNew {
        pub category: Category,
        pub amount_minor: i64,
        pub month: Month,
        pub year: i32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetView {
        pub id: Uuid,
        pub category: Category,
        pub amount_minor: i64,
        pub month: Month,
        pub year: i32,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetListResponse {
        pub budgets: Vec<BudgetView>,
    }

    /// Query string for `GET /budgets`: month and year are required.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetListQuery {
        pub category: Option<Category>,
        pub month: Month,
        pub year: i32,
    }
}

pub mod reports {
    use super::*;

    /// Totals for the summary cards. Display strings use two decimals.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SummaryResponse {
        pub total_income_minor: i64,
        pub total_expenses_minor: i64,
        pub net_amount_minor: i64,
        pub total_income_display: String,
        pub total_expenses_display: String,
        pub net_amount_display: String,
    }

    /// One monthly bucket, sorted by (year, month) in the response.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthlyPoint {
        pub year: i32,
        pub month: Month,
        /// Chart label ("Jan", "Feb", ...).
        pub label: String,
        pub income_minor: i64,
        pub expense_minor: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthlyResponse {
        pub months: Vec<MonthlyPoint>,
    }

    /// One slice of the expense-by-category breakdown.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategorySlice {
        pub category: Category,
        /// Capitalized label ("Food", "Healthcare", ...).
        pub label: String,
        pub amount_minor: i64,
        /// Share of total expenses, 0.0 to 100.0.
        pub percent: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryResponse {
        pub categories: Vec<CategorySlice>,
        pub total_expenses_minor: i64,
    }

    /// Budget-vs-actual row. Display strings use whole units.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetUtilizationView {
        pub id: Uuid,
        pub category: Category,
        pub label: String,
        pub budget_minor: i64,
        pub spent_minor: i64,
        pub remaining_minor: i64,
        pub over_budget: bool,
        pub over_amount_minor: i64,
        /// Progress-bar ratio, capped at 100.
        pub percent_used: f64,
        pub budget_display: String,
        pub spent_display: String,
        pub remaining_display: String,
        pub over_amount_display: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetReportResponse {
        pub budgets: Vec<BudgetUtilizationView>,
    }

    /// Query string for `GET /reports/budgets`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetReportQuery {
        pub month: Month,
        pub year: i32,
    }
}

/// Body returned by delete endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct Deleted {
    pub message: String,
}
