//! Report API endpoints.
//!
//! Handlers fetch a snapshot through the engine and attach the presentation
//! policy the engine leaves out: display strings (two decimals
//! on summary cards, whole units on budget rows), sorted orderings, and the
//! capped progress percentage.

use api_types::reports::{
    BudgetReportQuery, BudgetReportResponse, BudgetUtilizationView, CategoryResponse,
    CategorySlice, MonthlyPoint, MonthlyResponse, SummaryResponse,
};
use axum::{
    Json,
    extract::{Query, State},
};
use engine::MoneyCents;

use crate::{
    ServerError,
    convert::{category_to_api, month_from_api, month_to_api},
    server::ServerState,
};

/// Progress-bar ratio for a budget row, capped at 100.
///
/// The ceiling is validated positive at the store boundary, but a zero
/// denominator must still not divide.
fn percent_used(spent: MoneyCents, ceiling: MoneyCents) -> f64 {
    if ceiling.cents() <= 0 {
        return 0.0;
    }
    ((spent.cents() as f64 / ceiling.cents() as f64) * 100.0).min(100.0)
}

pub async fn summary(
    State(state): State<ServerState>,
) -> Result<Json<SummaryResponse>, ServerError> {
    let summary = state.engine.summary().await?;

    Ok(Json(SummaryResponse {
        total_income_minor: summary.total_income.cents(),
        total_expenses_minor: summary.total_expenses.cents(),
        net_amount_minor: summary.net_amount.cents(),
        total_income_display: summary.total_income.format_plain(),
        total_expenses_display: summary.total_expenses.format_plain(),
        net_amount_display: summary.net_amount.format_plain(),
    }))
}

pub async fn monthly(
    State(state): State<ServerState>,
) -> Result<Json<MonthlyResponse>, ServerError> {
    let buckets = state.engine.monthly_report().await?;

    let mut keys: Vec<_> = buckets.keys().copied().collect();
    keys.sort();

    let months = keys
        .into_iter()
        .map(|key| {
            let totals = buckets[&key];
            MonthlyPoint {
                year: key.year,
                month: month_to_api(key.month),
                label: key.month.short_name().to_string(),
                income_minor: totals.income.cents(),
                expense_minor: totals.expense.cents(),
            }
        })
        .collect();

    Ok(Json(MonthlyResponse { months }))
}

pub async fn categories(
    State(state): State<ServerState>,
) -> Result<Json<CategoryResponse>, ServerError> {
    let buckets = state.engine.category_report().await?;

    let total: MoneyCents = buckets.values().copied().sum();
    let mut slices: Vec<_> = buckets.into_iter().collect();
    // Largest slice first; ties broken by label for a stable order.
    slices.sort_by(|(a_cat, a), (b_cat, b)| b.cmp(a).then(a_cat.label().cmp(b_cat.label())));

    let categories = slices
        .into_iter()
        .map(|(category, amount)| CategorySlice {
            category: category_to_api(category),
            label: category.label().to_string(),
            amount_minor: amount.cents(),
            percent: if total.is_zero() {
                0.0
            } else {
                (amount.cents() as f64 / total.cents() as f64) * 100.0
            },
        })
        .collect();

    Ok(Json(CategoryResponse {
        categories,
        total_expenses_minor: total.cents(),
    }))
}

pub async fn budgets(
    State(state): State<ServerState>,
    Query(query): Query<BudgetReportQuery>,
) -> Result<Json<BudgetReportResponse>, ServerError> {
    let rows = state
        .engine
        .budget_report(month_from_api(query.month), query.year)
        .await?;

    let budgets = rows
        .into_iter()
        .map(|row| BudgetUtilizationView {
            id: row.budget.id,
            category: category_to_api(row.budget.category),
            label: row.budget.category.label().to_string(),
            budget_minor: row.budget.amount.cents(),
            spent_minor: row.spent.cents(),
            remaining_minor: row.remaining.cents(),
            over_budget: row.over_budget,
            over_amount_minor: row.over_amount.cents(),
            percent_used: percent_used(row.spent, row.budget.amount),
            budget_display: row.budget.amount.format_whole(),
            spent_display: row.spent.format_whole(),
            remaining_display: row.remaining.format_whole(),
            over_amount_display: row.over_amount.format_whole(),
        })
        .collect();

    Ok(Json(BudgetReportResponse { budgets }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_caps_at_one_hundred() {
        assert_eq!(percent_used(MoneyCents::new(1200), MoneyCents::new(1000)), 100.0);
        assert_eq!(percent_used(MoneyCents::new(500), MoneyCents::new(1000)), 50.0);
    }

    #[test]
    fn percent_guards_zero_ceiling() {
        assert_eq!(percent_used(MoneyCents::new(500), MoneyCents::ZERO), 0.0);
    }
}
