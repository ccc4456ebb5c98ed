//! Derived report views.
//!
//! Pure functions over immutable snapshots of the store: no state, no I/O,
//! no error path. Callers re-invoke them whenever the underlying collections
//! change; nothing here is patched incrementally.

use std::collections::HashMap;

use crate::{
    Budget, Category, MoneyCents, MonthKey, Transaction, TransactionKind,
};

/// Aggregate income/expense/net totals over a transaction set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_income: MoneyCents,
    pub total_expenses: MoneyCents,
    pub net_amount: MoneyCents,
}

/// Income and expense totals inside one monthly bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonthlyTotals {
    pub income: MoneyCents,
    pub expense: MoneyCents,
}

/// The relationship between one budget record and the spend it governs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetUtilization {
    pub budget: Budget,
    pub spent: MoneyCents,
    /// Ceiling minus spend, floored at zero.
    pub remaining: MoneyCents,
    /// Strict comparison: spending exactly the ceiling is not over budget.
    pub over_budget: bool,
    /// Spend beyond the ceiling; zero when not over budget.
    pub over_amount: MoneyCents,
}

/// Sums a transaction set into income/expense/net totals.
///
/// The net amount is recomputed from the two totals, never accumulated
/// alongside them. An empty snapshot yields an all-zero summary.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let (mut total_income, mut total_expenses) = (MoneyCents::ZERO, MoneyCents::ZERO);

    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => total_income += tx.amount,
            TransactionKind::Expense => total_expenses += tx.amount,
        }
    }

    Summary {
        total_income,
        total_expenses,
        net_amount: total_income - total_expenses,
    }
}

/// Buckets income and expense totals by calendar month.
///
/// Keys are (year, month) pairs; months with no records are absent. Callers
/// wanting a continuous 12-month series must zero-fill themselves, and any
/// display ordering or labeling happens at the presentation boundary.
pub fn monthly_totals(transactions: &[Transaction]) -> HashMap<MonthKey, MonthlyTotals> {
    let mut buckets: HashMap<MonthKey, MonthlyTotals> = HashMap::new();

    for tx in transactions {
        let bucket = buckets
            .entry(MonthKey::from_datetime(tx.occurred_at))
            .or_default();
        match tx.kind {
            TransactionKind::Income => bucket.income += tx.amount,
            TransactionKind::Expense => bucket.expense += tx.amount,
        }
    }

    buckets
}

/// Totals expense amounts per category.
///
/// Income records are excluded entirely; categories with no expenses are
/// absent rather than zero.
pub fn expenses_by_category(transactions: &[Transaction]) -> HashMap<Category, MoneyCents> {
    let mut buckets: HashMap<Category, MoneyCents> = HashMap::new();

    for tx in transactions {
        if tx.kind == TransactionKind::Expense {
            *buckets.entry(tx.category).or_default() += tx.amount;
        }
    }

    buckets
}

/// Computes spend, remainder and over-budget classification per budget.
///
/// Both inputs are expected to be pre-filtered to the same (month, year) by
/// the caller. Category matching needs no normalization here: both sides
/// were parsed into the canonical [`Category`] at the model boundary.
///
/// The display layer owns the progress ratio and its zero-ceiling guard;
/// nothing here divides.
pub fn budget_utilization(
    budgets: &[Budget],
    transactions: &[Transaction],
) -> Vec<BudgetUtilization> {
    let spending = expenses_by_category(transactions);

    budgets
        .iter()
        .map(|budget| {
            let spent = spending
                .get(&budget.category)
                .copied()
                .unwrap_or(MoneyCents::ZERO);
            let over_budget = spent > budget.amount;
            let (remaining, over_amount) = if over_budget {
                (MoneyCents::ZERO, spent - budget.amount)
            } else {
                (budget.amount - spent, MoneyCents::ZERO)
            };

            BudgetUtilization {
                budget: budget.clone(),
                spent,
                remaining,
                over_budget,
                over_amount,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Month;
    use chrono::{TimeZone, Utc};

    fn tx(
        kind: TransactionKind,
        category: Category,
        cents: i64,
        year: i32,
        month: u32,
        day: u32,
    ) -> Transaction {
        Transaction::new(
            kind,
            category,
            "test entry",
            MoneyCents::new(cents),
            Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap(),
        )
        .unwrap()
    }

    fn budget(category: Category, cents: i64, month: Month, year: i32) -> Budget {
        Budget::new(category, MoneyCents::new(cents), month, year).unwrap()
    }

    #[test]
    fn summary_of_empty_snapshot_is_zero() {
        assert_eq!(summarize(&[]), Summary::default());
    }

    #[test]
    fn summary_net_is_income_minus_expenses() {
        let txs = vec![
            tx(TransactionKind::Income, Category::Other, 150_000, 2024, 1, 10),
            tx(TransactionKind::Expense, Category::Food, 50_000, 2024, 1, 5),
            tx(TransactionKind::Expense, Category::Transportation, 20_000, 2024, 2, 1),
        ];

        let summary = summarize(&txs);
        assert_eq!(summary.total_income.cents(), 150_000);
        assert_eq!(summary.total_expenses.cents(), 70_000);
        assert_eq!(summary.net_amount, summary.total_income - summary.total_expenses);
        assert_eq!(summary.net_amount.cents(), 80_000);
    }

    #[test]
    fn summary_net_can_go_negative() {
        let txs = vec![
            tx(TransactionKind::Income, Category::Other, 100, 2024, 3, 1),
            tx(TransactionKind::Expense, Category::Shopping, 300, 2024, 3, 2),
        ];
        assert_eq!(summarize(&txs).net_amount.cents(), -200);
    }

    #[test]
    fn monthly_buckets_accumulate_within_a_month() {
        let txs = vec![
            tx(TransactionKind::Expense, Category::Food, 500, 2024, 1, 5),
            tx(TransactionKind::Expense, Category::Food, 700, 2024, 1, 20),
            tx(TransactionKind::Income, Category::Other, 1500, 2024, 1, 10),
        ];

        let buckets = monthly_totals(&txs);
        assert_eq!(buckets.len(), 1);
        let january = buckets[&MonthKey::new(2024, Month::January)];
        assert_eq!(january.income.cents(), 1500);
        assert_eq!(january.expense.cents(), 1200);
    }

    #[test]
    fn months_without_records_produce_no_bucket() {
        let txs = vec![tx(TransactionKind::Expense, Category::Food, 500, 2024, 1, 5)];
        let buckets = monthly_totals(&txs);
        assert!(!buckets.contains_key(&MonthKey::new(2024, Month::February)));
    }

    #[test]
    fn same_month_of_different_years_stays_distinct() {
        let txs = vec![
            tx(TransactionKind::Expense, Category::Food, 100, 2023, 1, 15),
            tx(TransactionKind::Expense, Category::Food, 200, 2024, 1, 15),
        ];

        let buckets = monthly_totals(&txs);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[&MonthKey::new(2023, Month::January)].expense.cents(), 100);
        assert_eq!(buckets[&MonthKey::new(2024, Month::January)].expense.cents(), 200);
    }

    #[test]
    fn category_buckets_exclude_income() {
        let txs = vec![
            tx(TransactionKind::Expense, Category::Food, 500, 2024, 1, 5),
            tx(TransactionKind::Income, Category::Food, 9_999, 2024, 1, 6),
        ];

        let buckets = expenses_by_category(&txs);
        assert_eq!(buckets[&Category::Food].cents(), 500);
    }

    #[test]
    fn categories_without_expenses_are_absent() {
        let txs = vec![tx(TransactionKind::Expense, Category::Food, 500, 2024, 1, 5)];
        let buckets = expenses_by_category(&txs);
        assert!(!buckets.contains_key(&Category::Housing));
        assert_eq!(buckets.len(), 1);
    }

    #[test]
    fn utilization_at_exactly_the_ceiling_is_not_over() {
        let budgets = vec![budget(Category::Food, 1000, Month::January, 2024)];
        let txs = vec![
            tx(TransactionKind::Expense, Category::Food, 400, 2024, 1, 5),
            tx(TransactionKind::Expense, Category::Food, 600, 2024, 1, 20),
        ];

        let report = budget_utilization(&budgets, &txs);
        assert_eq!(report.len(), 1);
        assert!(!report[0].over_budget);
        assert_eq!(report[0].spent.cents(), 1000);
        assert_eq!(report[0].remaining, MoneyCents::ZERO);
        assert_eq!(report[0].over_amount, MoneyCents::ZERO);
    }

    #[test]
    fn utilization_over_the_ceiling() {
        let budgets = vec![budget(Category::Food, 1000, Month::January, 2024)];
        let txs = vec![tx(TransactionKind::Expense, Category::Food, 1200, 2024, 1, 5)];

        let report = budget_utilization(&budgets, &txs);
        assert!(report[0].over_budget);
        assert_eq!(report[0].over_amount.cents(), 200);
        assert_eq!(report[0].remaining, MoneyCents::ZERO);
    }

    #[test]
    fn utilization_with_no_matching_spend() {
        let budgets = vec![budget(Category::Healthcare, 5000, Month::January, 2024)];
        let report = budget_utilization(&budgets, &[]);
        assert_eq!(report[0].spent, MoneyCents::ZERO);
        assert_eq!(report[0].remaining.cents(), 5000);
        assert!(!report[0].over_budget);
    }

    #[test]
    fn utilization_emits_one_row_per_budget_record() {
        // Duplicate (category, month, year) keys are not deduplicated; each
        // record is evaluated independently against the same spend bucket.
        let budgets = vec![
            budget(Category::Food, 1000, Month::January, 2024),
            budget(Category::Food, 2000, Month::January, 2024),
        ];
        let txs = vec![tx(TransactionKind::Expense, Category::Food, 1500, 2024, 1, 9)];

        let report = budget_utilization(&budgets, &txs);
        assert_eq!(report.len(), 2);
        assert!(report[0].over_budget);
        assert!(!report[1].over_budget);
    }

    #[test]
    fn end_to_end_dashboard_scenario() {
        let txs = vec![
            tx(TransactionKind::Expense, Category::Food, 500, 2024, 1, 5),
            tx(TransactionKind::Income, Category::Uncategorized, 1500, 2024, 1, 10),
            tx(TransactionKind::Expense, Category::Transportation, 200, 2024, 2, 1),
        ];

        let summary = summarize(&txs);
        assert_eq!(summary.total_income.cents(), 1500);
        assert_eq!(summary.total_expenses.cents(), 700);
        assert_eq!(summary.net_amount.cents(), 800);

        let categories = expenses_by_category(&txs);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[&Category::Food].cents(), 500);
        assert_eq!(categories[&Category::Transportation].cents(), 200);

        let months = monthly_totals(&txs);
        assert_eq!(months.len(), 2);
        let january = months[&MonthKey::new(2024, Month::January)];
        assert_eq!(january.income.cents(), 1500);
        assert_eq!(january.expense.cents(), 500);
        let february = months[&MonthKey::new(2024, Month::February)];
        assert_eq!(february.income.cents(), 0);
        assert_eq!(february.expense.cents(), 200);
    }

    #[test]
    fn end_to_end_budget_scenario() {
        // January snapshot only: the February transaction is filtered out by
        // the caller before the engine ever sees it.
        let budgets = vec![budget(Category::Food, 400, Month::January, 2024)];
        let january_txs = vec![
            tx(TransactionKind::Expense, Category::Food, 500, 2024, 1, 5),
            tx(TransactionKind::Income, Category::Uncategorized, 1500, 2024, 1, 10),
        ];

        let report = budget_utilization(&budgets, &january_txs);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].spent.cents(), 500);
        assert_eq!(report[0].remaining, MoneyCents::ZERO);
        assert!(report[0].over_budget);
        assert_eq!(report[0].over_amount.cents(), 100);
    }
}
