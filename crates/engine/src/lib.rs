//! Store and aggregation engine for the personal finance tracker.
//!
//! [`Engine`] owns the database connection and exposes validated CRUD for
//! transactions and budgets plus report conveniences. The reports themselves
//! live in [`reports`] as pure functions over snapshots; the engine fetches
//! a fresh snapshot and hands it over, it never caches derived views.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, QueryFilter, QueryOrder, QuerySelect, prelude::*};
use uuid::Uuid;

pub use budgets::Budget;
pub use categories::Category;
pub use error::EngineError;
pub use money::MoneyCents;
pub use months::{Month, MonthKey};
pub use reports::{BudgetUtilization, MonthlyTotals, Summary};
pub use transactions::{MAX_DESCRIPTION_LEN, Transaction, TransactionKind};

mod budgets;
mod categories;
mod error;
mod money;
mod months;
pub mod reports;
mod transactions;

type ResultEngine<T> = Result<T, EngineError>;

/// Fields for creating or replacing a transaction.
///
/// `occurred_at` is optional; the store stamps the current time when the
/// caller leaves it out (create) or keeps the stored value (update).
#[derive(Clone, Debug)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub category: Category,
    pub description: String,
    pub amount: MoneyCents,
    pub occurred_at: Option<DateTime<Utc>>,
}

/// Fields for creating or replacing a budget.
#[derive(Clone, Copy, Debug)]
pub struct BudgetDraft {
    pub category: Category,
    pub amount: MoneyCents,
    pub month: Month,
    pub year: i32,
}

/// Listing filter for transactions: an optional calendar-month window plus
/// an optional result limit. Anything richer is out of scope.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransactionFilter {
    pub period: Option<MonthKey>,
    pub limit: Option<u64>,
}

#[derive(Clone, Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    fn period_bounds(period: MonthKey) -> ResultEngine<(DateTime<Utc>, DateTime<Utc>)> {
        let invalid =
            || EngineError::Validation(format!("invalid period: {} {}", period.month, period.year));
        let start = period.first_instant().ok_or_else(invalid)?;
        let end = period.succ().first_instant().ok_or_else(invalid)?;
        Ok((start, end))
    }

    /// Validates and stores a new transaction.
    pub async fn create_transaction(&self, draft: TransactionDraft) -> ResultEngine<Transaction> {
        let tx = Transaction::new(
            draft.kind,
            draft.category,
            &draft.description,
            draft.amount,
            draft.occurred_at.unwrap_or_else(Utc::now),
        )?;

        transactions::ActiveModel::from(&tx)
            .insert(&self.database)
            .await?;
        Ok(tx)
    }

    /// Returns a single transaction by id.
    pub async fn transaction(&self, id: Uuid) -> ResultEngine<Transaction> {
        let model = transactions::Entity::find_by_id(id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("transaction".to_string()))?;
        Transaction::try_from(model)
    }

    /// Lists transactions, newest first.
    pub async fn list_transactions(
        &self,
        filter: TransactionFilter,
    ) -> ResultEngine<Vec<Transaction>> {
        let mut query = transactions::Entity::find()
            .order_by_desc(transactions::Column::OccurredAt);

        if let Some(period) = filter.period {
            let (start, end) = Self::period_bounds(period)?;
            query = query
                .filter(transactions::Column::OccurredAt.gte(start))
                .filter(transactions::Column::OccurredAt.lt(end));
        }
        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        query
            .all(&self.database)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    /// Replaces the fields of an existing transaction.
    ///
    /// The stored timestamp is kept when the draft carries none.
    pub async fn update_transaction(
        &self,
        id: Uuid,
        draft: TransactionDraft,
    ) -> ResultEngine<Transaction> {
        let existing = self.transaction(id).await?;

        let mut tx = Transaction::new(
            draft.kind,
            draft.category,
            &draft.description,
            draft.amount,
            draft.occurred_at.unwrap_or(existing.occurred_at),
        )?;
        tx.id = existing.id;

        transactions::ActiveModel::from(&tx)
            .update(&self.database)
            .await?;
        Ok(tx)
    }

    /// Deletes a transaction.
    pub async fn delete_transaction(&self, id: Uuid) -> ResultEngine<()> {
        let result = transactions::Entity::delete_by_id(id.to_string())
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound("transaction".to_string()));
        }
        Ok(())
    }

    /// Validates and stores a new budget.
    ///
    /// Uniqueness of (category, month, year) is not enforced; reports emit
    /// one row per stored record.
    pub async fn create_budget(&self, draft: BudgetDraft) -> ResultEngine<Budget> {
        let budget = Budget::new(draft.category, draft.amount, draft.month, draft.year)?;

        budgets::ActiveModel::from(&budget)
            .insert(&self.database)
            .await?;
        Ok(budget)
    }

    /// Lists budgets scoped to one (month, year), optionally to one category.
    pub async fn list_budgets(
        &self,
        category: Option<Category>,
        month: Month,
        year: i32,
    ) -> ResultEngine<Vec<Budget>> {
        let mut query = budgets::Entity::find()
            .filter(budgets::Column::Month.eq(month.as_str()))
            .filter(budgets::Column::Year.eq(year))
            .order_by_asc(budgets::Column::Category);

        if let Some(category) = category {
            query = query.filter(budgets::Column::Category.eq(category.as_str()));
        }

        query
            .all(&self.database)
            .await?
            .into_iter()
            .map(Budget::try_from)
            .collect()
    }

    /// Replaces the fields of an existing budget.
    pub async fn update_budget(&self, id: Uuid, draft: BudgetDraft) -> ResultEngine<Budget> {
        let model = budgets::Entity::find_by_id(id.to_string())
            .one(&self.database)
            .await?
            .ok_or_else(|| EngineError::KeyNotFound("budget".to_string()))?;
        let existing = Budget::try_from(model)?;

        let mut budget = Budget::new(draft.category, draft.amount, draft.month, draft.year)?;
        budget.id = existing.id;

        budgets::ActiveModel::from(&budget)
            .update(&self.database)
            .await?;
        Ok(budget)
    }

    /// Deletes a budget.
    pub async fn delete_budget(&self, id: Uuid) -> ResultEngine<()> {
        let result = budgets::Entity::delete_by_id(id.to_string())
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::KeyNotFound("budget".to_string()));
        }
        Ok(())
    }

    /// Income/expense/net totals over the whole store.
    pub async fn summary(&self) -> ResultEngine<Summary> {
        let txs = self.list_transactions(TransactionFilter::default()).await?;
        Ok(reports::summarize(&txs))
    }

    /// Monthly income/expense buckets over the whole store.
    pub async fn monthly_report(&self) -> ResultEngine<HashMap<MonthKey, MonthlyTotals>> {
        let txs = self.list_transactions(TransactionFilter::default()).await?;
        Ok(reports::monthly_totals(&txs))
    }

    /// Expense totals per category over the whole store.
    pub async fn category_report(&self) -> ResultEngine<HashMap<Category, MoneyCents>> {
        let txs = self.list_transactions(TransactionFilter::default()).await?;
        Ok(reports::expenses_by_category(&txs))
    }

    /// Budget-vs-actual rows for one (month, year): budgets for the month
    /// against transactions windowed to the same month.
    pub async fn budget_report(
        &self,
        month: Month,
        year: i32,
    ) -> ResultEngine<Vec<BudgetUtilization>> {
        let budgets = self.list_budgets(None, month, year).await?;
        let txs = self
            .list_transactions(TransactionFilter {
                period: Some(MonthKey::new(year, month)),
                limit: None,
            })
            .await?;
        Ok(reports::budget_utilization(&budgets, &txs))
    }
}

/// The builder for `Engine`.
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database.
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`.
    pub fn build(self) -> Engine {
        Engine {
            database: self.database,
        }
    }
}
