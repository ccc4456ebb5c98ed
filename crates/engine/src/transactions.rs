//! Transaction primitives.
//!
//! A `Transaction` is a single dated money movement: income or expense, with
//! a category, a description and a non-negative amount.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Category, EngineError, MoneyCents, ResultEngine};

/// Longest accepted description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(EngineError::Validation(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub category: Category,
    pub description: String,
    pub amount: MoneyCents,
    pub occurred_at: DateTime<Utc>,
}

impl Transaction {
    /// Validates the fields and builds a transaction with a fresh id.
    ///
    /// The description is stored trimmed; it must be non-empty and at most
    /// [`MAX_DESCRIPTION_LEN`] characters. The amount must not be negative
    /// (refunds are recorded as `income`).
    pub fn new(
        kind: TransactionKind,
        category: Category,
        description: &str,
        amount: MoneyCents,
        occurred_at: DateTime<Utc>,
    ) -> ResultEngine<Self> {
        if amount.is_negative() {
            return Err(EngineError::Validation(
                "amount must not be negative".to_string(),
            ));
        }

        let description = description.trim();
        if description.is_empty() {
            return Err(EngineError::Validation(
                "description is required".to_string(),
            ));
        }
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(EngineError::Validation(format!(
                "description cannot be more than {MAX_DESCRIPTION_LEN} characters"
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            category,
            description: description.to_string(),
            amount,
            occurred_at,
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub kind: String,
    pub category: String,
    pub description: String,
    pub amount_minor: i64,
    pub occurred_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Transaction> for ActiveModel {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: ActiveValue::Set(tx.id.to_string()),
            kind: ActiveValue::Set(tx.kind.as_str().to_string()),
            category: ActiveValue::Set(tx.category.as_str().to_string()),
            description: ActiveValue::Set(tx.description.clone()),
            amount_minor: ActiveValue::Set(tx.amount.cents()),
            occurred_at: ActiveValue::Set(tx.occurred_at),
        }
    }
}

impl TryFrom<Model> for Transaction {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::KeyNotFound("transaction".to_string()))?,
            kind: TransactionKind::try_from(model.kind.as_str())?,
            category: Category::try_from(model.category.as_str())?,
            description: model.description,
            amount: MoneyCents::new(model.amount_minor),
            occurred_at: model.occurred_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap()
    }

    #[test]
    fn kind_parse_is_case_insensitive() {
        assert_eq!(
            TransactionKind::try_from("Income").unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            TransactionKind::try_from("EXPENSE").unwrap(),
            TransactionKind::Expense
        );
        assert!(TransactionKind::try_from("transfer").is_err());
    }

    #[test]
    fn new_trims_description() {
        let tx = Transaction::new(
            TransactionKind::Expense,
            Category::Food,
            "  lunch  ",
            MoneyCents::new(500),
            at(),
        )
        .unwrap();
        assert_eq!(tx.description, "lunch");
    }

    #[test]
    fn new_rejects_negative_amount() {
        let result = Transaction::new(
            TransactionKind::Expense,
            Category::Food,
            "lunch",
            MoneyCents::new(-1),
            at(),
        );
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[test]
    fn new_accepts_zero_amount() {
        assert!(
            Transaction::new(
                TransactionKind::Expense,
                Category::Other,
                "placeholder",
                MoneyCents::ZERO,
                at(),
            )
            .is_ok()
        );
    }

    #[test]
    fn new_rejects_blank_or_oversized_description() {
        assert!(
            Transaction::new(
                TransactionKind::Income,
                Category::Uncategorized,
                "   ",
                MoneyCents::new(100),
                at(),
            )
            .is_err()
        );

        let long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(
            Transaction::new(
                TransactionKind::Income,
                Category::Uncategorized,
                &long,
                MoneyCents::new(100),
                at(),
            )
            .is_err()
        );
    }

    #[test]
    fn model_round_trip() {
        let tx = Transaction::new(
            TransactionKind::Income,
            Category::Other,
            "salary",
            MoneyCents::new(150_000),
            at(),
        )
        .unwrap();
        let model = Model {
            id: tx.id.to_string(),
            kind: "income".to_string(),
            category: "other".to_string(),
            description: "salary".to_string(),
            amount_minor: 150_000,
            occurred_at: tx.occurred_at,
        };
        assert_eq!(Transaction::try_from(model).unwrap(), tx);
    }
}
