//! Budget primitives.
//!
//! A `Budget` is a spend ceiling for one category within one (month, year).
//! The store does not enforce uniqueness of that key; reports compute one
//! utilization row per record.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Category, EngineError, MoneyCents, Month, ResultEngine};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    pub category: Category,
    pub amount: MoneyCents,
    pub month: Month,
    pub year: i32,
}

impl Budget {
    /// Validates the fields and builds a budget with a fresh id.
    ///
    /// The ceiling must be strictly positive.
    pub fn new(
        category: Category,
        amount: MoneyCents,
        month: Month,
        year: i32,
    ) -> ResultEngine<Self> {
        if amount.cents() <= 0 {
            return Err(EngineError::Validation(
                "budget amount must be positive".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            category,
            amount,
            month,
            year,
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub category: String,
    pub amount_minor: i64,
    pub month: String,
    pub year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Budget> for ActiveModel {
    fn from(budget: &Budget) -> Self {
        Self {
            id: ActiveValue::Set(budget.id.to_string()),
            category: ActiveValue::Set(budget.category.as_str().to_string()),
            amount_minor: ActiveValue::Set(budget.amount.cents()),
            month: ActiveValue::Set(budget.month.as_str().to_string()),
            year: ActiveValue::Set(budget.year),
        }
    }
}

impl TryFrom<Model> for Budget {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::KeyNotFound("budget".to_string()))?,
            category: Category::try_from(model.category.as_str())?,
            amount: MoneyCents::new(model.amount_minor),
            month: Month::try_from(model.month.as_str())?,
            year: model.year,
        })
    }
}
