pub use sea_orm_migration::prelude::*;

mod m20260712_090000_transactions;
mod m20260712_090500_budgets;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_090000_transactions::Migration),
            Box::new(m20260712_090500_budgets::Migration),
        ]
    }
}
