use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Budgets {
    Table,
    Id,
    Category,
    AmountMinor,
    Month,
    Year,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Budgets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Budgets::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Budgets::Category).string().not_null())
                    .col(
                        ColumnDef::new(Budgets::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Budgets::Month).string().not_null())
                    .col(ColumnDef::new(Budgets::Year).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Non-unique: duplicate (category, month, year) rows are allowed and
        // reported individually.
        manager
            .create_index(
                Index::create()
                    .name("idx-budgets-category-month-year")
                    .table(Budgets::Table)
                    .col(Budgets::Category)
                    .col(Budgets::Month)
                    .col(Budgets::Year)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Budgets::Table).to_owned())
            .await
    }
}
