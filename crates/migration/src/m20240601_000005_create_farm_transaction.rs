//! Create `farm_transaction` table (income and expense ledger).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FarmTransaction::Table)
                    .if_not_exists()
                    .col(uuid(FarmTransaction::Id).primary_key())
                    .col(date(FarmTransaction::Date).not_null())
                    .col(string_len(FarmTransaction::Kind, 16).not_null())
                    .col(string_len(FarmTransaction::Concept, 256).not_null())
                    .col(string_len(FarmTransaction::Category, 128).not_null())
                    .col(integer_null(FarmTransaction::Quantity))
                    .col(string_len_null(FarmTransaction::Unit, 32))
                    .col(double(FarmTransaction::UnitPrice).not_null())
                    .col(double(FarmTransaction::Total).not_null())
                    .col(text_null(FarmTransaction::Notes))
                    .col(timestamp_with_time_zone(FarmTransaction::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(FarmTransaction::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum FarmTransaction {
    Table,
    Id,
    Date,
    Kind,
    Concept,
    Category,
    Quantity,
    Unit,
    UnitPrice,
    Total,
    Notes,
    CreatedAt,
}
