//! Create `egg_collection` table.
//! Rows are append-only; there is no `updated_at`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EggCollection::Table)
                    .if_not_exists()
                    .col(uuid(EggCollection::Id).primary_key())
                    .col(date(EggCollection::Date).not_null())
                    .col(string_len(EggCollection::SourceLot, 128).not_null())
                    .col(string_len(EggCollection::EggType, 16).not_null())
                    .col(integer(EggCollection::Count).not_null())
                    .col(double(EggCollection::TotalWeight).not_null())
                    .col(text_null(EggCollection::Notes))
                    .col(timestamp_with_time_zone(EggCollection::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(EggCollection::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum EggCollection {
    Table,
    Id,
    Date,
    SourceLot,
    EggType,
    Count,
    TotalWeight,
    Notes,
    CreatedAt,
}
