//! Create `incubation_batch` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IncubationBatch::Table)
                    .if_not_exists()
                    .col(uuid(IncubationBatch::Id).primary_key())
                    .col(string_len(IncubationBatch::Lot, 128).not_null())
                    .col(string_len(IncubationBatch::EggType, 16).not_null())
                    .col(string_len(IncubationBatch::Breed, 128).not_null())
                    .col(integer(IncubationBatch::EggCount).not_null())
                    .col(date(IncubationBatch::IncubationDate).not_null())
                    .col(date(IncubationBatch::ExpectedHatchDate).not_null())
                    .col(double(IncubationBatch::Temperature).not_null())
                    .col(double(IncubationBatch::Humidity).not_null())
                    .col(string_len(IncubationBatch::Status, 16).not_null())
                    .col(integer(IncubationBatch::HatchedCount).not_null())
                    .col(text_null(IncubationBatch::Notes))
                    .col(timestamp_with_time_zone(IncubationBatch::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(IncubationBatch::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(IncubationBatch::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum IncubationBatch {
    Table,
    Id,
    Lot,
    EggType,
    Breed,
    EggCount,
    IncubationDate,
    ExpectedHatchDate,
    Temperature,
    Humidity,
    Status,
    HatchedCount,
    Notes,
    CreatedAt,
    UpdatedAt,
}
