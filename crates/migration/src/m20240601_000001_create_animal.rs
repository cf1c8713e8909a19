//! Create `animal` table.
//! One row per animal lot; status and type are stored as short strings.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Animal::Table)
                    .if_not_exists()
                    .col(uuid(Animal::Id).primary_key())
                    .col(string_len(Animal::Lot, 128).not_null())
                    .col(string_len(Animal::AnimalType, 16).not_null())
                    .col(string_len(Animal::Breed, 128).not_null())
                    .col(integer(Animal::Count).not_null())
                    .col(date(Animal::IntakeDate).not_null())
                    .col(integer(Animal::AgeDays).not_null())
                    .col(double(Animal::AvgWeight).not_null())
                    .col(string_len(Animal::Status, 16).not_null())
                    .col(text_null(Animal::Notes))
                    .col(timestamp_with_time_zone(Animal::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Animal::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Animal::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Animal {
    Table,
    Id,
    Lot,
    AnimalType,
    Breed,
    Count,
    IntakeDate,
    AgeDays,
    AvgWeight,
    Status,
    Notes,
    CreatedAt,
    UpdatedAt,
}
