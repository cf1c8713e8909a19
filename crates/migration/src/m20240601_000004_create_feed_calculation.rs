//! Create `feed_calculation` table.
//! Stores the inputs of each calculation next to the computed consumption and cost.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeedCalculation::Table)
                    .if_not_exists()
                    .col(uuid(FeedCalculation::Id).primary_key())
                    .col(string_len(FeedCalculation::Lot, 128).not_null())
                    .col(string_len(FeedCalculation::AnimalType, 16).not_null())
                    .col(integer(FeedCalculation::AnimalCount).not_null())
                    .col(integer(FeedCalculation::AgeDays).not_null())
                    .col(double(FeedCalculation::AvgWeight).not_null())
                    .col(double(FeedCalculation::FeedPricePerKg).not_null())
                    .col(double(FeedCalculation::DailyConsumptionKg).not_null())
                    .col(double(FeedCalculation::MonthlyConsumptionKg).not_null())
                    .col(double(FeedCalculation::EstimatedCost).not_null())
                    .col(date(FeedCalculation::CalculationDate).not_null())
                    .col(text_null(FeedCalculation::Notes))
                    .col(timestamp_with_time_zone(FeedCalculation::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(FeedCalculation::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum FeedCalculation {
    Table,
    Id,
    Lot,
    AnimalType,
    AnimalCount,
    AgeDays,
    AvgWeight,
    FeedPricePerKg,
    DailyConsumptionKg,
    MonthlyConsumptionKg,
    EstimatedCost,
    CalculationDate,
    Notes,
    CreatedAt,
}
