use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Animal: dashboard counts filter on (status, animal_type)
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_animal_status_type")
                    .table(Animal::Table)
                    .col(Animal::Status)
                    .col(Animal::AnimalType)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_incubation_batch_status")
                    .table(IncubationBatch::Table)
                    .col(IncubationBatch::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_egg_collection_date")
                    .table(EggCollection::Table)
                    .col(EggCollection::Date)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_feed_calculation_date")
                    .table(FeedCalculation::Table)
                    .col(FeedCalculation::CalculationDate)
                    .to_owned(),
            )
            .await?;

        // FarmTransaction: balance groups by kind, monthly balance filters on date
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_farm_transaction_date_kind")
                    .table(FarmTransaction::Table)
                    .col(FarmTransaction::Date)
                    .col(FarmTransaction::Kind)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_animal_status_type").table(Animal::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_incubation_batch_status").table(IncubationBatch::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_egg_collection_date").table(EggCollection::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_feed_calculation_date").table(FeedCalculation::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_farm_transaction_date_kind").table(FarmTransaction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Animal { Table, Status, AnimalType }

#[derive(DeriveIden)]
enum IncubationBatch { Table, Status }

#[derive(DeriveIden)]
enum EggCollection { Table, Date }

#[derive(DeriveIden)]
enum FeedCalculation { Table, CalculationDate }

#[derive(DeriveIden)]
enum FarmTransaction { Table, Date, Kind }
