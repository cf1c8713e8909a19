//! Migrator registering one migration per record table.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_animal;
mod m20240601_000002_create_incubation_batch;
mod m20240601_000003_create_egg_collection;
mod m20240601_000004_create_feed_calculation;
mod m20240601_000005_create_farm_transaction;
mod m20240601_000010_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_animal::Migration),
            Box::new(m20240601_000002_create_incubation_batch::Migration),
            Box::new(m20240601_000003_create_egg_collection::Migration),
            Box::new(m20240601_000004_create_feed_calculation::Migration),
            Box::new(m20240601_000005_create_farm_transaction::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000010_add_indexes::Migration),
        ]
    }
}
