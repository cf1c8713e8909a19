//! Persistence model of the farm records: one `sea-orm` entity per record kind,
//! the enumerations they share, and the input types validated before insert/update.

pub mod errors;
pub mod validation;
pub mod db;
pub mod enums;
pub mod animal;
pub mod incubation_batch;
pub mod egg_collection;
pub mod feed_calculation;
pub mod farm_transaction;

#[cfg(test)]
mod tests;
