//! Service layer providing the farm record operations on top of models.
//! - CRUD per record kind in `db`, returning `ServiceError` on failure.
//! - The feed ration table and cost estimate in `feed`.
//! - Read-only aggregates (balance, dashboard) computed in the database.

pub mod errors;
pub mod feed;
pub mod db;
#[cfg(test)]
pub mod test_support;
