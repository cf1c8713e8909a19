//! Database-backed operations, one module per record kind plus the dashboard.

pub mod animal_service;
pub mod incubation_service;
pub mod egg_collection_service;
pub mod feed_service;
pub mod transaction_service;
pub mod dashboard_service;
