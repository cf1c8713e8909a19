//! HTTP surface of Gallinapp: the axum router over the record services,
//! the JSON error envelope, metrics and the OpenAPI document.

pub mod routes;
pub mod startup;
pub mod state;
pub mod errors;
pub mod extract;
pub mod observability;
pub mod openapi;

pub use startup::run;
