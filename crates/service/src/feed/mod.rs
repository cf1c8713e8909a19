//! Feed consumption and cost estimation.

pub mod calculator;

pub use calculator::{estimate, FeedStage, DAYS_PER_MONTH};
