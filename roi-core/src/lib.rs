//! Revenue projection engine for live-chat agency scenarios.
//!
//! All monetary values are expressed in 万円 (man-en, 10,000 yen) and carried
//! as [`rust_decimal::Decimal`] so that repeated computations are exact and
//! bit-identical.

pub mod calculations;
pub mod models;

pub use calculations::{ProjectionEngine, ProjectionError, RateSchedule, RateScheduleError};
pub use models::*;
