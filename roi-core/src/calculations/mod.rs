//! Projection calculations.
//!
//! The engine is split into small pure functions, each with its own
//! contract: the tiered rate lookup, the recruitment quality bonus, the
//! series and breakdown builders, and the [`ProjectionEngine`] that ties
//! them together.

pub mod common;
pub mod engine;
pub mod quality_bonus;
pub mod series;
pub mod tiered_rate;

pub use engine::{HORIZON_MONTHS, ProjectionEngine, ProjectionError};
pub use quality_bonus::{adjusted_sales_per_female, quality_bonus};
pub use series::{CHART_MONTHS, cost_breakdown, cumulative_profit_series};
pub use tiered_rate::{RateSchedule, RateScheduleError, fanza_rate};
