//! Batch data handling for revenue projections: CSV scenario and rate
//! schedule loaders, and CSV export of computed results.

pub mod batch;
pub mod export;
pub mod scenario_loader;
pub mod tier_loader;

pub use batch::{BatchError, ScenarioOutcome, run_scenarios};
pub use export::{ExportError, SeriesRow, SummaryRow, write_series, write_summary};
pub use scenario_loader::{Scenario, ScenarioLoadError, load_from_file, load_from_str};
pub use tier_loader::{RateScheduleLoadError, RateScheduleLoader, RateTierRecord};
