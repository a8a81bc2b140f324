use std::io::Read;

use roi_core::{RateSchedule, RateScheduleError, RateTier};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when loading a custom rate schedule.
#[derive(Debug, Error)]
pub enum RateScheduleLoadError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("invalid rate schedule: {0}")]
    Schedule(#[from] RateScheduleError),
}

impl From<csv::Error> for RateScheduleLoadError {
    fn from(err: csv::Error) -> Self {
        RateScheduleLoadError::CsvParse(err.to_string())
    }
}

/// A single record from the rate schedule CSV file.
///
/// - `min_sales`: inclusive lower bound on combined monthly sales (万円)
/// - `rate`: revenue share as a fraction (e.g., 0.55 for 55%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RateTierRecord {
    pub min_sales: Decimal,
    pub rate: Decimal,
}

/// Loader for custom rate schedules from CSV files.
///
/// Rows may appear in any order; the schedule is sorted and validated by
/// [`RateSchedule::new`].
pub struct RateScheduleLoader;

impl RateScheduleLoader {
    /// Parse tier records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<RateTierRecord>, RateScheduleLoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: RateTierRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parse and validate a complete schedule.
    pub fn load<R: Read>(reader: R) -> Result<RateSchedule, RateScheduleLoadError> {
        let records = Self::parse(reader)?;
        debug!(records = records.len(), "parsed rate tier records");

        let tiers = records
            .into_iter()
            .map(|record| RateTier::new(record.min_sales, record.rate))
            .collect();

        Ok(RateSchedule::new(tiers)?)
    }
}
