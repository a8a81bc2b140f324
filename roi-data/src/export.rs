//! CSV export of computed scenarios.
//!
//! Two layouts are written:
//!
//! - **summary**: one row per scenario with the headline figures. ROI
//!   columns are rounded to two decimal places; an empty ROI cell means the
//!   initial investment is zero, and an empty `payback_months` cell means
//!   the investment is never recovered.
//! - **series**: one row per scenario and month with the cumulative-profit
//!   chart data.
//!
//! Decimal values are written without trailing zeros.

use std::io::Write;

use roi_core::calculations::common::round_half_up;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::batch::ScenarioOutcome;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub scenario: String,
    pub total_sales: Decimal,
    pub fanza_rate_percent: Decimal,
    pub monthly_total_revenue: Decimal,
    pub female_fee: Decimal,
    pub referral_fee: Decimal,
    pub total_cost: Decimal,
    pub monthly_net_profit: Decimal,
    pub initial_investment: Decimal,
    pub payback_months: Option<u64>,
    pub cumulative_profit_8_months: Decimal,
    pub cumulative_profit_12_months: Decimal,
    pub cumulative_profit_24_months: Decimal,
    pub roi_8_months: Option<Decimal>,
    pub roi_12_months: Option<Decimal>,
    pub roi_24_months: Option<Decimal>,
}

impl From<&ScenarioOutcome> for SummaryRow {
    fn from(outcome: &ScenarioOutcome) -> Self {
        let result = &outcome.report.result;
        let roi = |value: Option<Decimal>| value.map(|v| round_half_up(v, 2).normalize());

        Self {
            scenario: outcome.name.clone(),
            total_sales: result.total_sales.normalize(),
            fanza_rate_percent: result.fanza_rate_percent().normalize(),
            monthly_total_revenue: result.monthly_total_revenue.normalize(),
            female_fee: result.female_fee.normalize(),
            referral_fee: result.referral_fee.normalize(),
            total_cost: result.total_cost.normalize(),
            monthly_net_profit: result.monthly_net_profit.normalize(),
            initial_investment: result.initial_investment.normalize(),
            payback_months: result.payback.months(),
            cumulative_profit_8_months: result.cumulative_profit_8_months.normalize(),
            cumulative_profit_12_months: result.cumulative_profit_12_months.normalize(),
            cumulative_profit_24_months: result.cumulative_profit_24_months.normalize(),
            roi_8_months: roi(result.roi_8_months),
            roi_12_months: roi(result.roi_12_months),
            roi_24_months: roi(result.roi_24_months),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesRow<'a> {
    pub scenario: &'a str,
    pub month: u32,
    pub profit: Decimal,
    pub cumulative_profit: Decimal,
}

/// Writes one summary row per outcome. Returns the number of rows written.
pub fn write_summary<W: Write>(
    writer: W,
    outcomes: &[ScenarioOutcome],
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for outcome in outcomes {
        csv_writer.serialize(SummaryRow::from(outcome))?;
    }
    csv_writer.flush()?;
    Ok(outcomes.len())
}

/// Writes every chart point of every outcome. Returns the number of rows
/// written.
pub fn write_series<W: Write>(
    writer: W,
    outcomes: &[ScenarioOutcome],
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut written = 0;
    for outcome in outcomes {
        for point in &outcome.report.series {
            csv_writer.serialize(SeriesRow {
                scenario: &outcome.name,
                month: point.month,
                profit: point.profit.normalize(),
                cumulative_profit: point.cumulative_profit.normalize(),
            })?;
            written += 1;
        }
    }
    csv_writer.flush()?;
    Ok(written)
}
