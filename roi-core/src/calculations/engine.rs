//! Monthly profit, payback and ROI projection.
//!
//! # Computation
//!
//! | Step | Value |
//! |------|-------|
//! | 1    | Total sales (own + partner) |
//! | 2    | Tiered rate for the total |
//! | 3    | Revenue per stream (sales × rate) and monthly total |
//! | 4    | Performer and referral fees (% of monthly total revenue) |
//! | 5    | Recurring cost (ad + rent + utility + misc + manager) |
//! | 6    | Monthly net profit (revenue − fees − recurring cost) |
//! | 7    | Initial investment (property + interior + equipment) |
//! | 8    | Payback month (⌈investment ÷ profit⌉, if profit > 0) |
//! | 9    | Cumulative profit and ROI at 8, 12 and 24 months |
//! | 10   | 24-month cumulative-profit series |
//! | 11   | Cost breakdown |
//!
//! Monthly profit is flat: there is no growth or seasonality, so each
//! horizon's cumulative profit is simply `profit × months`.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use roi_core::{PaybackPeriod, ProjectionEngine, ProjectionInputs};
//!
//! let engine = ProjectionEngine::standard();
//! let report = engine.compute(&ProjectionInputs::default()).unwrap();
//!
//! assert_eq!(report.result.monthly_net_profit, dec!(72.6));
//! assert_eq!(report.result.payback, PaybackPeriod::Months(1));
//! assert_eq!(report.series.len(), 24);
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;
use tracing::{debug, warn};

use crate::calculations::common::{percent_of, ratio_percent};
use crate::calculations::quality_bonus::{adjusted_sales_per_female, quality_bonus};
use crate::calculations::series::{CHART_MONTHS, cost_breakdown, cumulative_profit_series};
use crate::calculations::tiered_rate::RateSchedule;
use crate::models::{
    InputField, PaybackPeriod, ProjectionInputs, ProjectionReport, ProjectionResult,
};

/// Horizons, in months, for which cumulative profit and ROI are reported.
pub const HORIZON_MONTHS: [u32; 3] = [8, 12, 24];

/// Errors that can occur during a projection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    /// A monetary field was below zero.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: InputField, value: Decimal },

    /// A monetary field exceeded the supported maximum.
    #[error("{field} exceeds the supported maximum, got {value}")]
    AmountTooLarge { field: InputField, value: Decimal },

    /// A percentage field was outside `[0, 100]`.
    #[error("{field} must be between 0 and 100, got {value}")]
    PercentageOutOfRange { field: InputField, value: Decimal },

    /// A count was not a non-negative whole number.
    #[error("recruitment_count must be a non-negative whole number, got {0}")]
    InvalidCount(Decimal),
}

/// Calculator for revenue projections.
///
/// Holds the rate schedule and nothing else; every call to
/// [`ProjectionEngine::compute`] is a pure function of its input.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    schedule: RateSchedule,
}

impl ProjectionEngine {
    /// Creates an engine using the given rate schedule.
    pub fn new(schedule: RateSchedule) -> Self {
        Self { schedule }
    }

    /// Creates an engine using the [standard schedule](RateSchedule::standard).
    pub fn standard() -> Self {
        Self::new(RateSchedule::standard())
    }

    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Computes the full projection for `inputs`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] if any input is outside its domain; see
    /// [`ProjectionInputs::validate`].
    pub fn compute(
        &self,
        inputs: &ProjectionInputs,
    ) -> Result<ProjectionReport, ProjectionError> {
        inputs.validate()?;

        let total_sales = inputs.self_sales + inputs.partner_sales;
        let fanza_rate = self.schedule.rate(total_sales);

        // One rate, chosen by the combined total, applies to both streams
        let self_revenue = inputs.self_sales * fanza_rate;
        let partner_revenue = inputs.partner_sales * fanza_rate;
        let monthly_total_revenue = self_revenue + partner_revenue;

        let female_fee = percent_of(monthly_total_revenue, inputs.female_rate);
        let referral_fee = percent_of(monthly_total_revenue, inputs.referral_rate);
        let total_cost = Self::recurring_cost(inputs);

        let monthly_net_profit = monthly_total_revenue - female_fee - referral_fee - total_cost;
        let initial_investment = inputs.initial_investment();
        let payback = Self::payback_period(initial_investment, monthly_net_profit);

        let [h8, h12, h24] = HORIZON_MONTHS.map(|months| {
            let cumulative = monthly_net_profit * Decimal::from(months);
            (cumulative, ratio_percent(cumulative, initial_investment))
        });

        debug!(
            total_sales = %total_sales,
            fanza_rate = %fanza_rate,
            monthly_net_profit = %monthly_net_profit,
            initial_investment = %initial_investment,
            "computed projection"
        );
        if payback == PaybackPeriod::Unreachable {
            warn!(
                monthly_net_profit = %monthly_net_profit,
                initial_investment = %initial_investment,
                "Monthly net profit is zero or negative; investment is never recovered"
            );
        }
        if initial_investment.is_zero() {
            debug!("initial investment is zero; ROI is undefined");
        }

        let result = ProjectionResult {
            total_sales,
            fanza_rate,
            self_revenue,
            partner_revenue,
            monthly_total_revenue,
            female_fee,
            referral_fee,
            total_cost,
            monthly_net_profit,
            initial_investment,
            payback,
            cumulative_profit_8_months: h8.0,
            cumulative_profit_12_months: h12.0,
            cumulative_profit_24_months: h24.0,
            roi_8_months: h8.1,
            roi_12_months: h12.1,
            roi_24_months: h24.1,
            quality_bonus: quality_bonus(inputs.recruitment_count),
            adjusted_sales_per_female: adjusted_sales_per_female(
                inputs.sales_per_female,
                inputs.recruitment_count,
            ),
            profitable_from_first_month: monthly_net_profit >= Decimal::ZERO,
        };

        Ok(ProjectionReport {
            series: cumulative_profit_series(monthly_net_profit, initial_investment, CHART_MONTHS),
            cost_breakdown: cost_breakdown(inputs, female_fee, referral_fee),
            result,
        })
    }

    /// Sums the recurring monthly costs. Fees are not included.
    fn recurring_cost(inputs: &ProjectionInputs) -> Decimal {
        inputs.ad_cost
            + inputs.rent_cost
            + inputs.utility_cost
            + inputs.misc_cost
            + inputs.manager_cost
    }

    /// Whole months of net profit needed to cover the initial investment.
    ///
    /// Unreachable only when profit is zero or negative. Any positive profit
    /// yields a month count, saturating at `u64::MAX` when the quotient does
    /// not fit.
    fn payback_period(
        initial_investment: Decimal,
        monthly_net_profit: Decimal,
    ) -> PaybackPeriod {
        if monthly_net_profit <= Decimal::ZERO {
            return PaybackPeriod::Unreachable;
        }
        let months = initial_investment
            .checked_div(monthly_net_profit)
            .and_then(|months| months.ceil().to_u64())
            .unwrap_or(u64::MAX);
        PaybackPeriod::Months(months)
    }
}
