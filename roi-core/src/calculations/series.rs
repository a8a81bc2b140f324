//! Chart datasets derived from a projection.

use rust_decimal::Decimal;

use crate::models::{ChartPoint, CostBreakdownEntry, CostCategory, ProjectionInputs};

/// Months plotted on the cumulative-profit chart.
pub const CHART_MONTHS: u32 = 24;

/// Builds the cumulative-profit line series.
///
/// The running total starts at `-initial_investment` before month 1 and
/// grows by `monthly_net_profit` every month. Months are numbered from 1.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::cumulative_profit_series;
///
/// let series = cumulative_profit_series(dec!(20), dec!(50), 3);
///
/// assert_eq!(series[0].cumulative_profit, dec!(-30));
/// assert_eq!(series[2].cumulative_profit, dec!(10));
/// ```
pub fn cumulative_profit_series(
    monthly_net_profit: Decimal,
    initial_investment: Decimal,
    months: u32,
) -> Vec<ChartPoint> {
    let mut cumulative_profit = -initial_investment;
    (1..=months)
        .map(|month| {
            cumulative_profit += monthly_net_profit;
            ChartPoint {
                month,
                profit: monthly_net_profit,
                cumulative_profit,
            }
        })
        .collect()
}

/// Builds the cost breakdown in legend order.
pub fn cost_breakdown(
    inputs: &ProjectionInputs,
    female_fee: Decimal,
    referral_fee: Decimal,
) -> Vec<CostBreakdownEntry> {
    CostCategory::all()
        .iter()
        .map(|&category| {
            let value = match category {
                CostCategory::Ad => inputs.ad_cost,
                CostCategory::Rent => inputs.rent_cost,
                CostCategory::Utility => inputs.utility_cost,
                CostCategory::Misc => inputs.misc_cost,
                CostCategory::ManagerPayroll => inputs.manager_cost,
                CostCategory::FemaleFee => female_fee,
                CostCategory::ReferralFee => referral_fee,
            };
            CostBreakdownEntry { category, value }
        })
        .collect()
}
