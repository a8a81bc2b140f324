use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ChartPoint, CostBreakdownEntry};

/// Months needed to recover the initial investment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaybackPeriod {
    /// Recovered after this many whole months of net profit. Saturates at
    /// `u64::MAX` when the profit is positive but vanishingly small.
    Months(u64),
    /// Monthly net profit is zero or negative; the investment is never
    /// recovered.
    Unreachable,
}

impl PaybackPeriod {
    pub fn months(&self) -> Option<u64> {
        match self {
            Self::Months(months) => Some(*months),
            Self::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Months(_))
    }
}

/// Cumulative profit and ROI over one fixed horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorizonReturn {
    pub months: u32,
    pub cumulative_profit: Decimal,
    /// `None` when the initial investment is zero.
    pub roi_percent: Option<Decimal>,
}

/// Scalar results of one projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub total_sales: Decimal,
    /// Revenue share as a fraction (`0.55` = 55%).
    pub fanza_rate: Decimal,
    pub self_revenue: Decimal,
    pub partner_revenue: Decimal,
    pub monthly_total_revenue: Decimal,
    pub female_fee: Decimal,
    pub referral_fee: Decimal,
    /// Recurring costs only; the two fees are reported separately.
    pub total_cost: Decimal,
    pub monthly_net_profit: Decimal,
    pub initial_investment: Decimal,
    pub payback: PaybackPeriod,

    pub cumulative_profit_8_months: Decimal,
    pub cumulative_profit_12_months: Decimal,
    pub cumulative_profit_24_months: Decimal,
    pub roi_8_months: Option<Decimal>,
    pub roi_12_months: Option<Decimal>,
    pub roi_24_months: Option<Decimal>,

    pub quality_bonus: Decimal,
    pub adjusted_sales_per_female: Decimal,
    pub profitable_from_first_month: bool,
}

impl ProjectionResult {
    /// The tiered rate expressed as a percentage.
    pub fn fanza_rate_percent(&self) -> Decimal {
        self.fanza_rate * Decimal::ONE_HUNDRED
    }

    /// The 8, 12 and 24 month horizons, shortest first.
    pub fn horizons(&self) -> [HorizonReturn; 3] {
        [
            HorizonReturn {
                months: 8,
                cumulative_profit: self.cumulative_profit_8_months,
                roi_percent: self.roi_8_months,
            },
            HorizonReturn {
                months: 12,
                cumulative_profit: self.cumulative_profit_12_months,
                roi_percent: self.roi_12_months,
            },
            HorizonReturn {
                months: 24,
                cumulative_profit: self.cumulative_profit_24_months,
                roi_percent: self.roi_24_months,
            },
        ]
    }
}

/// Everything produced by one call to the engine.
///
/// Always built as a whole; callers replace their previous report rather
/// than patching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub result: ProjectionResult,
    pub series: Vec<ChartPoint>,
    pub cost_breakdown: Vec<CostBreakdownEntry>,
}
