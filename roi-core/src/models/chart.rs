use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of the cumulative-profit line chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// 1-based month number.
    pub month: u32,
    /// Net profit earned during this month.
    pub profit: Decimal,
    /// Running total after this month, starting from the negative initial
    /// investment.
    pub cumulative_profit: Decimal,
}

/// Slices of the cost-breakdown pie chart, in legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    Ad,
    Rent,
    Utility,
    Misc,
    ManagerPayroll,
    FemaleFee,
    ReferralFee,
}

impl CostCategory {
    pub fn all() -> &'static [CostCategory] {
        &[
            Self::Ad,
            Self::Rent,
            Self::Utility,
            Self::Misc,
            Self::ManagerPayroll,
            Self::FemaleFee,
            Self::ReferralFee,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ad => "ad",
            Self::Rent => "rent",
            Self::Utility => "utility",
            Self::Misc => "misc",
            Self::ManagerPayroll => "manager_payroll",
            Self::FemaleFee => "female_fee",
            Self::ReferralFee => "referral_fee",
        }
    }

    /// Legend name shown on the chart.
    pub fn legend_name(&self) -> &'static str {
        match self {
            Self::Ad => "広告費",
            Self::Rent => "家賃",
            Self::Utility => "通信・光熱費",
            Self::Misc => "雑費",
            Self::ManagerPayroll => "マネージャー人件費",
            Self::FemaleFee => "女性手数料",
            Self::ReferralFee => "紹介料",
        }
    }

    /// Fixed legend colour; one per slice index.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Ad => "#4361ee",
            Self::Rent => "#3a86ff",
            Self::Utility => "#4cc9f0",
            Self::Misc => "#06d6a0",
            Self::ManagerPayroll => "#90be6d",
            Self::FemaleFee => "#f94144",
            Self::ReferralFee => "#f8961e",
        }
    }
}

/// A single named slice of the cost breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostBreakdownEntry {
    pub category: CostCategory,
    pub value: Decimal,
}
