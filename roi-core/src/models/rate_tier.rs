use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One step of the tiered revenue-share table.
///
/// `min_sales` is an inclusive lower bound on combined monthly sales;
/// `rate` is the share paid out as a fraction (`0.55` = 55%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    pub min_sales: Decimal,
    pub rate: Decimal,
}

impl RateTier {
    pub fn new(
        min_sales: Decimal,
        rate: Decimal,
    ) -> Self {
        Self { min_sales, rate }
    }
}
