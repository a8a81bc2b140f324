//! Tiered revenue-share rate lookup.
//!
//! The platform pays out a share of combined monthly sales that grows in
//! steps as sales cross fixed thresholds. Thresholds are inclusive lower
//! bounds, evaluated highest first:
//!
//! | Combined sales (万円) | Rate |
//! |-----------------------|------|
//! | ≥ 4000                | 60%  |
//! | ≥ 3000                | 59%  |
//! | ≥ 2000                | 58%  |
//! | ≥ 1000                | 57%  |
//! | ≥ 600                 | 56%  |
//! | otherwise             | 55%  |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use roi_core::calculations::fanza_rate;
//!
//! assert_eq!(fanza_rate(dec!(599)), dec!(0.55));
//! assert_eq!(fanza_rate(dec!(600)), dec!(0.56));
//! assert_eq!(fanza_rate(dec!(4000)), dec!(0.60));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::RateTier;

/// Errors raised when building a [`RateSchedule`] from custom tiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateScheduleError {
    /// No tiers were supplied.
    #[error("rate schedule has no tiers")]
    Empty,

    /// No tier starts at zero, so low sales would have no rate.
    #[error("rate schedule needs a tier starting at 0")]
    MissingBaseTier,

    /// A threshold was below zero.
    #[error("tier threshold must be non-negative, got {0}")]
    NegativeThreshold(Decimal),

    /// A rate was outside `[0, 1]`.
    #[error("tier rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    /// Two tiers share the same threshold.
    #[error("duplicate tier threshold {0}")]
    DuplicateThreshold(Decimal),
}

/// A validated step table of revenue-share rates.
///
/// Tiers are kept sorted by threshold, highest first, and the table always
/// contains a tier starting at zero, so every non-negative sales figure has
/// exactly one rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RateTier>", into = "Vec<RateTier>")]
pub struct RateSchedule {
    tiers: Vec<RateTier>,
}

impl RateSchedule {
    /// The platform's published rate table.
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                RateTier::new(Decimal::from(4000), Decimal::new(60, 2)),
                RateTier::new(Decimal::from(3000), Decimal::new(59, 2)),
                RateTier::new(Decimal::from(2000), Decimal::new(58, 2)),
                RateTier::new(Decimal::from(1000), Decimal::new(57, 2)),
                RateTier::new(Decimal::from(600), Decimal::new(56, 2)),
                RateTier::new(Decimal::ZERO, Decimal::new(55, 2)),
            ],
        }
    }

    /// Builds a schedule from tiers in any order.
    ///
    /// # Errors
    ///
    /// Returns [`RateScheduleError`] if:
    /// - `tiers` is empty
    /// - any threshold is negative
    /// - any rate is outside `[0, 1]`
    /// - two tiers share a threshold
    /// - no tier starts at zero
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use roi_core::{RateSchedule, RateTier};
    ///
    /// let schedule = RateSchedule::new(vec![
    ///     RateTier::new(dec!(0), dec!(0.50)),
    ///     RateTier::new(dec!(1000), dec!(0.65)),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(schedule.rate(dec!(999)), dec!(0.50));
    /// assert_eq!(schedule.rate(dec!(1000)), dec!(0.65));
    /// ```
    pub fn new(mut tiers: Vec<RateTier>) -> Result<Self, RateScheduleError> {
        if tiers.is_empty() {
            return Err(RateScheduleError::Empty);
        }
        for tier in &tiers {
            if tier.min_sales < Decimal::ZERO {
                return Err(RateScheduleError::NegativeThreshold(tier.min_sales));
            }
            if tier.rate < Decimal::ZERO || tier.rate > Decimal::ONE {
                return Err(RateScheduleError::InvalidRate(tier.rate));
            }
        }

        tiers.sort_by(|a, b| b.min_sales.cmp(&a.min_sales));

        if let Some(pair) = tiers
            .windows(2)
            .find(|pair| pair[0].min_sales == pair[1].min_sales)
        {
            return Err(RateScheduleError::DuplicateThreshold(pair[0].min_sales));
        }
        if tiers.last().map(|tier| tier.min_sales) != Some(Decimal::ZERO) {
            return Err(RateScheduleError::MissingBaseTier);
        }

        debug!(tiers = tiers.len(), "built custom rate schedule");
        Ok(Self { tiers })
    }

    /// Tiers ordered by threshold, highest first.
    pub fn tiers(&self) -> &[RateTier] {
        &self.tiers
    }

    /// Looks up the rate for `total_sales`.
    ///
    /// The first tier whose threshold is at or below `total_sales` wins.
    /// Negative sales are not rejected here and fall through to the base
    /// tier.
    pub fn rate(
        &self,
        total_sales: Decimal,
    ) -> Decimal {
        self.tiers
            .iter()
            .find(|tier| total_sales >= tier.min_sales)
            .or(self.tiers.last())
            .map_or(Decimal::ZERO, |tier| tier.rate)
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<RateTier>> for RateSchedule {
    type Error = RateScheduleError;

    fn try_from(tiers: Vec<RateTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<RateSchedule> for Vec<RateTier> {
    fn from(schedule: RateSchedule) -> Self {
        schedule.tiers
    }
}

/// Rate from the [standard schedule](RateSchedule::standard) for
/// `total_sales`.
pub fn fanza_rate(total_sales: Decimal) -> Decimal {
    RateSchedule::standard().rate(total_sales)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // standard schedule tests
    // =========================================================================

    #[test]
    fn fanza_rate_base_tier_below_600() {
        assert_eq!(fanza_rate(dec!(0)), dec!(0.55));
        assert_eq!(fanza_rate(dec!(599)), dec!(0.55));
    }

    #[test]
    fn fanza_rate_boundaries_are_inclusive() {
        assert_eq!(fanza_rate(dec!(600)), dec!(0.56));
        assert_eq!(fanza_rate(dec!(999)), dec!(0.56));
        assert_eq!(fanza_rate(dec!(1000)), dec!(0.57));
        assert_eq!(fanza_rate(dec!(1999.99)), dec!(0.57));
        assert_eq!(fanza_rate(dec!(2000)), dec!(0.58));
        assert_eq!(fanza_rate(dec!(3000)), dec!(0.59));
        assert_eq!(fanza_rate(dec!(3999)), dec!(0.59));
        assert_eq!(fanza_rate(dec!(4000)), dec!(0.60));
    }

    #[test]
    fn fanza_rate_caps_at_top_tier() {
        assert_eq!(fanza_rate(dec!(10000)), dec!(0.60));
    }

    #[test]
    fn fanza_rate_negative_sales_fall_to_base_tier() {
        assert_eq!(fanza_rate(dec!(-100)), dec!(0.55));
    }

    #[test]
    fn fanza_rate_never_decreases_with_sales() {
        let mut previous = fanza_rate(Decimal::ZERO);
        for sales in (0..=5000).step_by(50) {
            let rate = fanza_rate(Decimal::from(sales));
            assert!(rate >= previous, "rate dropped at {sales}");
            previous = rate;
        }
    }

    #[test]
    fn standard_tiers_are_highest_first() {
        let schedule = RateSchedule::standard();
        let thresholds: Vec<Decimal> = schedule.tiers().iter().map(|t| t.min_sales).collect();

        assert_eq!(
            thresholds,
            vec![dec!(4000), dec!(3000), dec!(2000), dec!(1000), dec!(600), dec!(0)]
        );
    }

    // =========================================================================
    // custom schedule tests
    // =========================================================================

    #[test]
    fn new_sorts_tiers_highest_first() {
        let schedule = RateSchedule::new(vec![
            RateTier::new(dec!(0), dec!(0.5)),
            RateTier::new(dec!(2000), dec!(0.7)),
            RateTier::new(dec!(500), dec!(0.6)),
        ])
        .unwrap();

        assert_eq!(schedule.tiers()[0].min_sales, dec!(2000));
        assert_eq!(schedule.rate(dec!(499)), dec!(0.5));
        assert_eq!(schedule.rate(dec!(500)), dec!(0.6));
        assert_eq!(schedule.rate(dec!(2500)), dec!(0.7));
    }

    #[test]
    fn new_rejects_empty_schedule() {
        assert_eq!(RateSchedule::new(vec![]), Err(RateScheduleError::Empty));
    }

    #[test]
    fn new_requires_base_tier() {
        let result = RateSchedule::new(vec![RateTier::new(dec!(100), dec!(0.5))]);

        assert_eq!(result, Err(RateScheduleError::MissingBaseTier));
    }

    #[test]
    fn new_rejects_rate_above_one() {
        let result = RateSchedule::new(vec![RateTier::new(dec!(0), dec!(55))]);

        assert_eq!(result, Err(RateScheduleError::InvalidRate(dec!(55))));
    }

    #[test]
    fn new_rejects_negative_threshold() {
        let result = RateSchedule::new(vec![
            RateTier::new(dec!(0), dec!(0.5)),
            RateTier::new(dec!(-10), dec!(0.4)),
        ]);

        assert_eq!(result, Err(RateScheduleError::NegativeThreshold(dec!(-10))));
    }

    #[test]
    fn new_rejects_duplicate_threshold() {
        let result = RateSchedule::new(vec![
            RateTier::new(dec!(0), dec!(0.5)),
            RateTier::new(dec!(600), dec!(0.56)),
            RateTier::new(dec!(600.0), dec!(0.57)),
        ]);

        assert_eq!(result, Err(RateScheduleError::DuplicateThreshold(dec!(600))));
    }

    #[test]
    fn standard_schedule_passes_validation() {
        let standard = RateSchedule::standard();

        let rebuilt = RateSchedule::new(standard.tiers().to_vec()).unwrap();

        assert_eq!(rebuilt, standard);
    }
}
