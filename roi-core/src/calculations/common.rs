//! Common arithmetic helpers shared by the projection calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to `dp` decimal places using half-up rounding.
///
/// Values exactly at the midpoint are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(829.714), 1), dec!(829.7));
/// assert_eq!(round_half_up(dec!(72.65), 1), dec!(72.7));
/// assert_eq!(round_half_up(dec!(-72.5), 0), dec!(-73));
/// ```
pub fn round_half_up(
    value: Decimal,
    dp: u32,
) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns `percent` percent of `amount`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(165), dec!(30)), dec!(49.5));
/// ```
pub fn percent_of(
    amount: Decimal,
    percent: Decimal,
) -> Decimal {
    amount * (percent / Decimal::ONE_HUNDRED)
}

/// Expresses `numerator / denominator` as a percentage.
///
/// Returns `None` when the denominator is zero or the quotient does not fit
/// in a `Decimal`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::common::ratio_percent;
///
/// assert_eq!(ratio_percent(dec!(35), dec!(70)), Some(dec!(50)));
/// assert_eq!(ratio_percent(dec!(35), dec!(0)), None);
/// ```
pub fn ratio_percent(
    numerator: Decimal,
    denominator: Decimal,
) -> Option<Decimal> {
    if denominator.is_zero() {
        return None;
    }
    numerator
        .checked_div(denominator)?
        .checked_mul(Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(829.74), 1), dec!(829.7));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(0.55), 1), dec!(0.6));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-12.45), 1), dec!(-12.5)); // Away from zero
    }

    #[test]
    fn round_half_up_to_whole_number() {
        assert_eq!(round_half_up(dec!(72.6), 0), dec!(73));
    }

    // =========================================================================
    // percent_of tests
    // =========================================================================

    #[test]
    fn percent_of_applies_rate_to_amount() {
        assert_eq!(percent_of(dec!(165), dec!(6)), dec!(9.9));
    }

    #[test]
    fn percent_of_zero_percent_is_zero() {
        assert_eq!(percent_of(dec!(1234.5), dec!(0)), dec!(0));
    }

    #[test]
    fn percent_of_hundred_percent_is_identity() {
        assert_eq!(percent_of(dec!(1234.5), dec!(100)), dec!(1234.5));
    }

    // =========================================================================
    // ratio_percent tests
    // =========================================================================

    #[test]
    fn ratio_percent_divides_and_scales() {
        let roi = ratio_percent(dec!(580.8), dec!(70)).map(|v| round_half_up(v, 1));

        assert_eq!(roi, Some(dec!(829.7)));
    }

    #[test]
    fn ratio_percent_is_none_for_zero_denominator() {
        assert_eq!(ratio_percent(dec!(100), Decimal::ZERO), None);
    }

    #[test]
    fn ratio_percent_handles_negative_numerator() {
        assert_eq!(ratio_percent(dec!(-35), dec!(70)), Some(dec!(-50)));
    }

    #[test]
    fn ratio_percent_is_none_on_overflow() {
        assert_eq!(ratio_percent(Decimal::MAX, dec!(0.5)), None);
    }
}
