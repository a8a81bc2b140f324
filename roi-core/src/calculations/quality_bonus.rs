//! Recruitment quality bonus.
//!
//! Every complete block of [`POSTINGS_PER_STEP`] job postings raises the
//! expected sales per performer by a flat 5%. Partial blocks add nothing.

use rust_decimal::Decimal;

/// Job postings needed for one bonus step.
pub const POSTINGS_PER_STEP: u32 = 5;

/// Multiplier added per completed step (5%).
pub const BONUS_PER_STEP: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Returns the sales multiplier earned by `recruitment_count` job postings.
///
/// Uses integer division, so the result only changes at multiples of
/// [`POSTINGS_PER_STEP`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use roi_core::calculations::quality_bonus;
///
/// assert_eq!(quality_bonus(4), dec!(1.00));
/// assert_eq!(quality_bonus(7), dec!(1.05));
/// assert_eq!(quality_bonus(10), dec!(1.10));
/// ```
pub fn quality_bonus(recruitment_count: u32) -> Decimal {
    let steps = recruitment_count / POSTINGS_PER_STEP;
    Decimal::ONE + Decimal::from(steps) * BONUS_PER_STEP
}

/// Sales per performer after the quality bonus.
///
/// Informational only; it does not feed back into the sales inputs.
pub fn adjusted_sales_per_female(
    sales_per_female: Decimal,
    recruitment_count: u32,
) -> Decimal {
    sales_per_female * quality_bonus(recruitment_count)
}
