//! Input surface: the validated parse step between raw text and the engine.
//!
//! Text is parsed into typed values here, and values are clamped into the
//! ranges the simulator offers for each field, so the engine only ever sees
//! well-typed numbers.

use roi_core::{FieldKind, InputField};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

/// Errors raised while turning raw text into an input assignment.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid number '{input}': {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("expected 'field=value', got '{0}'")]
    MalformedAssignment(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("{field} must be a whole number, got {value}")]
    NotWholeNumber { field: InputField, value: Decimal },
}

/// The range and slider step offered for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputRange {
    pub min: Decimal,
    pub max: Decimal,
    pub step: Decimal,
}

impl InputRange {
    const fn whole(
        min: u32,
        max: u32,
        step: u32,
    ) -> Self {
        Self {
            min: Decimal::from_parts(min, 0, 0, false, 0),
            max: Decimal::from_parts(max, 0, 0, false, 0),
            step: Decimal::from_parts(step, 0, 0, false, 0),
        }
    }

    /// Recognised range for `field`.
    pub fn for_field(field: InputField) -> Self {
        match field {
            InputField::SelfSales | InputField::PartnerSales => Self::whole(0, 5000, 100),
            InputField::SalesPerFemale => Self::whole(0, 500, 10),
            InputField::AdCost => Self::whole(10, 100, 10),
            InputField::RentCost => Self::whole(0, 40, 5),
            InputField::UtilityCost => Self::whole(0, 15, 5),
            InputField::MiscCost => Self::whole(0, 10, 1),
            InputField::ManagerCost => Self::whole(0, 100, 10),
            InputField::FemaleRate => Self::whole(30, 40, 1),
            InputField::ReferralRate => Self::whole(0, 9, 1),
            InputField::PropertyInitialCost => Self::whole(0, 200, 10),
            InputField::InteriorCost => Self::whole(0, 300, 10),
            InputField::EquipmentCost => Self::whole(0, 100, 10),
            InputField::RecruitmentCount => Self::whole(0, 50, 5),
            InputField::EntryRate => Self::whole(0, 80, 10),
        }
    }

    pub fn contains(
        &self,
        value: Decimal,
    ) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(
        &self,
        value: Decimal,
    ) -> Decimal {
        value.clamp(self.min, self.max)
    }
}

/// A parsed `field=value` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputAssignment {
    pub field: InputField,
    pub value: Decimal,
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.5"`).
/// Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, InputError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized
        .parse()
        .map_err(|source| InputError::InvalidNumber {
            input: s.to_string(),
            source,
        })
}

/// Parses `field=value`, e.g. `"self_sales=1,200"`.
///
/// Counts must be whole numbers.
pub fn parse_assignment(s: &str) -> Result<InputAssignment, InputError> {
    let (name, raw_value) = s
        .split_once('=')
        .ok_or_else(|| InputError::MalformedAssignment(s.to_string()))?;
    let name = name.trim();
    let field =
        InputField::parse(name).ok_or_else(|| InputError::UnknownField(name.to_string()))?;
    let value = parse_decimal(raw_value)?;

    if field.kind() == FieldKind::Count && !value.fract().is_zero() {
        return Err(InputError::NotWholeNumber { field, value });
    }

    Ok(InputAssignment { field, value })
}

/// Clamps `value` into the recognised range for `field`, logging when the
/// value had to move.
pub fn clamp_to_range(
    field: InputField,
    value: Decimal,
) -> Decimal {
    let range = InputRange::for_field(field);
    let clamped = range.clamp(value);
    if clamped != value {
        warn!(
            field = %field,
            requested = %value,
            applied = %clamped,
            "Value outside the recognised range; clamped"
        );
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_decimal_trim_whitespace() {
        assert_eq!(parse_decimal("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_decimal_empty_treated_as_zero() {
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_decimal_invalid_returns_error() {
        assert!(matches!(
            parse_decimal("abc"),
            Err(InputError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn parse_assignment_reads_field_and_value() {
        let assignment = parse_assignment(" partner_sales = 1,200 ").unwrap();

        assert_eq!(
            assignment,
            InputAssignment {
                field: InputField::PartnerSales,
                value: dec!(1200),
            }
        );
    }

    #[test]
    fn parse_assignment_requires_equals_sign() {
        assert!(matches!(
            parse_assignment("self_sales 300"),
            Err(InputError::MalformedAssignment(_))
        ));
    }

    #[test]
    fn parse_assignment_rejects_unknown_field() {
        match parse_assignment("revenue=300") {
            Err(InputError::UnknownField(name)) => assert_eq!(name, "revenue"),
            other => panic!("expected UnknownField, got {other:?}"),
        }
    }

    #[test]
    fn parse_assignment_rejects_fractional_count() {
        assert!(matches!(
            parse_assignment("recruitment_count=7.5"),
            Err(InputError::NotWholeNumber { .. })
        ));
    }

    #[test]
    fn parse_assignment_accepts_fractional_amount() {
        let assignment = parse_assignment("misc_cost=2.5").unwrap();

        assert_eq!(assignment.value, dec!(2.5));
    }

    #[test]
    fn ranges_match_offered_sliders() {
        let ad = InputRange::for_field(InputField::AdCost);
        assert_eq!((ad.min, ad.max, ad.step), (dec!(10), dec!(100), dec!(10)));

        let female = InputRange::for_field(InputField::FemaleRate);
        assert_eq!((female.min, female.max, female.step), (dec!(30), dec!(40), dec!(1)));

        let sales = InputRange::for_field(InputField::SelfSales);
        assert_eq!((sales.min, sales.max, sales.step), (dec!(0), dec!(5000), dec!(100)));
    }

    #[test]
    fn every_field_has_a_range_containing_its_default() {
        let defaults = roi_core::ProjectionInputs::default();
        for &field in InputField::all() {
            let range = InputRange::for_field(field);
            assert!(range.min <= range.max, "{field}");
            assert!(range.contains(defaults.value(field)), "{field}");
        }
    }

    #[test]
    fn clamp_to_range_limits_both_ends() {
        assert_eq!(clamp_to_range(InputField::AdCost, dec!(5)), dec!(10));
        assert_eq!(clamp_to_range(InputField::AdCost, dec!(250)), dec!(100));
        assert_eq!(clamp_to_range(InputField::AdCost, dec!(35)), dec!(35));
        assert_eq!(clamp_to_range(InputField::ReferralRate, dec!(-3)), dec!(0));
    }
}
