use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::calculations::ProjectionError;
use crate::models::{FieldKind, InputField};

/// Largest amount accepted for any monetary field, in 万円.
///
/// Keeps every product the engine forms (sales × rate, profit × 24, ...)
/// well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// The complete set of business inputs for one projection.
///
/// Monetary fields are monthly amounts in 万円 unless noted; `female_rate`,
/// `referral_rate` and `entry_rate` are percentages of monthly revenue.
///
/// Deserializing fills any missing field from [`ProjectionInputs::default`],
/// so partial scenario files are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectionInputs {
    // Monthly sales
    pub self_sales: Decimal,
    pub partner_sales: Decimal,
    pub sales_per_female: Decimal,

    // Recurring monthly costs
    pub ad_cost: Decimal,
    pub rent_cost: Decimal,
    pub utility_cost: Decimal,
    pub misc_cost: Decimal,
    pub manager_cost: Decimal,

    // Fees as a percentage of monthly revenue
    pub female_rate: Decimal,
    pub referral_rate: Decimal,

    // One-time investment
    pub property_initial_cost: Decimal,
    pub interior_cost: Decimal,
    pub equipment_cost: Decimal,

    // Recruitment
    pub recruitment_count: u32,
    /// Collected and displayed, but not used by any formula.
    pub entry_rate: Decimal,
}

impl Default for ProjectionInputs {
    /// The starting scenario of a small agency: 300万円 of own sales and a
    /// 70万円 fit-out.
    fn default() -> Self {
        Self {
            self_sales: Decimal::from(300),
            partner_sales: Decimal::ZERO,
            sales_per_female: Decimal::from(50),
            ad_cost: Decimal::from(10),
            rent_cost: Decimal::from(15),
            utility_cost: Decimal::from(5),
            misc_cost: Decimal::from(3),
            manager_cost: Decimal::ZERO,
            female_rate: Decimal::from(30),
            referral_rate: Decimal::from(6),
            property_initial_cost: Decimal::from(30),
            interior_cost: Decimal::from(30),
            equipment_cost: Decimal::from(10),
            recruitment_count: 3,
            entry_rate: Decimal::from(50),
        }
    }
}

impl ProjectionInputs {
    /// Sum of the one-time costs: property, interior and equipment.
    pub fn initial_investment(&self) -> Decimal {
        self.property_initial_cost + self.interior_cost + self.equipment_cost
    }

    /// Returns the value of `field` as a decimal.
    pub fn value(
        &self,
        field: InputField,
    ) -> Decimal {
        match field {
            InputField::SelfSales => self.self_sales,
            InputField::PartnerSales => self.partner_sales,
            InputField::SalesPerFemale => self.sales_per_female,
            InputField::AdCost => self.ad_cost,
            InputField::RentCost => self.rent_cost,
            InputField::UtilityCost => self.utility_cost,
            InputField::MiscCost => self.misc_cost,
            InputField::ManagerCost => self.manager_cost,
            InputField::FemaleRate => self.female_rate,
            InputField::ReferralRate => self.referral_rate,
            InputField::PropertyInitialCost => self.property_initial_cost,
            InputField::InteriorCost => self.interior_cost,
            InputField::EquipmentCost => self.equipment_cost,
            InputField::RecruitmentCount => Decimal::from(self.recruitment_count),
            InputField::EntryRate => self.entry_rate,
        }
    }

    /// Sets `field` to `value`.
    ///
    /// Only the count field is checked here (it must be a non-negative whole
    /// number that fits in `u32`); domain checks on amounts and percentages
    /// happen in [`ProjectionInputs::validate`].
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidCount`] when `field` is
    /// [`InputField::RecruitmentCount`] and `value` is not a whole `u32`.
    pub fn set_value(
        &mut self,
        field: InputField,
        value: Decimal,
    ) -> Result<(), ProjectionError> {
        let slot = match field {
            InputField::SelfSales => &mut self.self_sales,
            InputField::PartnerSales => &mut self.partner_sales,
            InputField::SalesPerFemale => &mut self.sales_per_female,
            InputField::AdCost => &mut self.ad_cost,
            InputField::RentCost => &mut self.rent_cost,
            InputField::UtilityCost => &mut self.utility_cost,
            InputField::MiscCost => &mut self.misc_cost,
            InputField::ManagerCost => &mut self.manager_cost,
            InputField::FemaleRate => &mut self.female_rate,
            InputField::ReferralRate => &mut self.referral_rate,
            InputField::PropertyInitialCost => &mut self.property_initial_cost,
            InputField::InteriorCost => &mut self.interior_cost,
            InputField::EquipmentCost => &mut self.equipment_cost,
            InputField::EntryRate => &mut self.entry_rate,
            InputField::RecruitmentCount => {
                self.recruitment_count = whole_count(value)?;
                return Ok(());
            }
        };
        *slot = value;
        Ok(())
    }

    /// Checks every field against its domain.
    ///
    /// Amounts must lie in `[0, MAX_AMOUNT]` and percentages in `[0, 100]`.
    /// Fields are checked in [`InputField::all`] order and the first
    /// violation is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        for &field in InputField::all() {
            let value = self.value(field);
            match field.kind() {
                FieldKind::Amount => {
                    if value < Decimal::ZERO {
                        return Err(ProjectionError::NegativeAmount { field, value });
                    }
                    if value > MAX_AMOUNT {
                        return Err(ProjectionError::AmountTooLarge { field, value });
                    }
                }
                FieldKind::Percentage => {
                    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
                        return Err(ProjectionError::PercentageOutOfRange { field, value });
                    }
                }
                FieldKind::Count => {}
            }
        }
        Ok(())
    }
}

fn whole_count(value: Decimal) -> Result<u32, ProjectionError> {
    if value.fract() != Decimal::ZERO {
        return Err(ProjectionError::InvalidCount(value));
    }
    value.to_u32().ok_or(ProjectionError::InvalidCount(value))
}
