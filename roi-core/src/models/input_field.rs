use std::fmt;

use serde::{Deserialize, Serialize};

/// How a field's value is interpreted and validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A non-negative amount in 万円.
    Amount,
    /// A percentage in `[0, 100]`.
    Percentage,
    /// A non-negative whole number.
    Count,
}

/// Names every field of [`crate::ProjectionInputs`].
///
/// The order of [`InputField::all`] matches the order in which the fields are
/// grouped for display: sales, recurring costs, fee rates, one-time
/// investment, then recruitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    SelfSales,
    PartnerSales,
    SalesPerFemale,
    AdCost,
    RentCost,
    UtilityCost,
    MiscCost,
    ManagerCost,
    FemaleRate,
    ReferralRate,
    PropertyInitialCost,
    InteriorCost,
    EquipmentCost,
    RecruitmentCount,
    EntryRate,
}

impl InputField {
    pub fn all() -> &'static [InputField] {
        &[
            Self::SelfSales,
            Self::PartnerSales,
            Self::SalesPerFemale,
            Self::AdCost,
            Self::RentCost,
            Self::UtilityCost,
            Self::MiscCost,
            Self::ManagerCost,
            Self::FemaleRate,
            Self::ReferralRate,
            Self::PropertyInitialCost,
            Self::InteriorCost,
            Self::EquipmentCost,
            Self::RecruitmentCount,
            Self::EntryRate,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfSales => "self_sales",
            Self::PartnerSales => "partner_sales",
            Self::SalesPerFemale => "sales_per_female",
            Self::AdCost => "ad_cost",
            Self::RentCost => "rent_cost",
            Self::UtilityCost => "utility_cost",
            Self::MiscCost => "misc_cost",
            Self::ManagerCost => "manager_cost",
            Self::FemaleRate => "female_rate",
            Self::ReferralRate => "referral_rate",
            Self::PropertyInitialCost => "property_initial_cost",
            Self::InteriorCost => "interior_cost",
            Self::EquipmentCost => "equipment_cost",
            Self::RecruitmentCount => "recruitment_count",
            Self::EntryRate => "entry_rate",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|field| field.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SelfSales => "Own sales",
            Self::PartnerSales => "Partner sales",
            Self::SalesPerFemale => "Sales per performer",
            Self::AdCost => "Advertising",
            Self::RentCost => "Rent",
            Self::UtilityCost => "Utilities & telecom",
            Self::MiscCost => "Miscellaneous",
            Self::ManagerCost => "Manager payroll",
            Self::FemaleRate => "Performer fee rate",
            Self::ReferralRate => "Referral fee rate",
            Self::PropertyInitialCost => "Property initial cost",
            Self::InteriorCost => "Interior fit-out",
            Self::EquipmentCost => "Equipment",
            Self::RecruitmentCount => "Job postings",
            Self::EntryRate => "Entry rate",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::FemaleRate | Self::ReferralRate | Self::EntryRate => FieldKind::Percentage,
            Self::RecruitmentCount => FieldKind::Count,
            _ => FieldKind::Amount,
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
