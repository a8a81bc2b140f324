//! CSV loader for projection scenarios.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Only
//! `name` is required; every other column is optional and an empty cell or
//! missing column falls back to the value in
//! [`ProjectionInputs::default`].
//!
//! | Column                  | Type    | Notes                         |
//! |-------------------------|---------|-------------------------------|
//! | `name`                  | string  | Scenario label, non-empty     |
//! | `self_sales`            | decimal | 万円 per month                |
//! | `partner_sales`         | decimal | 万円 per month                |
//! | `sales_per_female`      | decimal | 万円 per month                |
//! | `ad_cost`               | decimal | 万円 per month                |
//! | `rent_cost`             | decimal | 万円 per month                |
//! | `utility_cost`          | decimal | 万円 per month                |
//! | `misc_cost`             | decimal | 万円 per month                |
//! | `manager_cost`          | decimal | 万円 per month                |
//! | `female_rate`           | decimal | % of revenue, 0–100           |
//! | `referral_rate`         | decimal | % of revenue, 0–100           |
//! | `property_initial_cost` | decimal | 万円, one-time                |
//! | `interior_cost`         | decimal | 万円, one-time                |
//! | `equipment_cost`        | decimal | 万円, one-time                |
//! | `recruitment_count`     | integer | Job postings                  |
//! | `entry_rate`            | decimal | %, 0–100                      |
//!
//! ### Example
//!
//! ```csv
//! name,self_sales,partner_sales,manager_cost
//! baseline,300,,
//! two-partners,1200,800,40
//! ```
use std::path::Path;

use roi_core::{InputField, ProjectionError, ProjectionInputs};
use rust_decimal::Decimal;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    self_sales: Option<Decimal>,
    partner_sales: Option<Decimal>,
    sales_per_female: Option<Decimal>,
    ad_cost: Option<Decimal>,
    rent_cost: Option<Decimal>,
    utility_cost: Option<Decimal>,
    misc_cost: Option<Decimal>,
    manager_cost: Option<Decimal>,
    female_rate: Option<Decimal>,
    referral_rate: Option<Decimal>,
    property_initial_cost: Option<Decimal>,
    interior_cost: Option<Decimal>,
    equipment_cost: Option<Decimal>,
    recruitment_count: Option<u32>,
    entry_rate: Option<Decimal>,
}

/// A named set of inputs loaded from one CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub inputs: ProjectionInputs,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading scenario CSV data.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioLoadError {
    /// The file could not be read.
    #[error("cannot read scenario file: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV was structurally invalid or a cell had the wrong type.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A header is neither `name` nor an input field.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// The `name` cell was empty. `row` is 1-based (header = row 0).
    #[error("scenario on row {row} has no name")]
    MissingName { row: usize },

    /// The row parsed but its values are outside the engine's domain.
    #[error("scenario '{name}' on row {row} is invalid: {source}")]
    InvalidInputs {
        name: String,
        row: usize,
        #[source]
        source: ProjectionError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<Scenario, ScenarioLoadError> {
    if row.name.is_empty() {
        return Err(ScenarioLoadError::MissingName { row: row_number });
    }

    let defaults = ProjectionInputs::default();
    let inputs = ProjectionInputs {
        self_sales: row.self_sales.unwrap_or(defaults.self_sales),
        partner_sales: row.partner_sales.unwrap_or(defaults.partner_sales),
        sales_per_female: row.sales_per_female.unwrap_or(defaults.sales_per_female),
        ad_cost: row.ad_cost.unwrap_or(defaults.ad_cost),
        rent_cost: row.rent_cost.unwrap_or(defaults.rent_cost),
        utility_cost: row.utility_cost.unwrap_or(defaults.utility_cost),
        misc_cost: row.misc_cost.unwrap_or(defaults.misc_cost),
        manager_cost: row.manager_cost.unwrap_or(defaults.manager_cost),
        female_rate: row.female_rate.unwrap_or(defaults.female_rate),
        referral_rate: row.referral_rate.unwrap_or(defaults.referral_rate),
        property_initial_cost: row
            .property_initial_cost
            .unwrap_or(defaults.property_initial_cost),
        interior_cost: row.interior_cost.unwrap_or(defaults.interior_cost),
        equipment_cost: row.equipment_cost.unwrap_or(defaults.equipment_cost),
        recruitment_count: row.recruitment_count.unwrap_or(defaults.recruitment_count),
        entry_rate: row.entry_rate.unwrap_or(defaults.entry_rate),
    };

    inputs
        .validate()
        .map_err(|source| ScenarioLoadError::InvalidInputs {
            name: row.name.clone(),
            row: row_number,
            source,
        })?;

    Ok(Scenario {
        name: row.name,
        inputs,
    })
}

/// Parse CSV text and return the scenarios in file order.
///
/// # Errors
///
/// * [`ScenarioLoadError::Parse`] – structurally invalid CSV or a cell that
///   cannot be deserialised.
/// * [`ScenarioLoadError::UnknownColumn`] – a header that names no input.
/// * [`ScenarioLoadError::MissingName`] – a row with an empty `name`.
/// * [`ScenarioLoadError::InvalidInputs`] – a row whose values fail
///   [`ProjectionInputs::validate`].
pub fn load_from_str(input: &str) -> Result<Vec<Scenario>, ScenarioLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    if let Some(column) = reader
        .headers()?
        .iter()
        .find(|header| *header != "name" && InputField::parse(header).is_none())
    {
        return Err(ScenarioLoadError::UnknownColumn(column.to_string()));
    }

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Read a file from disk and delegate to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<Scenario>, ScenarioLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
