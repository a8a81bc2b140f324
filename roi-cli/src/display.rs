//! Text and JSON rendering of a projection.
//!
//! Amounts are shown in 万円 with thousands separators; rates and ROI are
//! shown as percentages with one decimal place.

use std::fmt;
use std::io::{self, Write};

use roi_core::calculations::common::{ratio_percent, round_half_up};
use roi_core::{FieldKind, InputField, PaybackPeriod, ProjectionInputs, ProjectionReport};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::input::InputRange;

const UNIT: &str = "万円";
const NOT_AVAILABLE: &str = "n/a";

/// Inserts `,` between groups of three integer digits.
fn group_thousands(value: Decimal) -> String {
    let text = value.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && !value.is_zero() {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

/// Formats an amount in 万円, e.g. `1,742.4万円`.
///
/// At most three decimal places are shown and trailing zeros are dropped.
pub fn format_man(value: Decimal) -> String {
    format!("{}{UNIT}", group_thousands(round_half_up(value, 3).normalize()))
}

/// Formats a percentage with exactly one decimal place, e.g. `55.0%`.
pub fn format_percent(value: Decimal) -> String {
    let mut rounded = round_half_up(value, 1);
    rounded.rescale(1);
    format!("{rounded}%")
}

/// Formats an optional percentage such as ROI or a cost share, using `n/a`
/// when it is undefined.
pub fn format_optional_percent(value: Option<Decimal>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_percent)
}

pub fn format_payback(payback: PaybackPeriod) -> String {
    match payback {
        PaybackPeriod::Months(1) => "1 month".to_string(),
        PaybackPeriod::Months(months) => format!("{months} months"),
        PaybackPeriod::Unreachable => "never recouped".to_string(),
    }
}

/// Formats a field value with the unit its kind implies.
pub fn format_field_value(
    field: InputField,
    value: Decimal,
) -> String {
    match field.kind() {
        FieldKind::Amount => format_man(value),
        FieldKind::Percentage => format!("{}%", value.normalize()),
        FieldKind::Count => value.normalize().to_string(),
    }
}

fn first_month_status(profitable: bool) -> &'static str {
    if profitable {
        "profitable from month 1"
    } else {
        "loss-making"
    }
}

/// Full text report: inputs, headline figures, the monthly series and the
/// cost breakdown.
pub struct TextReport<'a> {
    inputs: &'a ProjectionInputs,
    report: &'a ProjectionReport,
}

impl<'a> TextReport<'a> {
    pub fn new(
        inputs: &'a ProjectionInputs,
        report: &'a ProjectionReport,
    ) -> Self {
        Self { inputs, report }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let result = &self.report.result;

        writeln!(f, "Inputs")?;
        for &field in InputField::all() {
            writeln!(
                f,
                "  {:<24} {:>14}",
                field.label(),
                format_field_value(field, self.inputs.value(field))
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Revenue")?;
        writeln!(f, "  {:<24} {:>14}", "Total sales", format_man(result.total_sales))?;
        writeln!(
            f,
            "  {:<24} {:>14}",
            "Revenue share rate",
            format_percent(result.fanza_rate_percent())
        )?;
        writeln!(f, "  {:<24} {:>14}", "Own revenue", format_man(result.self_revenue))?;
        writeln!(f, "  {:<24} {:>14}", "Partner revenue", format_man(result.partner_revenue))?;
        writeln!(
            f,
            "  {:<24} {:>14}",
            "Monthly revenue",
            format_man(result.monthly_total_revenue)
        )?;

        writeln!(f)?;
        writeln!(f, "Costs")?;
        writeln!(f, "  {:<24} {:>14}", "Performer fee", format_man(result.female_fee))?;
        writeln!(f, "  {:<24} {:>14}", "Referral fee", format_man(result.referral_fee))?;
        writeln!(f, "  {:<24} {:>14}", "Recurring costs", format_man(result.total_cost))?;

        writeln!(f)?;
        writeln!(f, "Profit")?;
        writeln!(
            f,
            "  {:<24} {:>14}",
            "Monthly net profit",
            format_man(round_half_up(result.monthly_net_profit, 0))
        )?;
        writeln!(
            f,
            "  {:<24} {:>14}",
            "Initial investment",
            format_man(result.initial_investment)
        )?;
        writeln!(f, "  {:<24} {:>14}", "Payback", format_payback(result.payback))?;
        writeln!(
            f,
            "  {:<24} {:>14}",
            "First month",
            first_month_status(result.profitable_from_first_month)
        )?;

        writeln!(f)?;
        writeln!(f, "Returns")?;
        for horizon in result.horizons() {
            writeln!(
                f,
                "  {:<24} {:>14}   ROI {:>10}",
                format!("{} months", horizon.months),
                format_man(horizon.cumulative_profit),
                format_optional_percent(horizon.roi_percent)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Recruitment")?;
        writeln!(f, "  {:<24} {:>14}", "Quality bonus", format!("x{}", result.quality_bonus))?;
        writeln!(
            f,
            "  {:<24} {:>14}",
            "Adjusted sales/performer",
            format_man(result.adjusted_sales_per_female)
        )?;

        writeln!(f)?;
        writeln!(f, "Cumulative profit")?;
        writeln!(f, "  {:>5} {:>14} {:>14}", "month", "profit", "cumulative")?;
        for point in &self.report.series {
            writeln!(
                f,
                "  {:>5} {:>14} {:>14}",
                point.month,
                format_man(point.profit),
                format_man(point.cumulative_profit)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Cost breakdown")?;
        let total: Decimal = self.report.cost_breakdown.iter().map(|entry| entry.value).sum();
        for entry in &self.report.cost_breakdown {
            writeln!(
                f,
                "  {:<16} {:>14} {:>8} {}",
                entry.category.as_str(),
                format_man(entry.value),
                format_optional_percent(ratio_percent(entry.value, total)),
                entry.category.color()
            )?;
        }

        Ok(())
    }
}

/// One-line headline: net profit, payback and 24 month ROI.
pub fn summary_line(report: &ProjectionReport) -> String {
    let result = &report.result;
    format!(
        "net {}/month, payback {}, 24-month ROI {}",
        format_man(round_half_up(result.monthly_net_profit, 0)),
        format_payback(result.payback),
        format_optional_percent(result.roi_24_months)
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    inputs: &'a ProjectionInputs,
    #[serde(flatten)]
    report: &'a ProjectionReport,
}

/// Pretty-printed JSON of the inputs and the whole report.
pub fn render_json(
    inputs: &ProjectionInputs,
    report: &ProjectionReport,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport { inputs, report })
}

/// Writes the full report to `output` in `format`.
pub fn write_report<W: Write>(
    output: &mut W,
    inputs: &ProjectionInputs,
    report: &ProjectionReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write!(output, "{}", TextReport::new(inputs, report)),
        OutputFormat::Json => writeln!(output, "{}", render_json(inputs, report)?),
    }
}

/// Table of every input field with its recognised range and step.
pub struct FieldRanges;

impl fmt::Display for FieldRanges {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{:<22} {:<24} {:>7} {:>7} {:>5}", "field", "label", "min", "max", "step")?;
        for &field in InputField::all() {
            let range = InputRange::for_field(field);
            let unit = match field.kind() {
                FieldKind::Amount => UNIT,
                FieldKind::Percentage => "%",
                FieldKind::Count => "",
            };
            writeln!(
                f,
                "{:<22} {:<24} {:>7} {:>7} {:>5} {unit}",
                field.as_str(),
                field.label(),
                range.min,
                range.max,
                range.step
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roi_core::ProjectionEngine;
    use rust_decimal_macros::dec;

    fn default_report() -> (ProjectionInputs, ProjectionReport) {
        let inputs = ProjectionInputs::default();
        let report = ProjectionEngine::standard().compute(&inputs).unwrap();
        (inputs, report)
    }

    #[test]
    fn format_man_groups_thousands() {
        assert_eq!(format_man(dec!(1742.4000)), "1,742.4万円");
        assert_eq!(format_man(dec!(1234567)), "1,234,567万円");
        assert_eq!(format_man(dec!(999)), "999万円");
        assert_eq!(format_man(dec!(0)), "0万円");
    }

    #[test]
    fn format_man_keeps_sign_and_limits_decimals() {
        assert_eq!(format_man(dec!(-1234.5)), "-1,234.5万円");
        assert_eq!(format_man(dec!(2.34567)), "2.346万円");
        assert_eq!(format_man(dec!(-0.0001)), "0万円");
    }

    #[test]
    fn format_percent_shows_one_decimal() {
        assert_eq!(format_percent(dec!(55)), "55.0%");
        assert_eq!(format_percent(dec!(829.71428)), "829.7%");
        assert_eq!(format_percent(dec!(2489.142857)), "2489.1%");
        assert_eq!(format_percent(dec!(12.25)), "12.3%");
    }

    #[test]
    fn format_optional_percent_handles_undefined() {
        assert_eq!(format_optional_percent(None), "n/a");
        assert_eq!(format_optional_percent(Some(dec!(50))), "50.0%");
    }

    #[test]
    fn format_payback_variants() {
        assert_eq!(format_payback(PaybackPeriod::Months(0)), "0 months");
        assert_eq!(format_payback(PaybackPeriod::Months(1)), "1 month");
        assert_eq!(format_payback(PaybackPeriod::Months(4)), "4 months");
        assert_eq!(format_payback(PaybackPeriod::Unreachable), "never recouped");
    }

    #[test]
    fn format_field_value_uses_kind_unit() {
        assert_eq!(format_field_value(InputField::RentCost, dec!(15)), "15万円");
        assert_eq!(format_field_value(InputField::FemaleRate, dec!(30.0)), "30%");
        assert_eq!(format_field_value(InputField::RecruitmentCount, dec!(3)), "3");
    }

    #[test]
    fn summary_line_for_default_scenario() {
        let (_, report) = default_report();

        assert_eq!(
            summary_line(&report),
            "net 73万円/month, payback 1 month, 24-month ROI 2489.1%"
        );
    }

    #[test]
    fn text_report_contains_headline_figures() {
        let (inputs, report) = default_report();

        let text = TextReport::new(&inputs, &report).to_string();

        assert!(text.contains("55.0%"));
        assert!(text.contains("165万円"));
        assert!(text.contains("73万円"));
        assert!(text.contains("profitable from month 1"));
        assert!(text.contains("829.7%"));
        assert!(text.contains("1,742.4万円"));
        assert!(text.contains("#f94144"));
    }

    #[test]
    fn text_report_lists_every_month() {
        let (inputs, report) = default_report();

        let text = TextReport::new(&inputs, &report).to_string();
        let series_rows = text
            .lines()
            .skip_while(|line| *line != "Cumulative profit")
            .skip(2)
            .take_while(|line| !line.is_empty())
            .count();

        assert_eq!(series_rows, 24);
    }

    #[test]
    fn text_report_marks_loss_making_scenario() {
        let inputs = ProjectionInputs {
            self_sales: dec!(0),
            ..ProjectionInputs::default()
        };
        let report = ProjectionEngine::standard().compute(&inputs).unwrap();

        let text = TextReport::new(&inputs, &report).to_string();

        assert!(text.contains("never recouped"));
        assert!(text.contains("loss-making"));
    }

    #[test]
    fn render_json_includes_inputs_and_report() {
        let (inputs, report) = default_report();

        let json = render_json(&inputs, &report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["inputs"]["recruitment_count"], 3);
        assert_eq!(value["series"].as_array().map(Vec::len), Some(24));
        assert_eq!(value["cost_breakdown"].as_array().map(Vec::len), Some(7));
        assert_eq!(value["result"]["payback"]["months"], 1);
    }

    #[test]
    fn write_report_switches_on_format() {
        let (inputs, report) = default_report();

        let mut text = Vec::new();
        write_report(&mut text, &inputs, &report, OutputFormat::Text).unwrap();
        let mut json = Vec::new();
        write_report(&mut json, &inputs, &report, OutputFormat::Json).unwrap();

        assert!(String::from_utf8(text).unwrap().starts_with("Inputs\n"));
        assert!(String::from_utf8(json).unwrap().starts_with('{'));
    }

    #[test]
    fn field_ranges_lists_every_field() {
        let text = FieldRanges.to_string();

        assert_eq!(text.lines().count(), InputField::all().len() + 1);
        assert!(text.contains("female_rate"));
    }
}
