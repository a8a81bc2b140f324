use std::path::PathBuf;

use pretty_assertions::assert_eq;
use roi_cli::display::{TextReport, summary_line};
use roi_cli::{
    ConfigError, InputError, OutputFormat, Simulator, SimulatorConfig, parse_assignment, repl,
};
use roi_core::{PaybackPeriod, ProjectionInputs};
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture_session() -> Simulator {
    let config = SimulatorConfig::load(&fixture("scenario.toml")).unwrap();
    Simulator::new(config.engine(), config.inputs.clone()).unwrap()
}

// =============================================================================
// config file to report
// =============================================================================

#[test]
fn config_file_drives_engine_and_inputs() {
    let config = SimulatorConfig::load(&fixture("scenario.toml")).unwrap();

    assert_eq!(config.log_level.as_deref(), Some("warn"));
    assert_eq!(config.format, Some(OutputFormat::Text));
    assert_eq!(config.inputs.self_sales, dec!(600));
    assert_eq!(config.inputs.partner_sales, dec!(600));
}

#[test]
fn session_from_config_clamps_and_computes() {
    let sim = load_fixture_session();
    let result = &sim.report().result;

    // ad_cost 250 is clamped to the 100 maximum
    assert_eq!(sim.inputs().ad_cost, dec!(100));

    // 1200 total sales falls in the custom 60% tier
    assert_eq!(result.fanza_rate, dec!(0.60));
    assert_eq!(result.monthly_total_revenue, dec!(720));
    assert_eq!(result.female_fee, dec!(216));
    assert_eq!(result.referral_fee, dec!(43.2));
    assert_eq!(result.total_cost, dec!(123));
    assert_eq!(result.monthly_net_profit, dec!(337.8));
    assert_eq!(result.payback, PaybackPeriod::Months(1));
    assert_eq!(result.quality_bonus, dec!(1.10));
}

#[test]
fn missing_config_is_an_io_error() {
    let err = SimulatorConfig::load(&fixture("missing.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::Io { .. }));
}

// =============================================================================
// assignments
// =============================================================================

#[test]
fn set_overrides_apply_in_order() {
    let mut sim = load_fixture_session();

    for raw in ["self_sales=0", "partner_sales=0"] {
        sim.apply(parse_assignment(raw).unwrap()).unwrap();
    }

    assert_eq!(sim.report().result.total_sales, dec!(0));
    assert_eq!(sim.report().result.payback, PaybackPeriod::Unreachable);
    assert!(!sim.report().result.profitable_from_first_month);
}

#[test]
fn unknown_field_is_rejected_before_the_engine() {
    let err = parse_assignment("monthly_sales=100").unwrap_err();

    assert!(matches!(err, InputError::UnknownField(_)));
}

// =============================================================================
// interactive session
// =============================================================================

#[test]
fn interactive_session_round_trip() {
    let mut sim =
        Simulator::new(Default::default(), ProjectionInputs::default()).unwrap();
    let script = "\
help
partner_sales = 800
fields
bogus
reset
quit
";
    let mut out = Vec::new();

    repl::run(&mut sim, script.as_bytes(), &mut out, OutputFormat::Text).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("commands:"));
    assert!(text.contains("partner_sales"));
    assert_eq!(text.matches("error:").count(), 1);
    assert_eq!(sim.inputs(), &ProjectionInputs::default());
    assert_eq!(text.lines().last(), Some(summary_line(sim.report()).as_str()));
}

#[test]
fn text_report_matches_session_state() {
    let sim = load_fixture_session();

    let text = TextReport::new(sim.inputs(), sim.report()).to_string();

    assert!(text.contains("60.0%"));
    assert!(text.contains("338万円"));
    assert!(text.contains("x1.10"));
}
