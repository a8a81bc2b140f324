use roi_core::{ProjectionEngine, ProjectionError, ProjectionReport};
use thiserror::Error;
use tracing::{debug, info};

use crate::scenario_loader::Scenario;

#[derive(Debug, Error)]
#[error("scenario '{name}' failed: {source}")]
pub struct BatchError {
    pub name: String,
    #[source]
    pub source: ProjectionError,
}

/// A scenario together with its computed report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioOutcome {
    pub name: String,
    pub report: ProjectionReport,
}

/// Computes every scenario with `engine`, preserving input order.
///
/// Stops at the first scenario the engine rejects.
pub fn run_scenarios(
    engine: &ProjectionEngine,
    scenarios: &[Scenario],
) -> Result<Vec<ScenarioOutcome>, BatchError> {
    let outcomes = scenarios
        .iter()
        .map(|scenario| {
            let report = engine
                .compute(&scenario.inputs)
                .map_err(|source| BatchError {
                    name: scenario.name.clone(),
                    source,
                })?;
            if !report.result.payback.is_reachable() {
                debug!(scenario = %scenario.name, "scenario never recovers its investment");
            }
            Ok(ScenarioOutcome {
                name: scenario.name.clone(),
                report,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    info!(scenarios = outcomes.len(), "computed batch");
    Ok(outcomes)
}
