//! Session state for the simulator.
//!
//! A [`Simulator`] owns the current inputs and the report computed from them.
//! Every accepted change recomputes the whole report before it replaces the
//! previous one, so callers never see a report that disagrees with the inputs.

use roi_core::{InputField, ProjectionEngine, ProjectionError, ProjectionInputs, ProjectionReport};
use tracing::debug;

use crate::input::{InputAssignment, clamp_to_range};

/// Clamps every field of `inputs` into its recognised range.
fn clamp_all(mut inputs: ProjectionInputs) -> Result<ProjectionInputs, ProjectionError> {
    for &field in InputField::all() {
        let clamped = clamp_to_range(field, inputs.value(field));
        inputs.set_value(field, clamped)?;
    }
    Ok(inputs)
}

/// The live projection session.
#[derive(Debug, Clone)]
pub struct Simulator {
    engine: ProjectionEngine,
    inputs: ProjectionInputs,
    report: ProjectionReport,
}

impl Simulator {
    /// Starts a session from `inputs`, clamped into the recognised ranges.
    pub fn new(
        engine: ProjectionEngine,
        inputs: ProjectionInputs,
    ) -> Result<Self, ProjectionError> {
        let inputs = clamp_all(inputs)?;
        let report = engine.compute(&inputs)?;
        Ok(Self {
            engine,
            inputs,
            report,
        })
    }

    pub fn inputs(&self) -> &ProjectionInputs {
        &self.inputs
    }

    pub fn report(&self) -> &ProjectionReport {
        &self.report
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    /// Applies one assignment and recomputes.
    ///
    /// The value is clamped into the field's range first. On error the
    /// session is left unchanged.
    pub fn apply(
        &mut self,
        assignment: InputAssignment,
    ) -> Result<&ProjectionReport, ProjectionError> {
        let value = clamp_to_range(assignment.field, assignment.value);
        let mut inputs = self.inputs.clone();
        inputs.set_value(assignment.field, value)?;
        debug!(field = %assignment.field, %value, "Applying input change");
        self.commit(inputs)
    }

    /// Replaces the whole input vector and recomputes.
    pub fn replace_inputs(
        &mut self,
        inputs: ProjectionInputs,
    ) -> Result<&ProjectionReport, ProjectionError> {
        let inputs = clamp_all(inputs)?;
        self.commit(inputs)
    }

    /// Restores the default scenario.
    pub fn reset(&mut self) -> Result<&ProjectionReport, ProjectionError> {
        self.replace_inputs(ProjectionInputs::default())
    }

    fn commit(
        &mut self,
        inputs: ProjectionInputs,
    ) -> Result<&ProjectionReport, ProjectionError> {
        let report = self.engine.compute(&inputs)?;
        self.inputs = inputs;
        self.report = report;
        Ok(&self.report)
    }
}
