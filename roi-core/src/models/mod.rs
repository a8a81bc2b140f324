mod chart;
mod input_field;
mod projection_inputs;
mod projection_result;
mod rate_tier;

pub use chart::{ChartPoint, CostBreakdownEntry, CostCategory};
pub use input_field::{FieldKind, InputField};
pub use projection_inputs::{MAX_AMOUNT, ProjectionInputs};
pub use projection_result::{HorizonReturn, PaybackPeriod, ProjectionReport, ProjectionResult};
pub use rate_tier::RateTier;
