//! Interactive front end for the revenue projection engine.
//!
//! Parses and clamps user input, keeps the live session, renders reports and
//! wires up logging and configuration for the `roi-sim` binary.

pub mod config;
pub mod display;
pub mod input;
pub mod logging;
pub mod repl;
pub mod state;

pub use config::{ConfigError, OutputFormat, SimulatorConfig};
pub use input::{InputAssignment, InputError, InputRange, parse_assignment, parse_decimal};
pub use state::Simulator;
