//! Interactive session: one command per input line.
//!
//! Every accepted `field=value` line recomputes the projection and prints the
//! new headline (or the whole report as JSON). Bad lines print an error and
//! leave the session as it was.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::config::OutputFormat;
use crate::display::{FieldRanges, render_json, summary_line, write_report};
use crate::input::parse_assignment;
use crate::logging::set_log_level;
use crate::state::Simulator;

const HELP: &str = "\
commands:
  <field>=<value>  change one input and recompute
  show             print the full report
  reset            restore the default scenario
  fields           list input fields and their ranges
  log <level>      change the log level (error, warn, info, debug, trace)
  help             show this text
  quit | exit      leave";

/// A parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Assign(&'a str),
    Show,
    Reset,
    Fields,
    Log(&'a str),
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.contains('=') {
            return Self::Assign(line);
        }
        match line.split_once(char::is_whitespace) {
            Some(("log", level)) => Self::Log(level.trim()),
            _ => match line {
                "" => Self::Empty,
                "show" => Self::Show,
                "reset" => Self::Reset,
                "fields" => Self::Fields,
                "help" | "?" => Self::Help,
                "quit" | "exit" => Self::Quit,
                other => Self::Unknown(other),
            },
        }
    }
}

/// Writes the current state in `format`: the headline in text mode, the
/// whole report in JSON mode.
fn render_update<W: Write>(
    sim: &Simulator,
    output: &mut W,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(output, "{}", summary_line(sim.report())),
        OutputFormat::Json => writeln!(output, "{}", render_json(sim.inputs(), sim.report())?),
    }
}

/// Runs the session until `quit`, `exit` or end of input.
pub fn run<R: BufRead, W: Write>(
    sim: &mut Simulator,
    input: R,
    mut output: W,
    format: OutputFormat,
) -> io::Result<()> {
    info!("Interactive session started");
    writeln!(output, "type 'help' for commands")?;

    for line in input.lines() {
        let line = line?;
        match Command::parse(&line) {
            Command::Empty => {}
            Command::Quit => break,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Fields => write!(output, "{FieldRanges}")?,
            Command::Show => write_report(&mut output, sim.inputs(), sim.report(), format)?,
            Command::Reset => match sim.reset().map(|_| ()) {
                Ok(()) => render_update(sim, &mut output, format)?,
                Err(e) => writeln!(output, "error: {e}")?,
            },
            Command::Log(level) => match set_log_level(level) {
                Ok(()) => writeln!(output, "log level set to {level}")?,
                Err(e) => writeln!(output, "error: {e}")?,
            },
            Command::Assign(text) => {
                let applied = parse_assignment(text)
                    .map_err(|e| e.to_string())
                    .and_then(|assignment| {
                        sim.apply(assignment).map(|_| ()).map_err(|e| e.to_string())
                    });
                match applied {
                    Ok(()) => render_update(sim, &mut output, format)?,
                    Err(message) => {
                        warn!(input = %text, "Rejected input: {message}");
                        writeln!(output, "error: {message}")?;
                    }
                }
            }
            Command::Unknown(other) => {
                writeln!(output, "error: unknown command '{other}' (try 'help')")?
            }
        }
        output.flush()?;
    }

    info!("Interactive session ended");
    Ok(())
}
