//! Human-readable report rendering for a completed pipeline run.

use std::io::{self, Write};

use crate::sim::pipeline::PipelineRun;

const RULE: &str = "------------------------------------------------------";

/// Writes the full three-section report: load, control, summary.
///
/// # Arguments
///
/// * `writer` - Destination implementing `Write`
/// * `rule` - Controller description printed in the control header
/// * `run` - Output of [`crate::sim::pipeline::Pipeline::run`]
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_report(mut writer: impl Write, rule: &str, run: &PipelineRun) -> io::Result<()> {
    writeln!(
        writer,
        "--- Data Loading and Feature Extraction ({} Hours) ---",
        run.table.len()
    )?;
    for r in &run.table {
        writeln!(writer, "{r}")?;
    }
    writeln!(writer, "{RULE}\n")?;

    writeln!(
        writer,
        "--- Applying Static Rule-Based Load Shedding (Optimization) ---"
    )?;
    writeln!(writer, "{rule}\n")?;
    for step in &run.control_steps {
        writeln!(writer, "{step}")?;
    }
    writeln!(writer, "{RULE}\n")?;

    writeln!(writer, "--- Optimization Results Summary ---")?;
    writeln!(writer, "{}", run.summary)?;
    writeln!(writer, "------------------------------------")?;
    writer.flush()
}

/// Prints the report to stdout.
///
/// # Errors
///
/// Returns an `io::Error` if stdout is closed.
pub fn print_report(rule: &str, run: &PipelineRun) -> io::Result<()> {
    let stdout = io::stdout();
    write_report(stdout.lock(), rule, run)
}
