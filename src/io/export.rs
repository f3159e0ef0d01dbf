//! CSV export for the processed hourly table.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::ControlStep;

/// Column header for CSV table export.
const HEADER: &str = "hour,demand_mw,action,shed_mw,adjusted_load_mw";

/// Exports control steps to a CSV file at the given path.
///
/// Writes a header row followed by one data row per hour. Produces
/// deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(steps: &[ControlStep], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(steps, buf)
}

/// Writes control steps as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(steps: &[ControlStep], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for s in steps {
        wtr.write_record(&[
            s.hour.to_string(),
            format!("{:.2}", s.demand_mw),
            s.action.label().to_string(),
            format!("{:.2}", s.action.shed_mw()),
            format!("{:.2}", s.adjusted_load_mw),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
