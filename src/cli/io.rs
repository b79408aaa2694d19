//! Output handling for CLI
//!
//! Command payloads are JSON on stdout, one document per invocation.
//! Everything else (logs, errors) goes to stderr.

use std::io::{self, Write};

use serde::Serialize;

use super::errors::CliResult;

/// Write a command payload to stdout
pub fn write_json<T: Serialize>(payload: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, payload)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Write a human-readable report to stdout
pub fn write_report(report: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
