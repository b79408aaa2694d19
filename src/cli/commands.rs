//! CLI command implementations
//!
//! Each command is: load config, materialize the collections, run one
//! engine call, emit the payload. The engine never touches the filesystem;
//! everything fallible happens here.

use std::path::Path;

use crate::merge;
use crate::observability;
use crate::record::{load_planned, load_records, LoadError, PlannedVersion, VersionRecord};
use crate::resolve;
use crate::stats;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_json, write_report};

/// Parses arguments and dispatches to the selected command.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

/// Dispatches a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Resolve { config, token } => resolve_token(&config, &token),
        Command::Explain { config, token } => explain_token(&config, &token),
        Command::Merge { config } => merge_listing(&config),
        Command::Stats { config } => stats_rollup(&config),
    }
}

/// Resolve a token and print the canonical record.
fn resolve_token(config_path: &Path, token: &str) -> CliResult<()> {
    let (records, planned) = load_collections(config_path)?;

    match resolve::lookup(&records, &planned, token) {
        Some(resolved) => {
            observability::info(
                "resolve.hit",
                &[("token", token), ("version", &resolved.version)],
            );
            write_json(&resolved)
        }
        None => {
            observability::warn("resolve.miss", &[("token", token)]);
            Err(CliError::not_found(token))
        }
    }
}

/// Trace a lookup and print the banner report.
fn explain_token(config_path: &Path, token: &str) -> CliResult<()> {
    let (records, planned) = load_collections(config_path)?;

    let trace = resolve::explain(&records, &planned, token);
    observability::info(
        "resolve.trace",
        &[("rule", trace.rule.as_str()), ("token", token)],
    );
    write_report(&trace.to_string())
}

/// Print the merged released+planned listing.
fn merge_listing(config_path: &Path) -> CliResult<()> {
    let (records, planned) = load_collections(config_path)?;

    let merged = merge::merge(&records, &planned);
    let entries = merged.len().to_string();
    observability::info("merge.complete", &[("entries", &entries)]);
    write_json(&merged)
}

/// Print the stats rollup.
fn stats_rollup(config_path: &Path) -> CliResult<()> {
    let (records, _) = load_collections(config_path)?;

    let rollup = stats::aggregate(&records);
    let sections = rollup.total_sections.to_string();
    observability::info("stats.complete", &[("sections", &sections)]);
    write_json(&rollup)
}

/// Loads both collections per the config.
///
/// The records file must load; the planned file is optional content, so an
/// unreadable planned file degrades to an empty collection (with a WARN),
/// while a present-but-malformed one stays an error.
fn load_collections(config_path: &Path) -> CliResult<(Vec<VersionRecord>, Vec<PlannedVersion>)> {
    let config = Config::load(config_path)?;

    let records = load_records(&config.records_path)?;

    let planned = match load_planned(&config.planned_path) {
        Ok(planned) => planned,
        Err(LoadError::Io { path, .. }) => {
            observability::warn("load.planned_missing", &[("path", &path)]);
            Vec::new()
        }
        Err(err) => return Err(err.into()),
    };

    Ok((records, planned))
}
