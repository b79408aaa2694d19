//! CLI module for verdex
//!
//! Provides the command-line surface over the engine:
//! - resolve: one-shot token resolution
//! - explain: resolution trace for one token
//! - merge: merged released+planned listing
//! - stats: rollup statistics

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_json, write_report};
