//! CLI argument definitions using clap
//!
//! Commands:
//! - verdex resolve --config <path> <token>
//! - verdex explain --config <path> <token>
//! - verdex merge --config <path>
//! - verdex stats --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// verdex - deterministic version-record resolution over hand-authored content
#[derive(Parser, Debug)]
#[command(name = "verdex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a token to exactly one version record
    Resolve {
        /// Path to configuration file
        #[arg(long, default_value = "./verdex.json")]
        config: PathBuf,

        /// Slug, version, or composite identifier to resolve
        token: String,
    },

    /// Show how a token would resolve, and why
    Explain {
        /// Path to configuration file
        #[arg(long, default_value = "./verdex.json")]
        config: PathBuf,

        /// Slug, version, or composite identifier to trace
        token: String,
    },

    /// Print the merged released+planned listing
    Merge {
        /// Path to configuration file
        #[arg(long, default_value = "./verdex.json")]
        config: PathBuf,
    },

    /// Print rollup statistics over the released collection
    Stats {
        /// Path to configuration file
        #[arg(long, default_value = "./verdex.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
