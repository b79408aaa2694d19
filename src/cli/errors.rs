//! CLI-specific error types
//!
//! Every CLI failure carries a stable machine-readable code; messages are
//! for humans, codes are for scripts wrapping the binary.

use std::fmt;
use std::io;

use crate::record::LoadError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout/stderr)
    IoError,
    /// A record collection could not be loaded
    LoadError,
    /// No record matched the requested token
    NotFound,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "VDX_CLI_CONFIG_ERROR",
            Self::IoError => "VDX_CLI_IO_ERROR",
            Self::LoadError => "VDX_CLI_LOAD_ERROR",
            Self::NotFound => "VDX_CLI_NOT_FOUND",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// Not-found error for a lookup token
    pub fn not_found(token: &str) -> Self {
        Self::new(
            CliErrorCode::NotFound,
            format!("no version record matches '{}'", token),
        )
    }

    /// The machine-readable code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// The human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::new(CliErrorCode::IoError, err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(CliErrorCode::IoError, err.to_string())
    }
}

impl From<LoadError> for CliError {
    fn from(err: LoadError) -> Self {
        Self::new(CliErrorCode::LoadError, err.to_string())
    }
}
