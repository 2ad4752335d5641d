//! CLI-specific error types
//!
//! All CLI errors are fatal: they are printed to stderr and the process
//! exits non-zero.

use std::fmt;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Environment configuration error
    ConfigError,
    /// Server failed to boot or terminated
    BootFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "CINEDB_CLI_CONFIG_ERROR",
            Self::BootFailed => "CINEDB_CLI_BOOT_FAILED",
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

    /// Boot failure
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
