//! CLI error types

use std::fmt;
use std::io;

use crate::config::ConfigError;
use crate::schema::ValidationErrors;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O or JSON error on input/output
    IoError,
    /// Payload failed validation
    Rejected,
    /// HTTP server could not start or stopped with an error
    ServeFailed,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "RELEASE_CLI_CONFIG_ERROR",
            Self::IoError => "RELEASE_CLI_IO_ERROR",
            Self::Rejected => "RELEASE_CLI_REJECTED",
            Self::ServeFailed => "RELEASE_CLI_SERVE_FAILED",
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
    report: Option<ValidationErrors>,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            report: None,
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Payload rejected; keeps the report for printing
    pub fn rejected(report: ValidationErrors) -> Self {
        Self {
            code: CliErrorCode::Rejected,
            message: format!("payload rejected on {} field(s)", report.len()),
            report: Some(report),
        }
    }

    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Validation report, for rejected payloads
    pub fn report(&self) -> Option<&ValidationErrors> {
        self.report.as_ref()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
