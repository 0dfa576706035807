//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Suite execution error
    #[error("Suite execution failed: {message}")]
    SuiteExecution {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Comprobar library error
    #[error("Comprobar error: {0}")]
    Suite(#[from] comprobar::SuiteError),

    /// Report generation error
    #[error("Report generation failed: {message}")]
    ReportGeneration {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a suite execution error
    #[must_use]
    pub fn suite_execution(message: impl Into<String>) -> Self {
        Self::SuiteExecution {
            message: message.into(),
        }
    }

    /// Create a report generation error
    #[must_use]
    pub fn report_generation(message: impl Into<String>) -> Self {
        Self::ReportGeneration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CliError::config("bad base URL");
        assert!(err.to_string().contains("Configuration"));
        assert!(err.to_string().contains("bad base URL"));
    }

    #[test]
    fn test_suite_execution_error() {
        let err = CliError::suite_execution("2 scenario(s) failed");
        assert!(err.to_string().contains("Suite execution"));
    }

    #[test]
    fn test_library_error_converts() {
        let err: CliError = comprobar::SuiteError::missing_control(".key-7").into();
        assert!(err.to_string().contains(".key-7"));
    }
}
