//! Result and error types for Comprobar.

use thiserror::Error;

/// Result type for suite operations
pub type SuiteResult<T> = Result<T, SuiteError>;

/// Errors that can occur while driving the calculator UI
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Application not serving content at the configured address.
    /// Fatal to the whole run; no scenario executes after this.
    #[error("Application unreachable at {url}: {message}")]
    Unreachable {
        /// Address that was probed
        url: String,
        /// Error message
        message: String,
    },

    /// A key or display selector resolved to no element
    #[error("Missing control: selector '{selector}' matched no element")]
    MissingControl {
        /// Selector that failed to resolve
        selector: String,
    },

    /// Display text differed from the scenario's expected string
    #[error("Display mismatch: expected \"{expected}\", got \"{actual}\"")]
    Mismatch {
        /// Expected display text
        expected: String,
        /// Observed display text
        actual: String,
    },

    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page error
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// Input simulation error
    #[error("Input simulation failed: {message}")]
    Input {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SuiteError {
    /// Create an unreachable-application error
    #[must_use]
    pub fn unreachable(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unreachable {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a missing-control error
    #[must_use]
    pub fn missing_control(selector: impl Into<String>) -> Self {
        Self::MissingControl {
            selector: selector.into(),
        }
    }

    /// Create an assertion-mismatch error
    #[must_use]
    pub fn mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::Mismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a browser launch error
    #[must_use]
    pub fn browser_launch(message: impl Into<String>) -> Self {
        Self::BrowserLaunch {
            message: message.into(),
        }
    }

    /// Create a page error
    #[must_use]
    pub fn page(message: impl Into<String>) -> Self {
        Self::Page {
            message: message.into(),
        }
    }

    /// Create a navigation error
    #[must_use]
    pub fn navigation(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Navigation {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an input simulation error
    #[must_use]
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    /// Whether this error aborts the whole run rather than one scenario
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Unreachable { .. } | Self::BrowserLaunch { .. })
    }
}
