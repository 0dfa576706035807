//! Suite reporting: per-scenario outcomes and whole-run summaries.
//!
//! Collect-all semantics: every scenario's outcome is recorded and the
//! run fails if any single outcome failed.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome status of one scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioStatus {
    /// Display matched the expected string
    Passed,
    /// Assertion mismatch, missing control, or page failure
    Failed,
}

impl ScenarioStatus {
    /// Check if status is passing
    #[must_use]
    pub const fn is_passed(self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Result of running a single scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Scenario name
    pub name: String,
    /// Pass/fail status
    pub status: ScenarioStatus,
    /// Error message if failed
    pub error: Option<String>,
    /// Scenario duration
    pub duration: Duration,
}

impl ScenarioOutcome {
    /// Create a passing outcome
    #[must_use]
    pub fn passed(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            status: ScenarioStatus::Passed,
            error: None,
            duration,
        }
    }

    /// Create a failing outcome
    #[must_use]
    pub fn failed(name: impl Into<String>, duration: Duration, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ScenarioStatus::Failed,
            error: Some(error.into()),
            duration,
        }
    }
}

/// Results from one whole suite run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Suite name
    pub suite: String,
    /// Individual scenario outcomes, in execution order
    pub outcomes: Vec<ScenarioOutcome>,
    /// Total run duration
    pub duration: Duration,
}

impl SuiteReport {
    /// Create a report from collected outcomes
    #[must_use]
    pub fn new(
        suite: impl Into<String>,
        outcomes: Vec<ScenarioOutcome>,
        duration: Duration,
    ) -> Self {
        Self {
            suite: suite.into(),
            outcomes,
            duration,
        }
    }

    /// Check if every scenario passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.status.is_passed())
    }

    /// Count passed scenarios
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.status.is_passed()).count()
    }

    /// Count failed scenarios
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.passed_count()
    }

    /// Total scenario count
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Get failed outcomes
    #[must_use]
    pub fn failures(&self) -> Vec<&ScenarioOutcome> {
        self.outcomes
            .iter()
            .filter(|o| !o.status.is_passed())
            .collect()
    }

    /// Render a plain-text report
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Suite: {}\n", self.suite));
        for outcome in &self.outcomes {
            let mark = if outcome.status.is_passed() { "✓" } else { "✗" };
            out.push_str(&format!(
                "  [{mark}] {} ({}ms)\n",
                outcome.name,
                outcome.duration.as_millis()
            ));
            if let Some(ref error) = outcome.error {
                out.push_str(&format!("      └─ {error}\n"));
            }
        }
        out.push_str(&format!(
            "\n{} passed, {} failed ({} total) in {}ms\n",
            self.passed_count(),
            self.failed_count(),
            self.total(),
            self.duration.as_millis()
        ));
        out
    }

    /// Render the report as pretty JSON
    pub fn to_json(&self) -> crate::result::SuiteResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
