//! Comprobar: end-to-end verification suite for the calculator UI.
//!
//! Drives a real browser over the Chrome DevTools Protocol, clicks
//! calculator keys via stable CSS selectors, and asserts on the exact
//! text of the display element.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────────┐    ┌───────────────┐
//! │ Scenario set │───►│ Scenario Runner   │───►│ Headless      │
//! │ (static data)│    │ (page-per-scenario│    │ Browser (CDP) │
//! │              │    │  report-all)      │    │               │
//! └──────────────┘    └──────────────────┘    └───────────────┘
//! ```
//!
//! Each scenario owns a fresh page for its whole duration, so no state
//! crosses scenario boundaries. Key activations within a scenario are
//! strictly ordered; the runner awaits each one before issuing the
//! next.
//!
//! The `browser` feature enables real CDP control via chromiumoxide;
//! without it, [`MockCalculatorPage`] implements the same observable
//! contract for unit testing.

#![warn(missing_docs)]

mod browser;
mod driver;
mod keypad;
mod reporter;
mod result;
mod runner;
mod scenario;

pub use browser::BrowserConfig;
#[cfg(feature = "browser")]
pub use browser::{Browser, CalculatorSurface};
pub use driver::{CalculatorPage, MockCalculatorPage};
pub use keypad::{Key, DISPLAY_SELECTOR};
pub use reporter::{ScenarioOutcome, ScenarioStatus, SuiteReport};
pub use result::{SuiteError, SuiteResult};
#[cfg(feature = "browser")]
pub use runner::SuiteRunner;
pub use runner::{run_scenario, run_suite, run_title_check, PageSource, SuiteConfig};
pub use scenario::{default_suite, Scenario, EXPECTED_TITLE};
