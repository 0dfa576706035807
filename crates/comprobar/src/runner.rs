//! Scenario runner: executes each scenario against a live rendering of
//! the application and verifies the observable result.
//!
//! Per-scenario control flow is strictly linear: acquire page →
//! navigate → perform ordered click sequence → read display → assert
//! equality → release page. Key activations are awaited one at a time
//! because calculator state is cumulative and order-dependent.

use crate::driver::CalculatorPage;
use crate::reporter::{ScenarioOutcome, SuiteReport};
use crate::result::{SuiteError, SuiteResult};
use crate::scenario::Scenario;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Suite configuration: where the application lives and which
/// scenarios to run.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Address the application is already serving at
    pub base_url: String,
    /// Browser launch options
    pub browser: crate::browser::BrowserConfig,
    /// Substring filter on scenario names (None = run all)
    pub filter: Option<String>,
}

impl SuiteConfig {
    /// Create a configuration for the given application address
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            browser: crate::browser::BrowserConfig::default(),
            filter: None,
        }
    }

    /// Set browser launch options
    #[must_use]
    pub fn with_browser(mut self, browser: crate::browser::BrowserConfig) -> Self {
        self.browser = browser;
        self
    }

    /// Run only scenarios whose name contains `filter`
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Whether a scenario name passes the configured filter
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self.filter {
            Some(ref needle) => name.contains(needle.as_str()),
            None => true,
        }
    }
}

/// Source of fresh calculator pages, one per scenario.
///
/// Every page handed out is already navigated to the application, so
/// an `open` failure before the first scenario doubles as the
/// connectivity probe.
#[async_trait]
pub trait PageSource: Sync {
    /// Page type this source produces
    type Page: CalculatorPage + Send;

    /// Open a fresh page, navigated to the application
    async fn open(&self) -> SuiteResult<Self::Page>;
}

/// Execute one scenario against an already-navigated page.
///
/// Never returns an error: every failure is captured in the outcome so
/// the remaining scenarios still run (report-all, not fail-fast).
pub async fn run_scenario<P: CalculatorPage>(page: &mut P, scenario: &Scenario) -> ScenarioOutcome {
    let start = Instant::now();

    for key in &scenario.keys {
        debug!(scenario = %scenario.name, key = %key, "pressing");
        if let Err(e) = page.press(*key).await {
            return ScenarioOutcome::failed(&scenario.name, start.elapsed(), e.to_string());
        }
    }

    match page.display().await {
        Ok(actual) if actual == scenario.expected => {
            ScenarioOutcome::passed(&scenario.name, start.elapsed())
        }
        Ok(actual) => ScenarioOutcome::failed(
            &scenario.name,
            start.elapsed(),
            SuiteError::mismatch(&scenario.expected, actual).to_string(),
        ),
        Err(e) => ScenarioOutcome::failed(&scenario.name, start.elapsed(), e.to_string()),
    }
}

/// Verify the application page title.
///
/// Recovered from the original suite: the page must be titled
/// `Calculator App`.
pub async fn run_title_check<P: CalculatorPage>(page: &P) -> ScenarioOutcome {
    let start = Instant::now();
    match page.title().await {
        Ok(actual) if actual == crate::scenario::EXPECTED_TITLE => {
            ScenarioOutcome::passed("page title is Calculator App", start.elapsed())
        }
        Ok(actual) => ScenarioOutcome::failed(
            "page title is Calculator App",
            start.elapsed(),
            SuiteError::mismatch(crate::scenario::EXPECTED_TITLE, actual).to_string(),
        ),
        Err(e) => ScenarioOutcome::failed(
            "page title is Calculator App",
            start.elapsed(),
            e.to_string(),
        ),
    }
}

/// Run the scenario set against pages from `source` and collect a
/// report.
///
/// Fails fast only on the connectivity precondition: the probe page
/// must open before any scenario runs, and a probe failure surfaces as
/// [`SuiteError::Unreachable`] with zero scenarios executed. Individual
/// scenario failures are collected into the report.
pub async fn run_suite<S: PageSource>(
    source: &S,
    config: &SuiteConfig,
    scenarios: &[Scenario],
) -> SuiteResult<SuiteReport> {
    let start = Instant::now();
    let mut outcomes = Vec::new();

    // Connectivity precondition, fatal to the whole run
    let probe = source.open().await.map_err(|e| {
        if e.is_fatal() {
            e
        } else {
            SuiteError::unreachable(&config.base_url, e.to_string())
        }
    })?;
    outcomes.push(run_title_check(&probe).await);
    close_page(probe).await;

    for scenario in scenarios.iter().filter(|s| config.matches(&s.name)) {
        let outcome = match source.open().await {
            Ok(mut page) => {
                let outcome = run_scenario(&mut page, scenario).await;
                close_page(page).await;
                outcome
            }
            Err(e) => ScenarioOutcome::failed(&scenario.name, Duration::ZERO, e.to_string()),
        };
        info!(
            scenario = %scenario.name,
            passed = outcome.status.is_passed(),
            "scenario finished"
        );
        outcomes.push(outcome);
    }

    Ok(SuiteReport::new("calculator", outcomes, start.elapsed()))
}

/// Release a scenario's page; a failed close never fails the run
async fn close_page<P: CalculatorPage>(page: P) {
    if let Err(e) = page.close().await {
        debug!(error = %e, "page close failed");
    }
}

#[cfg(feature = "browser")]
mod live {
    use super::{run_suite, PageSource, SuiteConfig};
    use crate::browser::{Browser, CalculatorSurface};
    use crate::reporter::SuiteReport;
    use crate::result::SuiteResult;
    use crate::scenario::Scenario;
    use async_trait::async_trait;

    /// Pages from one live browser, each navigated to the application
    struct BrowserPages<'a> {
        browser: &'a Browser,
        base_url: &'a str,
    }

    #[async_trait]
    impl PageSource for BrowserPages<'_> {
        type Page = CalculatorSurface;

        async fn open(&self) -> SuiteResult<CalculatorSurface> {
            let mut page = self.browser.page().await?;
            page.goto(self.base_url).await?;
            Ok(page)
        }
    }

    /// Runs the scenario set against a live application.
    ///
    /// One browser brackets the whole run; every scenario owns a fresh
    /// page so no state crosses scenario boundaries.
    #[derive(Debug)]
    pub struct SuiteRunner {
        config: SuiteConfig,
    }

    impl SuiteRunner {
        /// Create a runner for the given configuration
        #[must_use]
        pub const fn new(config: SuiteConfig) -> Self {
            Self { config }
        }

        /// Get the runner configuration
        #[must_use]
        pub const fn config(&self) -> &SuiteConfig {
            &self.config
        }

        /// Run the scenario set and collect a report.
        ///
        /// Fails fast only on the connectivity precondition (the
        /// application must be reachable before any scenario runs) and
        /// on browser launch; individual scenario failures are
        /// collected into the report.
        pub async fn run(&self, scenarios: &[Scenario]) -> SuiteResult<SuiteReport> {
            let browser = Browser::launch(self.config.browser.clone()).await?;
            let pages = BrowserPages {
                browser: &browser,
                base_url: &self.config.base_url,
            };

            let run = run_suite(&pages, &self.config, scenarios).await;
            // The browser outlives the last scenario; close it either way
            let closed = browser.close().await;
            let report = run?;
            closed?;
            Ok(report)
        }
    }
}

#[cfg(feature = "browser")]
pub use live::SuiteRunner;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::MockCalculatorPage;
    use crate::keypad::Key;
    use crate::scenario::default_suite;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Hands out a fresh mock page per call, like a live browser does
    struct FreshMockPages;

    #[async_trait]
    impl PageSource for FreshMockPages {
        type Page = MockCalculatorPage;

        async fn open(&self) -> SuiteResult<MockCalculatorPage> {
            Ok(MockCalculatorPage::new())
        }
    }

    /// Refuses every page, counting how often the runner asked
    struct UnreachableApp {
        opens: AtomicUsize,
    }

    #[async_trait]
    impl PageSource for UnreachableApp {
        type Page = MockCalculatorPage;

        async fn open(&self) -> SuiteResult<MockCalculatorPage> {
            self.opens.fetch_add(1, Ordering::SeqCst);
            Err(SuiteError::page("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_default_suite_passes_through_the_runner() {
        let config = SuiteConfig::new("http://localhost:3000");
        let report = run_suite(&FreshMockPages, &config, &default_suite())
            .await
            .unwrap();

        assert!(report.all_passed(), "failures: {:?}", report.failures());
        // Title check plus the ten scenarios
        assert_eq!(report.total(), 11);
    }

    #[tokio::test]
    async fn test_unreachable_app_aborts_before_any_scenario() {
        let source = UnreachableApp {
            opens: AtomicUsize::new(0),
        };
        let config = SuiteConfig::new("http://localhost:3000");
        let err = run_suite(&source, &config, &default_suite())
            .await
            .unwrap_err();

        assert!(matches!(err, SuiteError::Unreachable { .. }));
        assert!(err.is_fatal());
        assert!(err.to_string().contains("http://localhost:3000"));
        // Only the probe asked for a page; no scenario executed
        assert_eq!(source.opens.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_scenario_does_not_stop_the_rest() {
        let scenarios = vec![
            Scenario::new("adds 1 + 1", [Key::One, Key::Add, Key::One, Key::Equals], "2"),
            Scenario::new("forced failure", [Key::One, Key::Equals], "999"),
            Scenario::new(
                "multiplies 2 * 2",
                [Key::Two, Key::Multiply, Key::Two, Key::Equals],
                "4",
            ),
        ];
        let config = SuiteConfig::new("http://localhost:3000");
        let report = run_suite(&FreshMockPages, &config, &scenarios).await.unwrap();

        // Title check plus all three scenarios, despite the failure
        assert_eq!(report.total(), 4);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.failures()[0].name, "forced failure");
        assert!(report.outcomes.last().unwrap().status.is_passed());
    }

    #[tokio::test]
    async fn test_filter_limits_the_runner_loop() {
        let config = SuiteConfig::new("http://localhost:3000").with_filter("decimal");
        let report = run_suite(&FreshMockPages, &config, &default_suite())
            .await
            .unwrap();

        // Title check plus the single matching scenario
        assert_eq!(report.total(), 2);
        assert!(report.all_passed());
    }

    #[tokio::test]
    async fn test_scenarios_are_order_independent() {
        let suite = default_suite();
        for scenario in suite.iter().rev() {
            let mut page = MockCalculatorPage::new();
            let outcome = run_scenario(&mut page, scenario).await;
            assert!(outcome.status.is_passed(), "{} failed", scenario.name);
        }
    }

    #[tokio::test]
    async fn test_keys_are_activated_in_declaration_order() {
        let scenario = &default_suite()[5];
        let mut page = MockCalculatorPage::new();
        let _ = run_scenario(&mut page, scenario).await;
        assert_eq!(page.presses(), &scenario.keys[..]);
    }

    #[tokio::test]
    async fn test_mismatch_reports_actual_and_expected() {
        let scenario = Scenario::new("forced mismatch", [Key::One, Key::Equals], "1");
        let mut page = MockCalculatorPage::new().with_display_override("NaN");
        let outcome = run_scenario(&mut page, &scenario).await;

        assert!(!outcome.status.is_passed());
        let error = outcome.error.unwrap();
        assert!(error.contains("\"1\""));
        assert!(error.contains("\"NaN\""));
    }

    #[tokio::test]
    async fn test_missing_control_stops_the_scenario() {
        let scenario = Scenario::new(
            "missing multiply key",
            [Key::Two, Key::Multiply, Key::Two, Key::Equals],
            "4",
        );
        let mut page = MockCalculatorPage::new().with_missing_control(Key::Multiply);
        let outcome = run_scenario(&mut page, &scenario).await;

        assert!(!outcome.status.is_passed());
        assert!(outcome.error.unwrap().contains(".key-multiply"));
        // No key after the missing one was activated
        assert_eq!(page.presses(), &[Key::Two][..]);
    }

    #[tokio::test]
    async fn test_title_check_passes_against_mock() {
        let page = MockCalculatorPage::new();
        let outcome = run_title_check(&page).await;
        assert!(outcome.status.is_passed());
    }

    #[test]
    fn test_filter_matches_substring() {
        let config = SuiteConfig::new("http://localhost:3000").with_filter("decimal");
        assert!(config.matches("multiplies decimals exactly"));
        assert!(!config.matches("adds 1 + 1"));
    }

    #[test]
    fn test_no_filter_matches_everything() {
        let config = SuiteConfig::new("http://localhost:3000");
        assert!(config.matches("anything"));
    }
}
