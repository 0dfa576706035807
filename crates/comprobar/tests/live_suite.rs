//! Live end-to-end run against a served calculator application.
//!
//! Needs the application already serving (CALC_BASE_URL, default
//! http://localhost:3000) and a local chromium, so it is ignored by
//! default. Run with:
//!
//! ```bash
//! cargo test -p comprobar --features browser -- --ignored
//! ```

#![cfg(feature = "browser")]

use comprobar::{default_suite, BrowserConfig, SuiteConfig, SuiteRunner};

fn base_url() -> String {
    std::env::var("CALC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

#[tokio::test]
#[ignore = "requires a served calculator app and chromium"]
async fn full_suite_passes_against_live_app() {
    let config =
        SuiteConfig::new(base_url()).with_browser(BrowserConfig::default().with_no_sandbox());
    let runner = SuiteRunner::new(config);

    let report = runner.run(&default_suite()).await.expect("suite run");
    assert!(report.all_passed(), "{}", report.render_text());
}

#[tokio::test]
#[ignore = "requires a served calculator app and chromium"]
async fn filtered_run_executes_matching_scenarios_only() {
    let config = SuiteConfig::new(base_url())
        .with_browser(BrowserConfig::default().with_no_sandbox())
        .with_filter("decimal");
    let runner = SuiteRunner::new(config);

    let report = runner.run(&default_suite()).await.expect("suite run");
    // Title check plus the single matching scenario
    assert_eq!(report.total(), 2);
}
