//! Report rendering for the terminal and for CI.

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use comprobar::SuiteReport;
use console::style;
use std::path::Path;

/// Print a styled per-scenario summary to stdout
pub fn print_styled(report: &SuiteReport) {
    println!("Suite: {}", report.suite);
    for outcome in &report.outcomes {
        let mark = if outcome.status.is_passed() {
            style("✓").green()
        } else {
            style("✗").red()
        };
        println!(
            "  [{mark}] {} ({}ms)",
            outcome.name,
            outcome.duration.as_millis()
        );
        if let Some(ref error) = outcome.error {
            println!("      └─ {}", style(error).red());
        }
    }

    let summary = format!(
        "{} passed, {} failed ({} total) in {}ms",
        report.passed_count(),
        report.failed_count(),
        report.total(),
        report.duration.as_millis()
    );
    if report.all_passed() {
        println!("\n{}", style(summary).green());
    } else {
        println!("\n{}", style(summary).red());
    }
}

/// Render the report in the requested machine format
pub fn render(report: &SuiteReport, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => Ok(report.to_json()?),
        OutputFormat::Junit => Ok(render_junit(report)),
    }
}

/// Render the report as JUnit XML
#[must_use]
pub fn render_junit(report: &SuiteReport) -> String {
    let timestamp = chrono::Utc::now().to_rfc3339();
    let failures = report.failed_count();
    let tests = report.total();

    let mut cases = String::new();
    for outcome in &report.outcomes {
        let name = xml_escape(&outcome.name);
        let time = outcome.duration.as_secs_f64();
        if let Some(ref error) = outcome.error {
            cases.push_str(&format!(
                "    <testcase name=\"{name}\" classname=\"{}\" time=\"{time:.3}\">\n      <failure message=\"{}\"/>\n    </testcase>\n",
                report.suite,
                xml_escape(error)
            ));
        } else {
            cases.push_str(&format!(
                "    <testcase name=\"{name}\" classname=\"{}\" time=\"{time:.3}\"/>\n",
                report.suite
            ));
        }
    }

    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <testsuites name=\"{suite}\" tests=\"{tests}\" failures=\"{failures}\" timestamp=\"{timestamp}\">\n\
         \x20\x20<testsuite name=\"{suite}\" tests=\"{tests}\" failures=\"{failures}\">\n\
         {cases}\x20\x20</testsuite>\n\
         </testsuites>\n",
        suite = report.suite,
    )
}

/// Write rendered output to a file, or print it when no path is given
pub fn write_or_print(rendered: &str, path: Option<&Path>) -> CliResult<()> {
    match path {
        Some(path) => std::fs::write(path, rendered).map_err(|e| {
            CliError::report_generation(format!("Failed to write {}: {e}", path.display()))
        }),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
