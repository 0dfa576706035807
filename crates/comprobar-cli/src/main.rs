//! Comprobador binary entry point.

use clap::Parser;
use comprobador::{Cli, CliConfig, CliResult, Commands, ListArgs, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    init_tracing(config.verbosity);

    match cli.command {
        Commands::Run(args) => run_suite(&config, &args),
        Commands::List(args) => {
            list_scenarios(&args);
            Ok(())
        }
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };
    CliConfig::new().with_verbosity(verbosity)
}

fn init_tracing(verbosity: Verbosity) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(verbosity.filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn list_scenarios(args: &ListArgs) {
    for scenario in comprobar::default_suite() {
        if args.keys {
            println!(
                "{:<48} {:<12} => {}",
                scenario.name,
                scenario.key_sequence(),
                scenario.expected
            );
        } else {
            println!("{}", scenario.name);
        }
    }
}

#[cfg(feature = "browser")]
fn run_suite(config: &CliConfig, args: &comprobador::RunArgs) -> CliResult<()> {
    use comprobador::OutputFormat;

    let browser = build_browser_config(args);
    let mut suite_config = comprobar::SuiteConfig::new(&args.base_url).with_browser(browser);
    if let Some(ref filter) = args.filter {
        suite_config = suite_config.with_filter(filter);
    }

    if config.verbosity.is_verbose() {
        println!("Running suite against {}", args.base_url);
    }

    let runner = comprobar::SuiteRunner::new(suite_config);
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| comprobador::CliError::suite_execution(format!("Failed to create runtime: {e}")))?;
    let report = rt.block_on(runner.run(&comprobar::default_suite()))?;

    match args.format {
        OutputFormat::Text if args.output.is_none() => {
            if !config.verbosity.is_quiet() {
                comprobador::print_styled(&report);
            }
        }
        format => {
            let rendered = comprobador::render(&report, format)?;
            comprobador::write_or_print(&rendered, args.output.as_deref())?;
        }
    }

    if report.all_passed() {
        Ok(())
    } else {
        Err(comprobador::CliError::suite_execution(format!(
            "{} scenario(s) failed",
            report.failed_count()
        )))
    }
}

#[cfg(feature = "browser")]
fn build_browser_config(args: &comprobador::RunArgs) -> comprobar::BrowserConfig {
    let mut browser = comprobar::BrowserConfig::default().with_headless(!args.headful);
    if args.no_sandbox {
        browser = browser.with_no_sandbox();
    }
    if let Some(ref path) = args.chromium_path {
        browser = browser.with_chromium_path(path);
    }
    browser
}

#[cfg(not(feature = "browser"))]
fn run_suite(_config: &CliConfig, _args: &comprobador::RunArgs) -> CliResult<()> {
    Err(comprobador::CliError::config(
        "Browser support not enabled. Rebuild with --features browser",
    ))
}
