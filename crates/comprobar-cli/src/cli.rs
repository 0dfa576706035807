//! Command-line argument definitions

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Comprobar CLI: drive the calculator UI suite from the command line
#[derive(Debug, Parser)]
#[command(name = "comprobador", version, about)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the scenario set against a live application
    Run(RunArgs),
    /// List the scenarios without running them
    List(ListArgs),
}

/// Arguments for `comprobador run`
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Address the application is serving at
    #[arg(long, env = "CALC_BASE_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Show the browser window instead of running headless
    #[arg(long)]
    pub headful: bool,

    /// Disable the chromium sandbox (containers/CI)
    #[arg(long)]
    pub no_sandbox: bool,

    /// Path to the chromium binary (default: auto-detect)
    #[arg(long)]
    pub chromium_path: Option<String>,

    /// Run only scenarios whose name contains this substring
    #[arg(long)]
    pub filter: Option<String>,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Arguments for `comprobador list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show key sequences alongside scenario names
    #[arg(long)]
    pub keys: bool,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
    /// JUnit XML for CI ingestion
    Junit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_defaults() {
        let cli = Cli::parse_from(["comprobador", "run"]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.base_url, "http://localhost:3000");
                assert!(!args.headful);
                assert_eq!(args.format, OutputFormat::Text);
            }
            Commands::List(_) => panic!("expected run command"),
        }
    }

    #[test]
    fn test_run_flags_parse() {
        let cli = Cli::parse_from([
            "comprobador",
            "run",
            "--base-url",
            "http://127.0.0.1:8080",
            "--no-sandbox",
            "--filter",
            "decimal",
            "--format",
            "json",
        ]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.base_url, "http://127.0.0.1:8080");
                assert!(args.no_sandbox);
                assert_eq!(args.filter.as_deref(), Some("decimal"));
                assert_eq!(args.format, OutputFormat::Json);
            }
            Commands::List(_) => panic!("expected run command"),
        }
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::parse_from(["comprobador", "-vv", "list"]);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }
}
