//! Comprobador: command-line interface for the calculator UI suite.
//!
//! ## Usage
//!
//! ```bash
//! comprobador run                         # Run the whole scenario set
//! comprobador run --filter decimal       # Run matching scenarios
//! comprobador run --format junit         # CI-friendly report
//! comprobador list --keys                # Show the scenario set
//! ```

#![warn(missing_docs)]

mod cli;
mod config;
mod error;
mod output;

pub use cli::{Cli, Commands, ListArgs, OutputFormat, RunArgs};
pub use config::{CliConfig, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{print_styled, render, render_junit, write_or_print};
