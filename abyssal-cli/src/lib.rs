//! Command-line interface for scoring and ranking seafloor grid cells.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use eyre::WrapErr;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod report;
mod score;

pub use error::CliError;

use score::{ScoreArgs, run_score};

const ARG_DATASET: &str = "dataset";
const ARG_TOP: &str = "top";
const ARG_PRESET: &str = "preset";
const ARG_W_VALUE: &str = "w-value";
const ARG_W_DIFFICULTY: &str = "w-difficulty";
const ARG_W_IMPACT: &str = "w-impact";
const ARG_W_HAZARD: &str = "w-hazard";
const ARG_OUTPUT: &str = "output";
const ARG_JSON: &str = "json";
const ARG_ON_INVALID_IDENTITY: &str = "on-invalid-identity";
const ARG_DELIMITER: &str = "delimiter";
const ENV_DELIMITER: &str = "ABYSSAL_CMDS_SCORE_DELIMITER";

/// Filter applied when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn,abyssal=info";

/// Install the stderr log subscriber.
///
/// `RUST_LOG` overrides the default filter. Records emitted through the
/// `log` facade by the library crates are forwarded to the subscriber.
///
/// # Errors
/// Fails when a global subscriber is already installed.
pub fn init_logging() -> eyre::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .wrap_err("failed to install log subscriber")
}

/// Run the Abyssal CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, the dataset or an
/// export cannot be processed.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "abyssal",
    about = "Score and rank seafloor grid cells for extraction",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a merged grid dataset and print the best locations.
    Score(ScoreArgs),
}

#[cfg(test)]
mod tests;
