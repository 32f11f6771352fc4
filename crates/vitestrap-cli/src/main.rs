//! # vitestrap CLI
//!
//! Bootstraps a React + Vite project with a chosen set of libraries.
//!
//! ## Startup sequence
//!
//! 1. Load `.env`, parse CLI arguments (clap handles `--help` / `--version`).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + file + env).
//! 4. Build the [`OutputManager`].
//! 5. Run the create workflow.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! |  0   | Success                                  |
//! |  1   | Internal / external command / filesystem |
//! |  2   | User / input error, cancelled            |
//! |  3   | Resource not found                       |
//! |  4   | Configuration error                      |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
#[cfg(feature = "interactive")]
mod prompt;

fn main() -> ExitCode {
    // Missing .env is fine
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too and must exit 0
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        yes = cli.yes,
        dry_run = cli.dry_run,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let plain_errors = cli.global.no_color || !std::io::IsTerminal::is_terminal(&std::io::stderr());

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: Some(e.into()),
            };
            return handle_error(err, verbose, plain_errors);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    let plain_errors = plain_errors || !output.supports_color();

    // ── 5. Run + 6. Error handling ────────────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("vitestrap completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, plain_errors),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    commands::create::execute(cli, config, output)
}

/// Translate a `CliError` into a user message and an exit code.
///
/// Written to stderr so it shows even when stdout is redirected.
fn handle_error(err: CliError, verbose: bool, plain: bool) -> ExitCode {
    err.log();

    let msg = if err.is_cancelled() {
        "\nOperation cancelled. No further steps were run.\n".to_string()
    } else if plain {
        err.format_plain(verbose)
    } else {
        err.format_colored(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
