//! Flags that shape how vitestrap talks, not what it builds.

use clap::Args;
use std::path::PathBuf;

/// Logging, color, config-file and output-format flags.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`). Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Warnings and errors
    -v      - Info level (workflow steps)
    -vv     - Debug level (commands, files touched)
    -vvv    - Trace level (every filesystem call)"
    )]
    pub verbose: u8,

    /// Only print errors and the final report.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes. Honours `NO_COLOR`: any non-empty value
    /// other than a falsey one (`0`, `false`, `no`, `off`) disables colour.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read configuration from FILE instead of the per-user config file.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        env = "VITESTRAP_CONFIG",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Colored, with symbols.
    Human,
    /// Plain text without colors.
    Plain,
    /// The run report as JSON on stdout.
    Json,
}
