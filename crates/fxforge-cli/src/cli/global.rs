//! Flags shared by every `fxforge` subcommand.

use std::path::PathBuf;

use clap::{Args, builder::FalseyValueParser};

/// Flattened into [`super::Cli`]; each flag is `global` so it may follow the
/// subcommand (`fxforge new script shop -v`).
#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more (-v info, -vv debug, -vvv trace)",
        long_help = "Raise the log level written to stderr:
    (none)  - warnings and errors
    -v      - info: resolved directories, created resources
    -vv     - debug: every directory and file written
    -vvv    - trace"
    )]
    pub verbose: u8,

    /// Statuses are still printed on failure.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print nothing on success"
    )]
    pub quiet: bool,

    /// Any non-falsey `NO_COLOR` value counts (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Defaults to `config.toml` in the platform config directory.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        env = "FXFORGE_CONFIG",
        help = "Read settings from FILE (must exist)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "log-file",
        global = true,
        value_name = "FILE",
        help = "Also append uncolored logs to FILE"
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored when stdout is a terminal.
    #[default]
    Auto,
    /// Colored unless `--no-color` is given.
    Human,
    /// No colors.
    Plain,
    /// One JSON document per command.
    Json,
}
