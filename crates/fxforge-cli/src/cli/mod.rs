//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use fxforge_core::domain::ResourceKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "fxforge",
    bin_name = "fxforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold cerulean/gta5 script and map resources",
    long_about = "fxforge creates resource folders with a ready-to-load \
                  fxmanifest.lua, under per-kind output directories that \
                  are remembered between runs.",
    after_help = "EXAMPLES:\n\
        \x20 fxforge dirs set script ~/server/resources/[scripts]\n\
        \x20 fxforge new script myshop -d \"Test Shop\" -a Alice\n\
        \x20 fxforge new map pillbox --dry-run\n\
        \x20 fxforge completions bash > /usr/share/bash-completion/completions/fxforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new resource.
    #[command(
        visible_alias = "n",
        about = "Create a new resource",
        after_help = "EXAMPLES:\n\
            \x20 fxforge new script myshop --description \"Test Shop\" --author Alice\n\
            \x20 fxforge new map pillbox -a Alice\n\
            \x20 fxforge new mlo pillbox --dry-run"
    )]
    New(NewArgs),

    /// Show or change the output directories.
    #[command(
        about = "Output directory management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 fxforge dirs show\n\
            \x20 fxforge dirs set map /srv/fx/resources/[maps]\n\
            \x20 fxforge dirs pick script"
    )]
    Dirs(DirsCommands),

    /// Initialise an fxforge configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 fxforge init\n\
            \x20 fxforge init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 fxforge completions bash > ~/.local/share/bash-completion/completions/fxforge\n\
            \x20 fxforge completions zsh  > ~/.zfunc/_fxforge\n\
            \x20 fxforge completions fish > ~/.config/fish/completions/fxforge.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the fxforge configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 fxforge config get defaults.author\n\
            \x20 fxforge config list\n\
            \x20 fxforge config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `fxforge new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Resource kind.
    #[arg(value_name = "KIND", value_enum, help = "Resource kind")]
    pub kind: KindArg,

    /// Resource name; used as the folder name and the manifest name.
    #[arg(value_name = "NAME", help = "Resource name")]
    pub name: String,

    /// Manifest description.
    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Manifest description (default: defaults.description)"
    )]
    pub description: Option<String>,

    /// Manifest author.
    #[arg(
        short = 'a',
        long = "author",
        value_name = "NAME",
        help = "Manifest author (default: defaults.author)"
    )]
    pub author: Option<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── dirs ──────────────────────────────────────────────────────────────────────

/// Subcommands for `fxforge dirs`.
#[derive(Debug, Subcommand)]
pub enum DirsCommands {
    /// Print both output directories and the preferences file.
    Show,
    /// Set the output directory for a kind.
    Set {
        /// Resource kind.
        #[arg(value_enum)]
        kind: KindArg,
        /// New output directory; stored verbatim.
        path: PathBuf,
    },
    /// Choose the output directory for a kind interactively.
    Pick {
        /// Resource kind.
        #[arg(value_enum)]
        kind: KindArg,
    },
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `fxforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `fxforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `fxforge config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.author`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Resource kinds as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Script,
    /// Also accepted as `mlo`.
    #[value(alias = "mlo")]
    Map,
}

impl From<KindArg> for ResourceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Script => ResourceKind::Script,
            KindArg::Map => ResourceKind::Map,
        }
    }
}

impl std::fmt::Display for KindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ResourceKind::from(*self))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
