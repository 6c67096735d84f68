//! Everything that can end an `fxforge` invocation unsuccessfully.
//!
//! Failure statuses from the services are shown exactly as produced; other
//! errors get an `Error:` header, a cause chain under `-v`, and hints.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use fxforge_core::{
    application::{FailureKind, StatusMessage},
    error::ForgeError,
};

pub use fxforge_core::error::ErrorCategory as CoreCategory;

/// Result of a command handler.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A service answered with a failure status.
    ///
    /// The message already carries its `❌` marker and is shown verbatim.
    #[error("{message}")]
    Status { message: String, kind: FailureKind },

    /// `config.toml` could not be loaded or a key was unknown.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Raised by `fxforge-core` outside of a status message.
    #[error("{0}")]
    Core(#[from] ForgeError),

    /// Writing to the terminal or to `config.toml` failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Feature not compiled into this build (e.g. `dirs pick` without `interactive`).
    #[error("Feature not available: {feature}")]
    #[cfg_attr(feature = "interactive", allow(dead_code))]
    FeatureNotAvailable { feature: &'static str },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<StatusMessage> for CliError {
    fn from(status: StatusMessage) -> Self {
        let kind = status.failure_kind().unwrap_or(FailureKind::FileSystem);
        CliError::Status {
            message: status.text().to_owned(),
            kind,
        }
    }
}

impl CliError {
    /// Hints printed under the message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Status { kind, .. } => match kind {
                FailureKind::Validation => vec![
                    "Pass a non-empty resource name".into(),
                    "Check the output directories: fxforge dirs show".into(),
                    "Set one with: fxforge dirs set <script|map> <PATH>".into(),
                ],
                FailureKind::FileSystem => vec![
                    "Check permissions on the output directory".into(),
                    "Files written before the failure were left in place".into(),
                ],
                FailureKind::Cancelled => vec!["No changes were made".into()],
                FailureKind::Preferences => vec![
                    "Check that the preferences file is writable: fxforge dirs show".into(),
                ],
                FailureKind::Picker => vec![
                    "The prompt needs an interactive terminal".into(),
                    "Set the directory directly: fxforge dirs set <script|map> <PATH>".into(),
                ],
            },

            Self::ConfigError { message, .. } => vec![
                format!("While loading settings: {message}"),
                "Show the config file location: fxforge config path".into(),
                "Use 'fxforge init' to create a default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("While: {message}"),
                "Check that the target directory is writable".into(),
            ],

            Self::FeatureNotAvailable { feature } => vec![
                format!("This build was compiled without the '{feature}' feature"),
                format!("Install with the feature enabled: cargo install fxforge-cli --features {feature}"),
                "Or set the directory directly: fxforge dirs set <script|map> <PATH>".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Status { kind, .. } => match kind {
                FailureKind::Validation | FailureKind::Cancelled | FailureKind::Picker => {
                    ErrorCategory::UserError
                }
                FailureKind::FileSystem => ErrorCategory::Internal,
                FailureKind::Preferences => ErrorCategory::Configuration,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
            Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
        }
    }

    /// 2 for user mistakes, 4 for configuration, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        if let Self::Status { message, .. } = self {
            output.push_str(&format!("{}\n", message.red()));
        } else {
            output.push_str(&format!(
                "\n{} {}\n\n",
                "✗".red().bold(),
                "Error:".red().bold()
            ));
            output.push_str(&format!("  {}\n", self.to_string().red()));
        }

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        if let Self::Status { message, .. } = self {
            out.push_str(&format!("{message}\n"));
        } else {
            out.push_str(&format!("\nError: {}\n", self));
        }

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing name or directory, cancelled or impossible pick.
    UserError,
    /// Unreadable config, unsaveable preferences.
    Configuration,
    /// File-system and terminal failures.
    Internal,
}

/// Attach a message to an I/O failure, `anyhow::Context` style.
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use fxforge_core::domain::{DomainError, ResourceKind};

    fn status_error(kind: FailureKind) -> CliError {
        CliError::from(StatusMessage::failure(kind, "Resource name required."))
    }

    #[test]
    fn validation_status_points_at_dirs() {
        let err = status_error(FailureKind::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("fxforge dirs")));
    }

    #[test]
    fn missing_feature_suggests_dirs_set() {
        let err = CliError::FeatureNotAvailable {
            feature: "interactive",
        };
        assert!(err.suggestions().iter().any(|s| s.contains("dirs set")));
    }

    #[test]
    fn core_suggestions_are_forwarded() {
        let err = CliError::Core(ForgeError::from(DomainError::OutputDirNotSet {
            kind: ResourceKind::Map,
        }));
        assert_eq!(
            err.suggestions(),
            ForgeError::from(DomainError::OutputDirNotSet {
                kind: ResourceKind::Map
            })
            .suggestions()
        );
    }

    #[test]
    fn exit_code_user_error() {
        assert_eq!(status_error(FailureKind::Validation).exit_code(), 2);
        assert_eq!(status_error(FailureKind::Cancelled).exit_code(), 2);
        assert_eq!(status_error(FailureKind::Picker).exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
        assert_eq!(status_error(FailureKind::Preferences).exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
        assert_eq!(status_error(FailureKind::FileSystem).exit_code(), 1);
    }

    #[test]
    fn status_is_printed_verbatim() {
        let s = status_error(FailureKind::Validation).format_plain(false);
        assert!(s.starts_with("❌ Resource name required.\n"));
        assert!(!s.contains("Error:"));
    }

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::ConfigError {
            message: "bad".into(),
            source: None,
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_and_omits_hint() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
