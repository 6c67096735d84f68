//! Human-readable outcome of a service call.
//!
//! Services never raise for expected failures; they return a
//! [`StatusMessage`] whose text the presentation layer shows verbatim.

use std::fmt;

pub const SUCCESS_MARKER: &str = "✅";
pub const FAILURE_MARKER: &str = "❌";

/// Why an operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Empty name or unset output directory. Nothing was written.
    Validation,
    /// Directory creation or a write failed part-way.
    FileSystem,
    /// The user dismissed the folder picker.
    Cancelled,
    /// Preferences could not be persisted.
    Preferences,
    /// The folder picker could not be shown or read (no terminal, I/O).
    Picker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new resource folder was scaffolded.
    Created,
    /// The resource folder already existed; its files were rewritten.
    Overwritten,
    /// A preference was changed and saved.
    Updated,
    Failed(FailureKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    outcome: Outcome,
    text: String,
}

impl StatusMessage {
    /// Success status; `body` is prefixed with the success marker.
    ///
    /// # Panics
    /// Debug-asserts that `outcome` is not a failure.
    pub fn success(outcome: Outcome, body: impl AsRef<str>) -> Self {
        debug_assert!(!matches!(outcome, Outcome::Failed(_)));
        Self {
            outcome,
            text: format!("{SUCCESS_MARKER} {}", body.as_ref()),
        }
    }

    /// Failure status; `body` is prefixed with the failure marker.
    pub fn failure(kind: FailureKind, body: impl AsRef<str>) -> Self {
        Self {
            outcome: Outcome::Failed(kind),
            text: format!("{FAILURE_MARKER} {}", body.as_ref()),
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_success(&self) -> bool {
        !matches!(self.outcome, Outcome::Failed(_))
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self.outcome {
            Outcome::Failed(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
