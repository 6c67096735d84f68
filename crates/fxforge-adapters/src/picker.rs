//! Non-interactive folder picker.

use std::path::PathBuf;

use fxforge_core::{application::ports::FolderPicker, error::ForgeResult};
use tracing::debug;

/// Picker that answers every prompt with a preset result.
///
/// Used when the folder comes from somewhere other than a prompt (a CLI
/// argument, a test).
#[derive(Debug, Clone, Default)]
pub struct FixedPicker {
    answer: Option<PathBuf>,
}

impl FixedPicker {
    /// Always choose `path`.
    pub fn choosing(path: impl Into<PathBuf>) -> Self {
        Self {
            answer: Some(path.into()),
        }
    }

    /// Always behave as if the user cancelled.
    pub fn cancelling() -> Self {
        Self { answer: None }
    }
}

impl FolderPicker for FixedPicker {
    fn pick_folder(&self, title: &str) -> ForgeResult<Option<PathBuf>> {
        debug!(title, answer = ?self.answer, "Fixed folder pick");
        Ok(self.answer.clone())
    }
}
