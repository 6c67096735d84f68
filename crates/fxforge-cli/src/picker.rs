//! Terminal folder picker used by `fxforge dirs pick`.

use std::path::PathBuf;

use dialoguer::{Input, theme::ColorfulTheme};
use tracing::debug;

use fxforge_core::{
    application::{ApplicationError, ports::FolderPicker},
    error::ForgeResult,
};

/// Prompts for an existing directory on the terminal.
///
/// An empty answer counts as a cancellation. Relative answers are resolved
/// against the working directory before they are returned.
pub struct PromptPicker {
    theme: ColorfulTheme,
}

impl PromptPicker {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for PromptPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl FolderPicker for PromptPicker {
    fn pick_folder(&self, title: &str) -> ForgeResult<Option<PathBuf>> {
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(format!("{title} (empty to cancel)"))
            .allow_empty(true)
            .validate_with(|input: &String| validate_answer(input))
            .interact_text()
            .map_err(|e| ApplicationError::PickerFailed {
                reason: e.to_string(),
            })?;

        debug!(answer = %answer, "Folder prompt answered");
        Ok(parse_answer(&answer))
    }
}

fn validate_answer(input: &str) -> Result<(), String> {
    match parse_answer(input) {
        Some(path) if !path.is_dir() => Err(format!("{} is not a directory", path.display())),
        _ => Ok(()),
    }
}

fn parse_answer(input: &str) -> Option<PathBuf> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    // Only fails for an empty path.
    Some(std::path::absolute(input).unwrap_or_else(|_| PathBuf::from(input)))
}
