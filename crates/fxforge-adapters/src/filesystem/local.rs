//! The real disk, through `std::fs`.

use std::{fmt, fs, io, path::Path};

use tracing::{debug, trace};

use fxforge_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ForgeError, ForgeResult},
};

/// Writes resources where the caller says; never removes anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    CreateDir,
    WriteFile,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Step::CreateDir => "create directory",
            Step::WriteFile => "write file",
        })
    }
}

fn failed(step: Step, path: &Path, err: io::Error) -> ForgeError {
    debug!(%step, path = %path.display(), kind = ?err.kind(), "Filesystem step failed");
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {step}: {err}"),
    }
    .into()
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        trace!(path = %path.display(), "mkdir -p");
        fs::create_dir_all(path).map_err(|e| failed(Step::CreateDir, path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write");
        fs::write(path, content).map_err(|e| failed(Step::WriteFile, path, e))
    }

    /// An unreadable parent counts as absent; the following create reports
    /// the real error.
    fn exists(&self, path: &Path) -> bool {
        path.try_exists().unwrap_or_else(|e| {
            debug!(path = %path.display(), error = %e, "Cannot tell whether path exists");
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_nested_resource_directories() {
        let temp = TempDir::new().unwrap();
        let stream = temp.path().join("pillbox").join("stream");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&stream).unwrap();
        // Already there: still fine.
        fs.create_dir_all(&stream).unwrap();

        assert!(stream.is_dir());
        assert!(fs.exists(&temp.path().join("pillbox")));
    }

    #[test]
    fn manifest_rewrite_replaces_content() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("fxmanifest.lua");
        let fs = LocalFilesystem::new();

        fs.write_file(&manifest, "fx_version 'bodacious'\n").unwrap();
        fs.write_file(&manifest, "fx_version 'cerulean'\n").unwrap();

        assert_eq!(
            std::fs::read_to_string(&manifest).unwrap(),
            "fx_version 'cerulean'\n"
        );
    }

    #[test]
    fn write_into_missing_parent_names_step_and_path() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("shared").join("config.lua");

        let err = LocalFilesystem::new().write_file(&config, "Config = {}\n").unwrap_err();

        let text = err.to_string();
        assert!(text.contains("Failed to write file"), "{text}");
        assert!(text.contains("config.lua"), "{text}");
    }

    #[test]
    fn directory_over_a_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("myshop");
        std::fs::write(&blocker, "not a folder").unwrap();

        let err = LocalFilesystem::new()
            .create_dir_all(&blocker.join("client"))
            .unwrap_err();

        assert!(err.to_string().contains("Failed to create directory"));
    }
}
