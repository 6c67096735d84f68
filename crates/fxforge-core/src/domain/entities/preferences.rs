use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ResourceKind;

/// The two persisted output directories.
///
/// Serialized as `{ "scriptDir": ..., "mloDir": ... }`. Paths are used
/// verbatim; nothing checks that they exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub script_dir: Option<PathBuf>,
    #[serde(default)]
    pub mlo_dir: Option<PathBuf>,
}

impl Preferences {
    /// Base directory configured for `kind`.
    ///
    /// An empty path counts as unset.
    pub fn dir_for(&self, kind: ResourceKind) -> Option<&Path> {
        let dir = match kind {
            ResourceKind::Script => self.script_dir.as_deref(),
            ResourceKind::Map => self.mlo_dir.as_deref(),
        };
        dir.filter(|p| !p.as_os_str().is_empty())
    }

    pub fn set_dir(&mut self, kind: ResourceKind, path: impl Into<PathBuf>) {
        let path = Some(path.into());
        match kind {
            ResourceKind::Script => self.script_dir = path,
            ResourceKind::Map => self.mlo_dir = path,
        }
    }

    pub fn with_dir(mut self, kind: ResourceKind, path: impl Into<PathBuf>) -> Self {
        self.set_dir(kind, path);
        self
    }

    pub fn is_empty(&self) -> bool {
        ResourceKind::ALL.iter().all(|k| self.dir_for(*k).is_none())
    }
}
