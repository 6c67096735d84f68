//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the whole scaffolding workflow:
//! 1. Validate the request and compose the layout (pure, domain)
//! 2. Write the layout to the filesystem
//! 3. Report the outcome as a [`StatusMessage`]
//!
//! Expected failures never surface as `Err`: validation problems and I/O
//! errors both become failure statuses. Nothing is rolled back; directories
//! created before a failed write stay on disk.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        PreferenceStore,
        ports::Filesystem,
        status::{FailureKind, Outcome, StatusMessage},
    },
    domain::{FsEntry, ResourceKind, ResourceLayout, ResourceRequest, plan_layout},
    error::ForgeResult,
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use fxforge_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(filesystem); // impl Filesystem
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Scaffold `request` under the base directory the store holds for its kind.
    pub fn create(&self, request: &ResourceRequest, preferences: &PreferenceStore) -> StatusMessage {
        let base_dir = preferences.dir_for(request.kind());
        self.create_in(request, base_dir.as_deref())
    }

    /// Scaffold `request` under `base_dir`, dispatching on its kind.
    pub fn create_in(&self, request: &ResourceRequest, base_dir: Option<&Path>) -> StatusMessage {
        match request.kind() {
            ResourceKind::Map => self.create_map_resource(request, base_dir),
            ResourceKind::Script => self.create_script_resource(request, base_dir),
        }
    }

    /// Create `<base>/<name>/stream` and a map manifest.
    pub fn create_map_resource(
        &self,
        request: &ResourceRequest,
        base_dir: Option<&Path>,
    ) -> StatusMessage {
        self.scaffold(ResourceKind::Map, request, base_dir)
    }

    /// Create `client`, `server`, `shared`, a script manifest and
    /// `shared/config.lua` under `<base>/<name>`.
    pub fn create_script_resource(
        &self,
        request: &ResourceRequest,
        base_dir: Option<&Path>,
    ) -> StatusMessage {
        self.scaffold(ResourceKind::Script, request, base_dir)
    }

    /// Validate and compose the layout without touching the filesystem.
    pub fn plan(
        &self,
        kind: ResourceKind,
        request: &ResourceRequest,
        base_dir: Option<&Path>,
    ) -> ForgeResult<ResourceLayout> {
        Ok(plan_layout(kind, request, base_dir)?)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    #[instrument(
        skip_all,
        fields(
            kind = %kind,
            resource = %request.name(),
        )
    )]
    fn scaffold(
        &self,
        kind: ResourceKind,
        request: &ResourceRequest,
        base_dir: Option<&Path>,
    ) -> StatusMessage {
        let label = kind.label();

        let layout = match plan_layout(kind, request, base_dir) {
            Ok(layout) => layout,
            Err(e) => {
                warn!(error = %e, "Request rejected");
                return StatusMessage::failure(FailureKind::Validation, e.to_string());
            }
        };

        let root = layout.root();
        let existed = self.filesystem.exists(root);
        if existed {
            warn!(path = %root.display(), "Resource folder exists, files will be overwritten");
        }

        match self.write_layout(&layout) {
            Ok(()) if existed => {
                info!(path = %root.display(), "Resource re-scaffolded");
                StatusMessage::success(
                    Outcome::Overwritten,
                    format!(
                        "{label} Resource Updated (existing manifest overwritten):\n{}",
                        root.display()
                    ),
                )
            }
            Ok(()) => {
                info!(path = %root.display(), "Resource created");
                StatusMessage::success(
                    Outcome::Created,
                    format!("{label} Resource Created:\n{}", root.display()),
                )
            }
            Err(e) => {
                warn!(error = %e, "Write failed, partial output left in place");
                StatusMessage::failure(
                    FailureKind::FileSystem,
                    format!("Failed to create {label} resource: {e}"),
                )
            }
        }
    }

    /// Write every entry in order. Stops at the first error.
    fn write_layout(&self, layout: &ResourceLayout) -> ForgeResult<()> {
        self.filesystem.create_dir_all(layout.root())?;

        for entry in layout.entries() {
            let path = layout.root().join(entry.path());
            match entry {
                FsEntry::Directory(_) => {
                    self.filesystem.create_dir_all(&path)?;
                }
                FsEntry::File(file) => {
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }

        Ok(())
    }
}
