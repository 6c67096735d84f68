//! Implementation of the `fxforge new` command.
//!
//! Responsibility: translate CLI arguments into a `ResourceRequest`, call the
//! core scaffold service, and display the resulting status. No business
//! logic lives here.

use tracing::{debug, instrument};

use fxforge_adapters::LocalFilesystem;
use fxforge_core::{
    application::{FailureKind, ScaffoldService, StatusMessage},
    domain::{FsEntry, ResourceKind, ResourceLayout, ResourceRequest, manifest::MANIFEST_FILE},
};

use crate::{
    cli::NewArgs,
    commands::{open_preferences, report},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `fxforge new` command.
///
/// 1. Build the request, filling author/description from config defaults
/// 2. Resolve the base directory from the preference store
/// 3. `--dry-run`: print the planned layout and stop
/// 4. Scaffold and print the status verbatim
#[instrument(skip_all, fields(kind = %args.kind, resource = %args.name))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let kind = ResourceKind::from(args.kind);
    let request = build_request(kind, args.name, args.description, args.author, &config);
    let preferences = open_preferences(&config);
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    debug!(
        author = request.author(),
        description = request.description(),
        "Request resolved"
    );

    if args.dry_run {
        let base_dir = preferences.dir_for(kind);
        return match service.plan(kind, &request, base_dir.as_deref()) {
            Ok(layout) => show_plan(&layout, &output),
            Err(e) => Err(StatusMessage::failure(FailureKind::Validation, e.to_string()).into()),
        };
    }

    report(service.create(&request, &preferences), &output)
}

/// Flags win over config defaults; both missing means an empty string.
fn build_request(
    kind: ResourceKind,
    name: String,
    description: Option<String>,
    author: Option<String>,
    config: &AppConfig,
) -> ResourceRequest {
    let description = description
        .or_else(|| config.defaults.description.clone())
        .unwrap_or_default();
    let author = author
        .or_else(|| config.defaults.author.clone())
        .unwrap_or_default();

    ResourceRequest::new(kind, name)
        .with_description(description)
        .with_author(author)
}

fn show_plan(layout: &ResourceLayout, out: &OutputManager) -> CliResult<()> {
    let root = layout.root();

    if out.is_json() {
        let entries: Vec<String> = layout
            .entries()
            .iter()
            .map(|e| e.path().display().to_string())
            .collect();
        out.json(&serde_json::json!({
            "dryRun": true,
            "root": root,
            "exists": root.exists(),
            "entries": entries,
        }))?;
        return Ok(());
    }

    out.header(&format!("Dry run: would create {}", root.display()))?;
    if root.exists() {
        out.warning(&format!(
            "{} already exists; its {MANIFEST_FILE} would be overwritten",
            root.display()
        ))?;
    }

    // Entry paths are relative to the root.
    for entry in layout.entries() {
        match entry {
            FsEntry::Directory(dir) => out.print(&format!("  {}/", dir.path.display()))?,
            FsEntry::File(file) => out.print(&format!(
                "  {}  ({} bytes)",
                file.path.display(),
                file.size()
            ))?,
        }
    }

    if let Some(manifest) = layout.file(MANIFEST_FILE) {
        out.print("")?;
        out.print(&manifest.content)?;
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
