//! Manifest generation and layout planning.
//!
//! The manifest text is read by the game's resource loader, so both
//! templates must stay byte-for-byte stable. Field values are interpolated
//! verbatim: no quoting, no escaping.

use std::path::{Component, Path, PathBuf};

use crate::domain::{
    DomainValidator as validator,
    entities::{ResourceLayout, ResourceRequest},
    error::DomainError,
    value_objects::ResourceKind,
};

pub const MANIFEST_FILE: &str = "fxmanifest.lua";
pub const CONFIG_FILE: &str = "shared/config.lua";

pub const FX_VERSION: &str = "cerulean";
pub const GAME: &str = "gta5";
pub const RESOURCE_VERSION: &str = "1.0.0";

/// Default `shared/config.lua`: an empty configuration table.
pub const DEFAULT_CONFIG: &str = "Config = {}\n";

/// Render the manifest for `kind`.
pub fn render_manifest(kind: ResourceKind, request: &ResourceRequest) -> String {
    match kind {
        ResourceKind::Map => map_manifest(request),
        ResourceKind::Script => script_manifest(request),
    }
}

/// Manifest of a map resource.
pub fn map_manifest(request: &ResourceRequest) -> String {
    format!(
        "{header}\
         \n\
         this_is_a_map 'yes'\n",
        header = metadata_header(request),
    )
}

/// Manifest of a script resource.
pub fn script_manifest(request: &ResourceRequest) -> String {
    format!(
        "{header}\
         \n\
         -- Shared config\n\
         shared_script '{CONFIG_FILE}'\n\
         \n\
         -- Client Scripts\n\
         client_scripts {{\n\
         \x20   'client/*.lua'\n\
         }}\n\
         \n\
         -- Server Scripts\n\
         server_scripts {{\n\
         \x20   'server/*.lua'\n\
         }}\n",
        header = metadata_header(request),
    )
}

fn metadata_header(request: &ResourceRequest) -> String {
    format!(
        "fx_version '{FX_VERSION}'\n\
         game '{GAME}'\n\
         \n\
         -- Resource metadata\n\
         name '{name}'\n\
         description '{description}'\n\
         author '{author}'\n\
         version '{RESOURCE_VERSION}'\n",
        name = request.name(),
        description = request.description(),
        author = request.author(),
    )
}

/// Validate `request` and compose the layout it materializes under `base_dir`.
///
/// Pure: touches no filesystem. The name check runs before the base
/// directory check.
pub fn plan_layout(
    kind: ResourceKind,
    request: &ResourceRequest,
    base_dir: Option<&Path>,
) -> Result<ResourceLayout, DomainError> {
    validator::validate_request(request)?;
    let base = base_dir
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(DomainError::OutputDirNotSet { kind })?;

    let mut layout = ResourceLayout::new(resource_root(base, request.name()));
    for dir in kind.subdirectories() {
        layout.add_directory(*dir);
    }
    layout.add_file(MANIFEST_FILE, render_manifest(kind, request));
    if kind == ResourceKind::Script {
        layout.add_file(CONFIG_FILE, DEFAULT_CONFIG.to_string());
    }

    validator::validate_layout(&layout)?;
    Ok(layout)
}

/// `base/name`, always nested under `base`.
///
/// A root or drive prefix in `name` is dropped instead of replacing `base`,
/// so `/srv` + `/tmp/shop` gives `/srv/tmp/shop`.
pub fn resource_root(base: &Path, name: &str) -> PathBuf {
    let mut root = base.to_path_buf();
    for component in Path::new(name).components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
            part => root.push(part),
        }
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn shop(kind: ResourceKind) -> ResourceRequest {
        ResourceRequest::new(kind, "myshop")
            .with_description("Test Shop")
            .with_author("Alice")
    }

    #[test]
    fn map_manifest_matches_loader_format() {
        let expected = "fx_version 'cerulean'\n\
                        game 'gta5'\n\
                        \n\
                        -- Resource metadata\n\
                        name 'myshop'\n\
                        description 'Test Shop'\n\
                        author 'Alice'\n\
                        version '1.0.0'\n\
                        \n\
                        this_is_a_map 'yes'\n";
        assert_eq!(map_manifest(&shop(ResourceKind::Map)), expected);
    }

    #[test]
    fn script_manifest_matches_loader_format() {
        let expected = "fx_version 'cerulean'\n\
                        game 'gta5'\n\
                        \n\
                        -- Resource metadata\n\
                        name 'myshop'\n\
                        description 'Test Shop'\n\
                        author 'Alice'\n\
                        version '1.0.0'\n\
                        \n\
                        -- Shared config\n\
                        shared_script 'shared/config.lua'\n\
                        \n\
                        -- Client Scripts\n\
                        client_scripts {\n    'client/*.lua'\n}\n\
                        \n\
                        -- Server Scripts\n\
                        server_scripts {\n    'server/*.lua'\n}\n";
        assert_eq!(script_manifest(&shop(ResourceKind::Script)), expected);
    }

    #[test]
    fn map_manifest_has_no_script_blocks() {
        let manifest = map_manifest(&shop(ResourceKind::Map));
        assert!(manifest.lines().any(|l| l == "description 'Test Shop'"));
        assert!(manifest.lines().any(|l| l == "author 'Alice'"));
        assert!(manifest.lines().any(|l| l == "this_is_a_map 'yes'"));
        assert!(!manifest.contains("client_scripts"));
        assert!(!manifest.contains("server_scripts"));
    }

    #[test]
    fn values_are_interpolated_verbatim() {
        let req = ResourceRequest::new(ResourceKind::Map, "o'neil")
            .with_description("it's {raw}")
            .with_author("");
        let manifest = map_manifest(&req);
        assert!(manifest.contains("name 'o'neil'\n"));
        assert!(manifest.contains("description 'it's {raw}'\n"));
        assert!(manifest.contains("author ''\n"));
    }

    #[test]
    fn script_layout_has_three_dirs_and_two_files() {
        let layout =
            plan_layout(ResourceKind::Script, &shop(ResourceKind::Script), Some(Path::new("/srv")))
                .unwrap();

        assert_eq!(layout.root(), Path::new("/srv/myshop"));
        let dirs: Vec<_> = layout.directories().map(|d| d.path.clone()).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("client"),
                PathBuf::from("server"),
                PathBuf::from("shared")
            ]
        );
        let files: Vec<_> = layout.files().map(|f| f.path.clone()).collect();
        assert_eq!(
            files,
            vec![PathBuf::from(MANIFEST_FILE), PathBuf::from(CONFIG_FILE)]
        );
        assert_eq!(layout.file(CONFIG_FILE).unwrap().content, "Config = {}\n");
    }

    #[test]
    fn map_layout_has_stream_and_manifest() {
        let layout =
            plan_layout(ResourceKind::Map, &shop(ResourceKind::Map), Some(Path::new("/srv")))
                .unwrap();

        assert_eq!(layout.entry_count(), 2);
        assert!(layout.directories().any(|d| d.path == Path::new("stream")));
        assert!(
            layout
                .file(MANIFEST_FILE)
                .unwrap()
                .content
                .contains("this_is_a_map 'yes'")
        );
    }

    #[test]
    fn absolute_name_stays_under_base() {
        let req = ResourceRequest::new(ResourceKind::Map, "/tmp/escaped");
        let layout = plan_layout(ResourceKind::Map, &req, Some(Path::new("/srv/maps"))).unwrap();

        assert_eq!(layout.root(), Path::new("/srv/maps/tmp/escaped"));
    }

    #[test]
    fn nested_names_are_kept_relative() {
        assert_eq!(
            resource_root(Path::new("/srv"), "vehicles/police"),
            Path::new("/srv/vehicles/police")
        );
        assert_eq!(resource_root(Path::new("/srv"), "//shop"), Path::new("/srv/shop"));
        assert_eq!(
            resource_root(Path::new("/srv"), "./shop").to_str(),
            Some("/srv/shop")
        );
    }

    #[cfg(windows)]
    #[test]
    fn drive_prefix_is_dropped() {
        assert_eq!(
            resource_root(Path::new(r"D:
esources"), r"C:\shop"),
            Path::new(r"D:
esources\shop")
        );
    }

    #[test]
    fn empty_name_is_checked_before_base_dir() {
        let req = ResourceRequest::new(ResourceKind::Script, "");
        assert_eq!(
            plan_layout(ResourceKind::Script, &req, None),
            Err(DomainError::EmptyName)
        );
    }

    #[test]
    fn unset_or_empty_base_dir_is_rejected() {
        let req = shop(ResourceKind::Map);
        let expected = Err(DomainError::OutputDirNotSet {
            kind: ResourceKind::Map,
        });
        assert_eq!(plan_layout(ResourceKind::Map, &req, None), expected);
        assert_eq!(
            plan_layout(ResourceKind::Map, &req, Some(Path::new(""))),
            expected
        );
    }
}
