//! Domain value objects: ResourceKind.
//!
//! The two resource kinds form a closed set. Everything that differs between
//! them (label, subdirectories, manifest) is decided by matching on the
//! variant, never by a trait object.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ResourceKind ─────────────────────────────────────────────────────────────

/// The kind of resource to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Client/server/shared Lua script bundle.
    Script,
    /// Map bundle ("MLO") with a `stream` folder for assets.
    Map,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Script, ResourceKind::Map];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Map => "map",
        }
    }

    /// Human label used in status messages and picker titles.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Script => "Script",
            Self::Map => "MLO",
        }
    }

    /// Subdirectories created under the resource root, in creation order.
    pub const fn subdirectories(&self) -> &'static [&'static str] {
        match self {
            Self::Script => &["client", "server", "shared"],
            Self::Map => &["stream"],
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "script" | "scripts" => Ok(Self::Script),
            "map" | "mlo" => Ok(Self::Map),
            other => Err(DomainError::UnknownKind(other.to_string())),
        }
    }
}
