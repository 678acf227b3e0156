//! The declarative route catalog.
//!
//! The catalog is authored elsewhere (typically as JSON shipped with the
//! app); this module only reads it. Construction validates the authoring
//! errors that must fail fast at startup — an entry without a path, two
//! entries claiming the same path — while tolerating the ones navigation can
//! recover from: a dangling `parent_module` reference is left in place here
//! and dropped (with a diagnostic) by the menu builder.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use comanda_auth::{Capability, Role};

/// Menu metadata attached to a route entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuMeta {
    pub label: String,
    pub icon: String,
    /// Position among top-level entries; entries without one sort last.
    #[serde(default)]
    pub display_order: Option<u32>,
    /// Whether the entry appears in the navigation menu at all.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Whether the module's menu content lives in submenu items. A node that
    /// declares this but ends up with no accessible children is dropped from
    /// the built menu entirely.
    #[serde(default)]
    pub has_submenu: bool,
}

fn default_visible() -> bool {
    true
}

/// One navigable route plus its menu metadata and access requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    /// Route path, unique within the catalog and never empty.
    pub path: String,
    #[serde(default)]
    pub menu: Option<MenuMeta>,
    /// Path of the top-level module this entry nests under, if any.
    #[serde(default)]
    pub parent_module: Option<String>,
    /// Explicit role allowlist checked by the guard before any capability.
    #[serde(default)]
    pub required_roles: Option<Vec<Role>>,
    /// Explicit capability requirement checked by the guard.
    #[serde(default)]
    pub required_capability: Option<Capability>,
}

impl RouteEntry {
    /// A bare route with no menu presence and no explicit requirements.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            menu: None,
            parent_module: None,
            required_roles: None,
            required_capability: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    /// An entry was authored without a path. Fatal at load time.
    #[error("route entry at index {index} has an empty path")]
    EmptyPath { index: usize },

    /// Two entries claim the same path. Fatal at load time.
    #[error("duplicate route path '{path}'")]
    DuplicatePath { path: String },

    /// The catalog source did not parse.
    #[error("malformed route catalog: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A validated, ordered, read-only sequence of route entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCatalog {
    entries: Vec<RouteEntry>,
}

impl RouteCatalog {
    /// Validate and seal a catalog. Entry order is preserved; it is the tie
    /// breaker for menu ordering.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.path.is_empty() {
                return Err(CatalogError::EmptyPath { index });
            }
            if !seen.insert(entry.path.as_str()) {
                return Err(CatalogError::DuplicatePath {
                    path: entry.path.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Parse a JSON catalog, then validate it.
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let entries: Vec<RouteEntry> = serde_json::from_str(source)?;
        Self::new(entries)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn find(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }
}
