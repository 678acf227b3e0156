//! The menu builder: derives the navigable menu tree from the route catalog.
//!
//! Construction is two passes over the catalog. Assembly builds the full
//! two-level tree in deterministic order; pruning removes everything the
//! session's role may not see, using the same module classification the route
//! guard uses. The tree is rebuilt wholesale on every call — identity or
//! catalog changes never mutate a previously returned tree.
//!
//! # Invariants
//! - Identical catalog and session yield structurally identical output.
//! - A returned node with `has_children` set always has a non-empty
//!   `children` sequence.
//! - An anonymous session gets an empty menu.

use serde::Serialize;

use comanda_auth::{Role, SessionState, classify_path, evaluator};

use crate::catalog::{MenuMeta, RouteCatalog, RouteEntry};

/// Sort key assigned to entries without an explicit display order, so they
/// sort after every ordered entry.
const ORDER_SENTINEL: u32 = u32::MAX;

/// A submenu item. Children keep catalog encounter order; they are never
/// independently reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuChild {
    pub label: String,
    pub target_route: String,
}

/// One top-level entry of the built menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    /// The route path, unique within the menu.
    pub id: String,
    pub label: String,
    pub icon: String,
    pub target_route: String,
    /// Declared by the catalog: the module's content lives in its submenu.
    pub has_children: bool,
    pub children: Vec<MenuChild>,
}

/// Build the menu the session is allowed to see.
pub fn build_menu(catalog: &RouteCatalog, session: &SessionState) -> Vec<MenuNode> {
    let assembled = assemble(catalog);
    if !session.is_authenticated() {
        return Vec::new();
    }
    prune(assembled, session.current_role())
}

/// Pass 1: assemble the full two-level tree in deterministic order.
fn assemble(catalog: &RouteCatalog) -> Vec<MenuNode> {
    let visible: Vec<(&RouteEntry, &MenuMeta)> = catalog
        .entries()
        .iter()
        .filter_map(|entry| entry.menu.as_ref().map(|meta| (entry, meta)))
        .filter(|(entry, meta)| meta.visible && !entry.path.is_empty())
        .collect();

    // Top-level nodes first, keyed by path, in catalog order.
    let mut nodes: Vec<(u32, MenuNode)> = visible
        .iter()
        .filter(|(entry, _)| entry.parent_module.is_none())
        .map(|(entry, meta)| {
            let order = meta.display_order.unwrap_or(ORDER_SENTINEL);
            let node = MenuNode {
                id: entry.path.clone(),
                label: meta.label.clone(),
                icon: meta.icon.clone(),
                target_route: entry.path.clone(),
                has_children: meta.has_submenu,
                children: Vec::new(),
            };
            (order, node)
        })
        .collect();

    // Attach children to their parent by path. A dangling parent reference
    // is a recoverable authoring defect: drop the child, keep the menu.
    for (entry, meta) in &visible {
        let Some(parent) = entry.parent_module.as_deref() else {
            continue;
        };
        match nodes.iter_mut().find(|(_, node)| node.id == parent) {
            Some((_, node)) => node.children.push(MenuChild {
                label: meta.label.clone(),
                target_route: entry.path.clone(),
            }),
            None => tracing::warn!(
                child = %entry.path,
                parent,
                "menu entry references a parent module not present in the catalog; dropping it"
            ),
        }
    }

    // Stable sort: explicit orders ascending, unordered entries last, ties
    // keep catalog order.
    nodes.sort_by_key(|(order, _)| *order);
    nodes.into_iter().map(|(_, node)| node).collect()
}

/// Pass 2: prune the assembled tree down to what the role may see.
fn prune(nodes: Vec<MenuNode>, role: Option<Role>) -> Vec<MenuNode> {
    nodes
        .into_iter()
        .filter_map(|mut node| {
            // Children first, mirroring the guard's path classification per
            // submenu item. Unclassified targets stay, like the guard's
            // open-by-default handling of unclassified routes.
            node.children.retain(|child| match classify_path(&child.target_route) {
                Some(capability) => evaluator::has(role, capability),
                None => true,
            });

            // A module that declares submenu content but retains none of it
            // is hidden outright, even when its own capability is granted.
            if node.has_children && node.children.is_empty() {
                return None;
            }

            // Then the module-level check on the node itself.
            match classify_path(&node.target_route) {
                Some(capability) if !evaluator::has(role, capability) => None,
                _ => Some(node),
            }
        })
        .collect()
}
