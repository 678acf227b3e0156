//! The permission evaluator: the single source of truth for capability
//! decisions, shared by the route guard and the menu builder.
//!
//! All functions here are pure policy checks in the same spirit as a
//! command-boundary `authorize`:
//!
//! - No IO
//! - No panics
//! - Absence of information never grants access: an unknown role or module
//!   resolves to deny, not to an error.

use crate::capability::{Capability, capability_for_module};
use crate::matrix::{CapabilityRow, row_for};
use crate::roles::Role;

/// The matrix row for `role`, or the all-deny row when the session carried no
/// recognizable role.
pub fn capabilities_for(role: Option<Role>) -> &'static CapabilityRow {
    match role {
        Some(role) => row_for(role),
        None => &CapabilityRow::DENY_ALL,
    }
}

/// Whether `role` is granted `capability`.
pub fn has(role: Option<Role>, capability: Capability) -> bool {
    capabilities_for(role).allows(capability)
}

/// Whether `role` may enter the module named `module`.
///
/// Resolves the module name through the classification table and delegates to
/// [`has`]; unknown module names deny.
pub fn module_access(role: Option<Role>, module: &str) -> bool {
    match capability_for_module(module) {
        Some(capability) => has(role, capability),
        None => false,
    }
}
