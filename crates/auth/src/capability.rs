use serde::{Deserialize, Serialize};

/// Named boolean permission gating one functional module.
///
/// Capabilities form a fixed set: one per path-addressable module, plus the
/// aggregate [`Capability::ManageAccounts`], which is never derived from a
/// path and must be demanded explicitly by a route entry. They are not
/// combinable at runtime; only the matrix rows in [`crate::matrix`] grant
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    ViewTables,
    ViewReservations,
    ViewProducts,
    ViewUsers,
    ViewReports,
    ManageAccounts,
}

impl Capability {
    /// All capabilities, in matrix-row order.
    pub const ALL: [Capability; 6] = [
        Capability::ViewTables,
        Capability::ViewReservations,
        Capability::ViewProducts,
        Capability::ViewUsers,
        Capability::ViewReports,
        Capability::ManageAccounts,
    ];
}

/// Module name → gating capability, one row per path-addressable module.
///
/// This is the single classification source for the whole core: the route
/// guard matches request paths against it and the menu builder prunes with
/// it, so the two can never disagree about how a path is gated.
const MODULE_TABLE: &[(&str, Capability)] = &[
    ("mesas", Capability::ViewTables),
    ("reservas", Capability::ViewReservations),
    ("productos", Capability::ViewProducts),
    ("usuarios", Capability::ViewUsers),
    ("reportes", Capability::ViewReports),
];

/// Resolve a human-facing module name to its gating capability.
///
/// Unknown module names resolve to `None`, which the evaluator treats as
/// deny.
pub fn capability_for_module(name: &str) -> Option<Capability> {
    MODULE_TABLE
        .iter()
        .find(|(module, _)| *module == name)
        .map(|(_, capability)| *capability)
}

/// Classify a route path against the module table (substring match, first
/// entry wins).
///
/// Paths matching no entry are unclassified: the guard allows them by default
/// and the menu builder keeps them, a deliberate asymmetry with the
/// closed-by-default handling of classified paths.
pub fn classify_path(path: &str) -> Option<Capability> {
    MODULE_TABLE
        .iter()
        .find(|(module, _)| path.contains(module))
        .map(|(_, capability)| *capability)
}
