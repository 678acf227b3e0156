use serde::{Deserialize, Serialize};

/// Role assigned to an authenticated actor for the lifetime of a session.
///
/// The set is closed: the permission matrix in [`crate::matrix`] covers every
/// variant, and role data that fails to parse into one of these variants is
/// treated as zero-privilege by the evaluator rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    Administrator,
    Manager,
    Waitstaff,
    Kitchen,
    Customer,
}

impl Role {
    /// All roles, in matrix order.
    pub const ALL: [Role; 5] = [
        Role::Administrator,
        Role::Manager,
        Role::Waitstaff,
        Role::Kitchen,
        Role::Customer,
    ];

    /// Parse the role name carried by a decoded credential.
    ///
    /// Matching is case-insensitive and accepts the Spanish names the legacy
    /// backend mints alongside the canonical ones. Unknown or legacy names
    /// yield `None`, which the evaluator maps to an all-deny matrix row.
    pub fn from_name(name: &str) -> Option<Role> {
        match name.trim().to_ascii_lowercase().as_str() {
            "administrator" | "administrador" | "admin" => Some(Role::Administrator),
            "manager" | "gerente" => Some(Role::Manager),
            "waitstaff" | "mesero" => Some(Role::Waitstaff),
            "kitchen" | "cocinero" | "cocina" => Some(Role::Kitchen),
            "customer" | "cliente" => Some(Role::Customer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Manager => "manager",
            Role::Waitstaff => "waitstaff",
            Role::Kitchen => "kitchen",
            Role::Customer => "customer",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
