//! The role→capability matrix.
//!
//! # Invariants
//! - Every role has a complete row (one `bool` per capability) — partial rows
//!   cannot exist because [`CapabilityRow`] has a named field per capability.
//! - Rows are `'static` consts, defined once and immutable for the process
//!   lifetime, so concurrent readers never observe a partially written table.

use crate::Capability;
use crate::Role;

/// One matrix row: the full capability set granted to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityRow {
    pub view_tables: bool,
    pub view_reservations: bool,
    pub view_products: bool,
    pub view_users: bool,
    pub view_reports: bool,
    pub manage_accounts: bool,
}

impl CapabilityRow {
    /// The zero-privilege row, used for role data absent from the matrix.
    pub const DENY_ALL: CapabilityRow = CapabilityRow {
        view_tables: false,
        view_reservations: false,
        view_products: false,
        view_users: false,
        view_reports: false,
        manage_accounts: false,
    };

    pub const fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::ViewTables => self.view_tables,
            Capability::ViewReservations => self.view_reservations,
            Capability::ViewProducts => self.view_products,
            Capability::ViewUsers => self.view_users,
            Capability::ViewReports => self.view_reports,
            Capability::ManageAccounts => self.manage_accounts,
        }
    }
}

const ADMINISTRATOR: CapabilityRow = CapabilityRow {
    view_tables: true,
    view_reservations: true,
    view_products: true,
    view_users: true,
    view_reports: true,
    manage_accounts: true,
};

const MANAGER: CapabilityRow = CapabilityRow {
    view_tables: true,
    view_reservations: true,
    view_products: true,
    view_users: true,
    view_reports: true,
    manage_accounts: false,
};

const WAITSTAFF: CapabilityRow = CapabilityRow {
    view_tables: true,
    view_reservations: true,
    view_products: true,
    view_users: false,
    view_reports: false,
    manage_accounts: false,
};

const KITCHEN: CapabilityRow = CapabilityRow {
    view_tables: false,
    view_reservations: false,
    view_products: true,
    view_users: false,
    view_reports: false,
    manage_accounts: false,
};

const CUSTOMER: CapabilityRow = CapabilityRow {
    view_tables: false,
    view_reservations: true,
    view_products: false,
    view_users: false,
    view_reports: false,
    manage_accounts: false,
};

/// The matrix row for a role. Total over [`Role`] by construction.
pub const fn row_for(role: Role) -> &'static CapabilityRow {
    match role {
        Role::Administrator => &ADMINISTRATOR,
        Role::Manager => &MANAGER,
        Role::Waitstaff => &WAITSTAFF,
        Role::Kitchen => &KITCHEN,
        Role::Customer => &CUSTOMER,
    }
}
