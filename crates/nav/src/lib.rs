//! `comanda-nav` — route catalog, route guard, and menu builder.
//!
//! This crate owns the navigation side of authorization: a validated,
//! read-only catalog of route entries, a re-entrant guard evaluated before
//! every protected navigation, and a menu builder that derives the visible
//! navigation tree from the same permission data the guard consults. Both
//! decision paths classify routes through `comanda-auth`'s single module
//! table, so guard decisions and menu visibility cannot drift apart.

pub mod catalog;
pub mod guard;
pub mod menu;

pub use catalog::{CatalogError, MenuMeta, RouteCatalog, RouteEntry};
pub use guard::{GuardDecision, SIGN_IN_ROUTE, evaluate};
pub use menu::{MenuChild, MenuNode, build_menu};
