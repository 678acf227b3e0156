//! `comanda-auth` — pure authorization core for the Comanda front-of-house app.
//!
//! This crate answers exactly one question: *may the current actor see module
//! X?* It holds the closed role set, the compile-time role→capability matrix,
//! the module classification table, and the evaluator that both the route
//! guard and the menu builder (in `comanda-nav`) delegate to. It is
//! intentionally decoupled from credentials, transport, and rendering: the
//! session layer hands it already-resolved identity state, and it never does
//! IO, never panics, and never treats a denial as an error.

pub mod capability;
pub mod evaluator;
pub mod matrix;
pub mod roles;
pub mod session;

pub use capability::{Capability, capability_for_module, classify_path};
pub use evaluator::{capabilities_for, has, module_access};
pub use matrix::{CapabilityRow, row_for};
pub use roles::Role;
pub use session::{PrincipalId, SessionState};
