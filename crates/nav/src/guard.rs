//! The route guard: one decision per navigation attempt.
//!
//! Checks run in a fixed precedence order and short-circuit on the first
//! failure: authentication, explicit role allowlist, explicit capability,
//! module classification. Every denial redirects to the sign-in route — the
//! guard deliberately does not distinguish "not authenticated" from "not
//! authorized", so the redirect target leaks nothing about which roles or
//! capabilities exist.

use serde::Serialize;

use comanda_auth::{SessionState, classify_path, evaluator};

use crate::catalog::RouteEntry;

/// Redirect target for every denial.
pub const SIGN_IN_ROUTE: &str = "/login";

/// Outcome of evaluating one navigation attempt. Transient: produced per
/// attempt, never stored or reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardDecision {
    pub allowed: bool,
    pub redirect_to: Option<String>,
}

impl GuardDecision {
    fn allow() -> Self {
        Self {
            allowed: true,
            redirect_to: None,
        }
    }

    fn deny() -> Self {
        Self {
            allowed: false,
            redirect_to: Some(SIGN_IN_ROUTE.to_string()),
        }
    }
}

/// Decide whether the session may enter `entry`.
///
/// Re-entrant and side-effect free: nothing is memoized across attempts and
/// neither the session nor the catalog is mutated. Paths that match no module
/// in the classification table are allowed by default once the explicit
/// checks pass; classified paths are closed by default.
pub fn evaluate(entry: &RouteEntry, session: &SessionState) -> GuardDecision {
    if !session.is_authenticated() {
        tracing::debug!(path = %entry.path, "navigation denied: no active session");
        return GuardDecision::deny();
    }

    if let Some(required_roles) = &entry.required_roles {
        if !session.has_any_role(required_roles) {
            tracing::debug!(path = %entry.path, "navigation denied: role not in allowlist");
            return GuardDecision::deny();
        }
    }

    let role = session.current_role();

    if let Some(capability) = entry.required_capability {
        if !evaluator::has(role, capability) {
            tracing::debug!(
                path = %entry.path,
                ?capability,
                "navigation denied: required capability not granted"
            );
            return GuardDecision::deny();
        }
    }

    if let Some(capability) = classify_path(&entry.path) {
        if !evaluator::has(role, capability) {
            tracing::debug!(
                path = %entry.path,
                ?capability,
                "navigation denied: module capability not granted"
            );
            return GuardDecision::deny();
        }
    }

    GuardDecision::allow()
}
