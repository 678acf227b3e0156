use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Role;

/// Identity of an authenticated principal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(Uuid);

impl PrincipalId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PrincipalId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for PrincipalId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for PrincipalId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// The already-resolved view of the session/identity collaborator.
///
/// Credential decoding and validation happen upstream; by the time the core
/// runs, identity is a plain value. The role travels as the name string the
/// credential carried so that legacy role data degrades to zero-privilege
/// instead of failing the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    principal: Option<PrincipalId>,
    role_name: Option<String>,
    signed_in_at: Option<DateTime<Utc>>,
}

impl SessionState {
    /// A session with no authenticated actor.
    pub fn anonymous() -> Self {
        Self {
            principal: None,
            role_name: None,
            signed_in_at: None,
        }
    }

    /// A signed-in session carrying the role name from the decoded credential.
    pub fn signed_in(principal: PrincipalId, role_name: impl Into<String>) -> Self {
        Self {
            principal: Some(principal),
            role_name: Some(role_name.into()),
            signed_in_at: Some(Utc::now()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    pub fn principal(&self) -> Option<PrincipalId> {
        self.principal
    }

    pub fn role_name(&self) -> Option<&str> {
        self.role_name.as_deref()
    }

    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        self.signed_in_at
    }

    /// The session's role, if the stored role name parses into the closed
    /// role set. Legacy or unknown names resolve to `None` and evaluate as
    /// zero-privilege downstream.
    pub fn current_role(&self) -> Option<Role> {
        let name = self.role_name.as_deref()?;
        let role = Role::from_name(name);
        if role.is_none() {
            tracing::debug!(role_name = name, "session carries an unrecognized role name");
        }
        role
    }

    /// Whether the session's role is a member of `roles`.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        match self.current_role() {
            Some(role) => roles.contains(&role),
            None => false,
        }
    }
}
