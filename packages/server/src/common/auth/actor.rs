use serde::{Deserialize, Serialize};

use crate::common::entity_ids::MemberId;

/// Role of whoever issued a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Anonymous,
    Member,
    Editor,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Anonymous => write!(f, "anonymous"),
            Role::Member => write!(f, "member"),
            Role::Editor => write!(f, "editor"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "anonymous" | "guest" => Ok(Role::Anonymous),
            "member" | "user" => Ok(Role::Member),
            "editor" => Ok(Role::Editor),
            "admin" => Ok(Role::Admin),
            other => Err(anyhow::anyhow!("Invalid role: {}", other)),
        }
    }
}

/// Caller context passed explicitly into every catalog query.
///
/// Built per request at the edge (middleware, CLI) and never read from
/// process-wide state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    member_id: Option<MemberId>,
    role: Role,
}

impl Actor {
    pub fn anonymous() -> Self {
        Self {
            member_id: None,
            role: Role::Anonymous,
        }
    }

    /// An identified caller. `Role::Anonymous` is upgraded to `Role::Member`
    /// since a member id is present.
    pub fn member(member_id: MemberId, role: Role) -> Self {
        let role = match role {
            Role::Anonymous => Role::Member,
            other => other,
        };
        Self {
            member_id: Some(member_id),
            role,
        }
    }

    /// Local tooling (CLI, seeding) acting with full rights.
    pub fn system() -> Self {
        Self {
            member_id: None,
            role: Role::Admin,
        }
    }

    pub fn member_id(&self) -> Option<MemberId> {
        self.member_id
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::anonymous()
    }
}
