// ============================================================================
// Onboarding Core - Role & Permission Entities
// File: crates/onboarding-core/src/domain/role.rs
// Description: Authorization data consumed from the identity store
// ============================================================================

use serde::{Deserialize, Serialize};

pub const CAN_VIEW_AGENT: &str = "agent.view";
pub const CAN_REGISTER_AGENT: &str = "agent.register";
pub const CAN_IDENTIFY_AGENT: &str = "agent.identify";
pub const CAN_VIEW_EMPLOYEE: &str = "employee.view";
pub const CAN_CREATE_EMPLOYEE: &str = "employee.create";
pub const CAN_VIEW_PATIENT: &str = "patient.view";
pub const CAN_CREATE_PATIENT: &str = "patient.create";
pub const CAN_IDENTIFY_PATIENT: &str = "patient.identify";
pub const CAN_VIEW_PARTNER: &str = "partner.view";
pub const CAN_VIEW_CONSUMERS: &str = "consumer.view";
pub const CAN_VIEW_ROLE: &str = "role.view";
pub const CAN_CREATE_ROLE: &str = "role.create";
pub const CAN_PROCESS_KYC: &str = "kyc.process";

/// A single permission scope, e.g. `agent.view`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub scope: String,

    #[serde(default)]
    pub description: String,
}

impl Permission {
    pub fn new(scope: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            description: description.into(),
        }
    }

    pub fn from_scope(scope: impl Into<String>) -> Self {
        Self::new(scope, String::new())
    }
}

/// Role entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    pub scopes: Vec<String>,
    pub active: bool,
}

impl Role {
    pub fn new<I, S>(name: impl Into<String>, scopes: I, active: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            scopes: scopes.into_iter().map(Into::into).collect(),
            active,
        }
    }

    /// Inactive roles grant nothing.
    pub fn grants(&self, scope: &str) -> bool {
        self.active && self.scopes.iter().any(|s| s == scope)
    }
}
