// ============================================================================
// Onboarding Core - Navigation Action Entity
// File: crates/onboarding-core/src/domain/navigation_action.rs
// Description: Navigable client destinations and their grouping key
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::role::Permission;

pub const HOME_GROUP: &str = "home";
pub const HELP_GROUP: &str = "help";
pub const KYC_GROUP: &str = "kyc";
pub const PARTNER_GROUP: &str = "partner";
pub const CONSUMER_GROUP: &str = "consumer";
pub const AGENT_GROUP: &str = "agents";
pub const EMPLOYEE_GROUP: &str = "employees";
pub const PATIENT_GROUP: &str = "patient";
pub const ROLE_GROUP: &str = "role";

/// Category key tying a parent action to its children
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationGroup(String);

impl NavigationGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NavigationGroup {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for NavigationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Navigation Action entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NavigationAction {
    pub group: NavigationGroup,

    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: String,

    /// Empty for parents that only expand their nested actions.
    #[serde(default)]
    #[validate(length(max = 255, message = "Route too long"))]
    pub on_tap_route: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Icon URL too long"))]
    pub icon: Option<String>,

    /// Visible to every user when absent.
    #[serde(default)]
    pub required_permission: Option<Permission>,

    #[serde(default)]
    pub sequence_number: u32,

    #[serde(default)]
    pub has_parent: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<NavigationAction>,

    #[serde(default)]
    pub is_high_priority: bool,

    #[serde(default)]
    pub favorite: bool,
}

impl NavigationAction {
    /// A top-level action, the representative of its group.
    pub fn parent(group: impl Into<NavigationGroup>, title: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            title: title.into(),
            on_tap_route: String::new(),
            icon: None,
            required_permission: None,
            sequence_number: 0,
            has_parent: false,
            nested: Vec::new(),
            is_high_priority: false,
            favorite: false,
        }
    }

    /// An action nested under the parent of `group`.
    pub fn child(group: impl Into<NavigationGroup>, title: impl Into<String>) -> Self {
        Self {
            has_parent: true,
            ..Self::parent(group, title)
        }
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.on_tap_route = route.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.required_permission = Some(permission);
        self
    }

    pub fn with_sequence(mut self, sequence_number: u32) -> Self {
        self.sequence_number = sequence_number;
        self
    }

    pub fn high_priority(mut self) -> Self {
        self.is_high_priority = true;
        self
    }

    /// No nested actions, so it may sit in the bottom navigation bar.
    pub fn is_leaf(&self) -> bool {
        self.nested.is_empty()
    }
}
