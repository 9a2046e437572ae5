//! Per-request navigation output

use serde::{Deserialize, Serialize};

use super::navigation_action::NavigationAction;

/// Bottom navigation (`primary`) and overflow (`secondary`) actions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedNavigationActions {
    pub primary: Vec<NavigationAction>,
    pub secondary: Vec<NavigationAction>,
}

impl GroupedNavigationActions {
    pub fn len(&self) -> usize {
        self.primary.len() + self.secondary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }
}
