//! User profile as seen by the navigation module

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,

    /// Titles of the navigation actions the user bookmarked.
    #[serde(default)]
    pub favorite_navigation_actions: Vec<String>,
}

impl UserProfile {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            favorite_navigation_actions: Vec::new(),
        }
    }

    pub fn is_favorite_action(&self, title: &str) -> bool {
        self.favorite_navigation_actions.iter().any(|t| t == title)
    }
}
