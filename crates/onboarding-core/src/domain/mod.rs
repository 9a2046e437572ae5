//! # Onboarding Core - Domain Module
//! 
//! Domain entities for navigation actions and authorization.

pub mod navigation_action;
pub mod grouped_navigation_actions;
pub mod role;
pub mod user_profile;

// Re-export all entities
pub use navigation_action::{NavigationAction, NavigationGroup};
pub use grouped_navigation_actions::GroupedNavigationActions;
pub use role::{Permission, Role};
pub use user_profile::UserProfile;
