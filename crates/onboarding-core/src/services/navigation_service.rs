// ============================================================================
// Onboarding Core - Navigation Service
// File: crates/onboarding-core/src/services/navigation_service.rs
// ============================================================================
//! Per-user navigation actions and favorite bookmarks

use std::collections::HashSet;
use std::sync::Arc;

use onboarding_shared::constants::MAX_PRIMARY_ACTIONS;
use onboarding_shared::NavigationSettings;
use tracing::{debug, info, warn};

use crate::catalog::NavigationCatalog;
use crate::domain::{GroupedNavigationActions, UserProfile};
use crate::error::DomainError;
use crate::navigation;
use crate::repositories::{ProfileRepository, RoleRepository};

/// Navigation service backed by the role and profile stores
pub struct NavigationService<R: RoleRepository, P: ProfileRepository> {
    role_repo: Arc<R>,
    profile_repo: Arc<P>,
    catalog: Arc<NavigationCatalog>,
    max_primary_actions: usize,
}

impl<R: RoleRepository, P: ProfileRepository> NavigationService<R, P> {
    pub fn new(role_repo: Arc<R>, profile_repo: Arc<P>, catalog: Arc<NavigationCatalog>) -> Self {
        Self {
            role_repo,
            profile_repo,
            catalog,
            max_primary_actions: MAX_PRIMARY_ACTIONS,
        }
    }

    /// Load the catalog named by `settings` and honour its primary limit,
    /// kept within `1..=MAX_PRIMARY_ACTIONS`.
    pub fn from_settings(
        role_repo: Arc<R>,
        profile_repo: Arc<P>,
        settings: &NavigationSettings,
    ) -> Result<Self, DomainError> {
        let catalog = NavigationCatalog::from_settings(settings)?;
        Ok(Self {
            role_repo,
            profile_repo,
            catalog: Arc::new(catalog),
            max_primary_actions: settings.max_primary_actions.clamp(1, MAX_PRIMARY_ACTIONS),
        })
    }

    /// Primary and secondary navigation actions for a user
    pub async fn get_user_navigation_actions(
        &self,
        user_id: &str,
    ) -> Result<GroupedNavigationActions, DomainError> {
        debug!("Building navigation actions for user: {}", user_id);

        // 1. Favorites come from the profile
        let profile = self.find_profile(user_id).await?;
        let favorites: HashSet<String> =
            profile.favorite_navigation_actions.into_iter().collect();

        // 2. Only active roles count, the pipeline filters them
        let roles = self.role_repo.find_roles_by_user(user_id).await?;

        // 3. Filter, group, prioritize
        let grouped = navigation::user_navigation_actions_with_limit(
            self.catalog.actions(),
            &roles,
            &favorites,
            self.max_primary_actions,
        );

        debug!(
            "User {} has {} primary and {} secondary navigation actions",
            user_id,
            grouped.primary.len(),
            grouped.secondary.len()
        );

        Ok(grouped)
    }

    /// Bookmark a navigation action by title
    pub async fn save_favorite_navigation_action(
        &self,
        user_id: &str,
        title: &str,
    ) -> Result<bool, DomainError> {
        info!("Saving favorite navigation action {} for user: {}", title, user_id);

        if self.catalog.find_by_title(title).is_none() {
            warn!("Unknown navigation action: {}", title);
            return Err(DomainError::NavigationActionNotFound(title.to_string()));
        }

        let profile = self.find_profile(user_id).await?;
        if profile.is_favorite_action(title) {
            warn!("Navigation action {} is already a favorite of user: {}", title, user_id);
            return Err(DomainError::FavoriteActionNotAdded(title.to_string()));
        }

        let mut favorites = profile.favorite_navigation_actions;
        favorites.push(title.to_string());

        self.profile_repo
            .update_favorite_navigation_actions(user_id, &favorites)
            .await?;

        Ok(true)
    }

    /// Remove a bookmarked navigation action
    pub async fn delete_favorite_navigation_action(
        &self,
        user_id: &str,
        title: &str,
    ) -> Result<bool, DomainError> {
        info!("Removing favorite navigation action {} for user: {}", title, user_id);

        let profile = self.find_profile(user_id).await?;
        let favorites: Vec<String> = profile
            .favorite_navigation_actions
            .iter()
            .filter(|t| *t != title)
            .cloned()
            .collect();

        // Exactly one entry must go
        if favorites.len() + 1 != profile.favorite_navigation_actions.len() {
            warn!("Navigation action {} is not a single favorite of user: {}", title, user_id);
            return Err(DomainError::FavoriteActionNotRemoved(title.to_string()));
        }

        self.profile_repo
            .update_favorite_navigation_actions(user_id, &favorites)
            .await?;

        Ok(true)
    }

    async fn find_profile(&self, user_id: &str) -> Result<UserProfile, DomainError> {
        self.profile_repo.find_profile(user_id).await?.ok_or_else(|| {
            warn!("Profile not found for user: {}", user_id);
            DomainError::UserNotFound(user_id.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::*;
    use crate::domain::role::*;
    use crate::repositories::profile_repository::MockProfileRepository;
    use crate::repositories::role_repository::MockRoleRepository;

    fn profile_with_favorites(favorites: &[&str]) -> UserProfile {
        UserProfile {
            id: "user-1".to_string(),
            favorite_navigation_actions: favorites.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn profile_repo_returning(profile: Option<UserProfile>) -> MockProfileRepository {
        let mut repo = MockProfileRepository::new();
        repo.expect_find_profile()
            .withf(|user_id| user_id == "user-1")
            .returning(move |_| Ok(profile.clone()));
        repo
    }

    fn service(
        roles: MockRoleRepository,
        profiles: MockProfileRepository,
    ) -> NavigationService<MockRoleRepository, MockProfileRepository> {
        let catalog = NavigationCatalog::builtin().unwrap();
        NavigationService::new(Arc::new(roles), Arc::new(profiles), Arc::new(catalog))
    }

    fn titles(actions: &[crate::domain::NavigationAction]) -> Vec<&str> {
        actions.iter().map(|action| action.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_agent_navigation_actions() -> anyhow::Result<()> {
        let mut roles = MockRoleRepository::new();
        roles.expect_find_roles_by_user().returning(|_| {
            Ok(vec![Role::new(
                "Agent Role",
                [CAN_VIEW_AGENT, CAN_REGISTER_AGENT, CAN_IDENTIFY_AGENT],
                true,
            )])
        });
        let profiles = profile_repo_returning(Some(profile_with_favorites(&[HOME_TITLE])));

        let grouped = service(roles, profiles)
            .get_user_navigation_actions("user-1")
            .await?;

        assert_eq!(grouped.len(), 3);
        assert_eq!(titles(&grouped.primary), vec![HOME_TITLE, HELP_TITLE]);
        assert!(grouped.primary[0].favorite);
        assert!(!grouped.primary[1].favorite);

        assert_eq!(titles(&grouped.secondary), vec![AGENT_TITLE]);
        assert_eq!(
            titles(&grouped.secondary[0].nested),
            vec![AGENT_REGISTRATION_TITLE, AGENT_IDENTIFICATION_TITLE]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_inactive_roles_only_see_public_actions() -> anyhow::Result<()> {
        let mut roles = MockRoleRepository::new();
        roles
            .expect_find_roles_by_user()
            .returning(|_| Ok(vec![Role::new("Suspended", [CAN_VIEW_AGENT, CAN_VIEW_ROLE], false)]));
        let profiles = profile_repo_returning(Some(profile_with_favorites(&[])));

        let grouped = service(roles, profiles)
            .get_user_navigation_actions("user-1")
            .await?;

        assert_eq!(titles(&grouped.primary), vec![HOME_TITLE, HELP_TITLE]);
        assert!(grouped.secondary.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_employee_navigation_actions_overflow() -> anyhow::Result<()> {
        let mut roles = MockRoleRepository::new();
        roles.expect_find_roles_by_user().returning(|_| {
            Ok(vec![Role::new(
                "Employee Role",
                [
                    CAN_PROCESS_KYC,
                    CAN_VIEW_PARTNER,
                    CAN_VIEW_CONSUMERS,
                    CAN_VIEW_PATIENT,
                    CAN_CREATE_PATIENT,
                ],
                true,
            )])
        });
        let profiles = profile_repo_returning(Some(profile_with_favorites(&[])));

        let grouped = service(roles, profiles)
            .get_user_navigation_actions("user-1")
            .await?;

        // Home is high priority, the rest fill up by sequence number.
        assert_eq!(
            titles(&grouped.primary),
            vec![HOME_TITLE, REQUESTS_TITLE, PARTNER_TITLE, CONSUMER_TITLE]
        );
        assert_eq!(titles(&grouped.secondary), vec![PATIENT_TITLE, HELP_TITLE]);
        assert_eq!(titles(&grouped.secondary[0].nested), vec![PATIENT_REGISTRATION_TITLE]);
        Ok(())
    }

    #[tokio::test]
    async fn test_primary_limit_from_settings() -> anyhow::Result<()> {
        let mut roles = MockRoleRepository::new();
        roles.expect_find_roles_by_user().returning(|_| Ok(vec![]));
        let profiles = profile_repo_returning(Some(profile_with_favorites(&[])));

        let settings = NavigationSettings {
            catalog_path: None,
            max_primary_actions: 1,
        };
        let service = NavigationService::from_settings(Arc::new(roles), Arc::new(profiles), &settings)?;

        let grouped = service.get_user_navigation_actions("user-1").await?;
        assert_eq!(titles(&grouped.primary), vec![HOME_TITLE]);
        assert_eq!(titles(&grouped.secondary), vec![HELP_TITLE]);
        Ok(())
    }

    #[tokio::test]
    async fn test_zero_primary_limit_keeps_one_slot() -> anyhow::Result<()> {
        let mut roles = MockRoleRepository::new();
        roles.expect_find_roles_by_user().returning(|_| Ok(vec![]));
        let profiles = profile_repo_returning(Some(profile_with_favorites(&[])));

        let settings = NavigationSettings {
            catalog_path: None,
            max_primary_actions: 0,
        };
        let service = NavigationService::from_settings(Arc::new(roles), Arc::new(profiles), &settings)?;

        let grouped = service.get_user_navigation_actions("user-1").await?;
        assert_eq!(titles(&grouped.primary), vec![HOME_TITLE]);
        assert_eq!(titles(&grouped.secondary), vec![HELP_TITLE]);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_profile_is_user_not_found() {
        let mut roles = MockRoleRepository::new();
        roles.expect_find_roles_by_user().never();
        let profiles = profile_repo_returning(None);

        let err = service(roles, profiles)
            .get_user_navigation_actions("user-1")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::UserNotFound(id) if id == "user-1"));
    }

    #[tokio::test]
    async fn test_role_store_failure_propagates() {
        let mut roles = MockRoleRepository::new();
        roles
            .expect_find_roles_by_user()
            .returning(|_| Err(DomainError::RepositoryError("timeout".to_string())));
        let profiles = profile_repo_returning(Some(profile_with_favorites(&[])));

        let err = service(roles, profiles)
            .get_user_navigation_actions("user-1")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::RepositoryError(_)));
    }

    #[tokio::test]
    async fn test_save_favorite_appends_title() -> anyhow::Result<()> {
        let mut profiles = profile_repo_returning(Some(profile_with_favorites(&[HOME_TITLE])));
        profiles
            .expect_update_favorite_navigation_actions()
            .withf(|user_id, titles| {
                user_id == "user-1" && titles.to_vec() == vec![HOME_TITLE.to_string(), HELP_TITLE.to_string()]
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let saved = service(MockRoleRepository::new(), profiles)
            .save_favorite_navigation_action("user-1", HELP_TITLE)
            .await?;
        assert!(saved);
        Ok(())
    }

    #[tokio::test]
    async fn test_save_existing_favorite_is_rejected() {
        let mut profiles = profile_repo_returning(Some(profile_with_favorites(&[HOME_TITLE])));
        profiles.expect_update_favorite_navigation_actions().never();

        let err = service(MockRoleRepository::new(), profiles)
            .save_favorite_navigation_action("user-1", HOME_TITLE)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::FavoriteActionNotAdded(_)));
    }

    #[tokio::test]
    async fn test_save_unknown_action_is_rejected() {
        let mut profiles = MockProfileRepository::new();
        profiles.expect_find_profile().never();
        profiles.expect_update_favorite_navigation_actions().never();

        let err = service(MockRoleRepository::new(), profiles)
            .save_favorite_navigation_action("user-1", "Settings")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NavigationActionNotFound(title) if title == "Settings"));
    }

    #[tokio::test]
    async fn test_delete_favorite_removes_title() -> anyhow::Result<()> {
        let mut profiles =
            profile_repo_returning(Some(profile_with_favorites(&[HOME_TITLE, HELP_TITLE])));
        profiles
            .expect_update_favorite_navigation_actions()
            .withf(|user_id, titles| user_id == "user-1" && titles.to_vec() == vec![HELP_TITLE.to_string()])
            .times(1)
            .returning(|_, _| Ok(()));

        let deleted = service(MockRoleRepository::new(), profiles)
            .delete_favorite_navigation_action("user-1", HOME_TITLE)
            .await?;
        assert!(deleted);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_favorite_is_rejected() {
        let mut profiles = profile_repo_returning(Some(profile_with_favorites(&[HELP_TITLE])));
        profiles.expect_update_favorite_navigation_actions().never();

        let err = service(MockRoleRepository::new(), profiles)
            .delete_favorite_navigation_action("user-1", HOME_TITLE)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::FavoriteActionNotRemoved(_)));
    }

    #[tokio::test]
    async fn test_delete_duplicated_favorite_is_rejected() {
        let mut profiles =
            profile_repo_returning(Some(profile_with_favorites(&[HOME_TITLE, HELP_TITLE, HOME_TITLE])));
        profiles.expect_update_favorite_navigation_actions().never();

        let err = service(MockRoleRepository::new(), profiles)
            .delete_favorite_navigation_action("user-1", HOME_TITLE)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::FavoriteActionNotRemoved(title) if title == HOME_TITLE));
    }
}
