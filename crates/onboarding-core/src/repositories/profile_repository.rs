//! Profile repository trait (port)

use async_trait::async_trait;
use crate::domain::UserProfile;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_profile(&self, user_id: &str) -> Result<Option<UserProfile>, DomainError>;
    async fn update_favorite_navigation_actions(
        &self,
        user_id: &str,
        titles: &[String],
    ) -> Result<(), DomainError>;
}
