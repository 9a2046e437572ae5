//! Role repository trait (port)

use async_trait::async_trait;
use crate::domain::Role;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// All roles assigned to the user, active or not.
    async fn find_roles_by_user(&self, user_id: &str) -> Result<Vec<Role>, DomainError>;
}
