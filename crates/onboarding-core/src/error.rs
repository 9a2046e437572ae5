//! Domain errors

use thiserror::Error;

use crate::domain::NavigationGroup;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Navigation action not found: {0}")]
    NavigationActionNotFound(String),

    #[error("Failed to add favorite navigation action: {0}")]
    FavoriteActionNotAdded(String),

    #[error("Failed to remove favorite navigation action: {0}")]
    FavoriteActionNotRemoved(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Problems found while loading or validating the navigation catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid navigation action {title}: {source}")]
    Validation {
        title: String,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("Group {0} has more than one parent action")]
    DuplicateParent(NavigationGroup),

    #[error("Child action {title} references group {group} which has no parent action")]
    OrphanedChild { group: NavigationGroup, title: String },

    #[error("Duplicate navigation action title: {0}")]
    DuplicateTitle(String),

    #[error("Catalog action {0} cannot carry nested actions, children are nested by group")]
    PrenestedAction(String),

    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}
