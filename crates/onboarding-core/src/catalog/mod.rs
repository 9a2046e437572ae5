//! Navigation catalog
//!
//! The full set of navigation actions a client can show. Loaded and
//! validated once at startup, then shared read-only between requests.

pub mod builtin;

use std::collections::HashSet;
use std::path::Path;

use onboarding_shared::NavigationSettings;
use tracing::info;
use validator::Validate;

use crate::domain::NavigationAction;
use crate::error::CatalogError;

#[derive(Debug, Clone)]
pub struct NavigationCatalog {
    actions: Vec<NavigationAction>,
}

impl NavigationCatalog {
    /// Validate `actions` and wrap them.
    ///
    /// Every group needs exactly one parent and titles must be unique.
    /// Nesting happens per request, so no catalog entry may carry nested
    /// actions of its own.
    pub fn new(actions: Vec<NavigationAction>) -> Result<Self, CatalogError> {
        validate_actions(&actions)?;
        Ok(Self { actions })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin::all_navigation_actions())
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let actions: Vec<NavigationAction> = serde_json::from_str(json)?;
        Self::new(actions)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Catalog file from the settings, or the built-in catalog.
    pub fn from_settings(settings: &NavigationSettings) -> Result<Self, CatalogError> {
        let catalog = match &settings.catalog_path {
            Some(path) => {
                info!("Loading navigation catalog from {}", path);
                Self::from_json_file(path)?
            }
            None => {
                info!("Using built-in navigation catalog");
                Self::builtin()?
            }
        };
        info!("Navigation catalog loaded with {} actions", catalog.len());
        Ok(catalog)
    }

    pub fn actions(&self) -> &[NavigationAction] {
        &self.actions
    }

    pub fn find_by_title(&self, title: &str) -> Option<&NavigationAction> {
        self.actions.iter().find(|action| action.title == title)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

fn validate_actions(actions: &[NavigationAction]) -> Result<(), CatalogError> {
    let mut titles = HashSet::new();
    let mut parent_groups = HashSet::new();

    for action in actions {
        action.validate().map_err(|source| CatalogError::Validation {
            title: action.title.clone(),
            source,
        })?;

        if !titles.insert(action.title.as_str()) {
            return Err(CatalogError::DuplicateTitle(action.title.clone()));
        }

        if !action.nested.is_empty() {
            return Err(CatalogError::PrenestedAction(action.title.clone()));
        }

        if !action.has_parent && !parent_groups.insert(&action.group) {
            return Err(CatalogError::DuplicateParent(action.group.clone()));
        }
    }

    if let Some(orphan) = actions
        .iter()
        .find(|action| action.has_parent && !parent_groups.contains(&action.group))
    {
        return Err(CatalogError::OrphanedChild {
            group: orphan.group.clone(),
            title: orphan.title.clone(),
        });
    }

    Ok(())
}
