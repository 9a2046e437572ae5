//! # Onboarding Core
//! 
//! Navigation actions for onboarding users: the catalog, the
//! filter/group/prioritize pipeline, and the services and repository
//! ports around it.

pub mod domain;
pub mod navigation;
pub mod catalog;
pub mod services;
pub mod repositories;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use catalog::NavigationCatalog;
pub use error::{CatalogError, DomainError};
pub use services::NavigationService;
