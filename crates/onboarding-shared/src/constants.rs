//! Application-wide constants

/// Upper bound of the bottom navigation bar.
pub const MAX_PRIMARY_ACTIONS: usize = 4;
pub const DEFAULT_APP_NAME: &str = "onboarding";
pub const DEFAULT_APP_ENV: &str = "development";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILE_PREFIX: &str = "onboarding";
pub const ENV_PREFIX: &str = "ONBOARDING";
