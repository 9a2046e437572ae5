//! Configuration management

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_APP_ENV, DEFAULT_APP_NAME, DEFAULT_LOG_LEVEL, ENV_PREFIX, MAX_PRIMARY_ACTIONS,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub navigation: NavigationSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NavigationSettings {
    /// JSON catalog file. The built-in catalog is used when unset.
    pub catalog_path: Option<String>,
    pub max_primary_actions: usize,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            max_primary_actions: MAX_PRIMARY_ACTIONS,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    pub level: String,
    pub format: LogFormat,
    /// Directory for daily rotated log files; stdout only when unset.
    pub log_dir: Option<String>,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::Json,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from `config/default`, `config/{APP_ENV}` and
    /// `ONBOARDING__*` environment variables, in that order.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_APP_ENV.into());
        let config = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::finish(config)
    }

    /// Load configuration from an inline TOML document layered over the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, AppError> {
        let config = Self::defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        Self::finish(config)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", DEFAULT_APP_ENV)?
            .set_default("app.name", DEFAULT_APP_NAME)?
            .set_default("navigation.max_primary_actions", MAX_PRIMARY_ACTIONS as i64)?
            .set_default("telemetry.level", DEFAULT_LOG_LEVEL)?
            .set_default("telemetry.format", "json")
    }

    fn finish(config: Config) -> Result<Self, AppError> {
        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let max = self.navigation.max_primary_actions;
        if max == 0 || max > MAX_PRIMARY_ACTIONS {
            return Err(AppError::InvalidConfig(format!(
                "navigation.max_primary_actions must be between 1 and {}, got {}",
                MAX_PRIMARY_ACTIONS, max
            )));
        }
        Ok(())
    }
}
