//! # Onboarding Shared
//! 
//! Shared configuration, telemetry, and utilities for the onboarding navigation crates.

pub mod constants;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use self::config::{AppConfig, LogFormat, NavigationSettings, TelemetrySettings};
pub use error::AppError;
